/*
Copyright (c) 2023 Michał Margos

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and
associated documentation files (the “Software”), to deal in the Software without restriction,
including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense,
and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do
so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial
portions of the Software.

THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS
OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY,
WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
*/

//! The ordered, growable container an [`IndexedMap`](crate::IndexedMap) reads
//! from and writes to.

use alloc::{collections::VecDeque, vec::Vec};
use core::mem;

/// An ordered, index-addressable, growable sequence whose slots may be absent.
///
/// Positions are 0-based and [`len`](Sequence::len) is authoritative: every
/// index in `0..len()` is a slot, whether or not it currently holds a value.
///
/// Reading an absent slot and reading past the end both yield `None`. Callers
/// that need to tell the two apart must compare the index with `len()`.
pub trait Sequence {
    /// The type of value held in a slot.
    type Item;

    /// Returns the number of slots, absent ones included.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence has no slots.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the value at `index`, if the slot exists and
    /// holds one.
    fn slot(&self, index: usize) -> Option<&Self::Item>;

    /// Returns a mutable reference to the value at `index`, if the slot exists
    /// and holds one.
    fn slot_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Overwrites the slot at `index`, returning what it held.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn replace(&mut self, index: usize, value: Option<Self::Item>) -> Option<Self::Item>;

    /// Appends a slot to the back of the sequence.
    fn push(&mut self, value: Option<Self::Item>);

    /// Removes every slot. The length becomes 0.
    fn clear(&mut self);
}

impl<T> Sequence for Vec<Option<T>> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn slot(&self, index: usize) -> Option<&T> {
        self.get(index).and_then(Option::as_ref)
    }

    #[inline]
    fn slot_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index).and_then(Option::as_mut)
    }

    fn replace(&mut self, index: usize, value: Option<T>) -> Option<T> {
        mem::replace(&mut self[index], value)
    }

    #[inline]
    fn push(&mut self, value: Option<T>) {
        Vec::push(self, value);
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}

impl<T> Sequence for VecDeque<Option<T>> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn slot(&self, index: usize) -> Option<&T> {
        self.get(index).and_then(Option::as_ref)
    }

    #[inline]
    fn slot_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index).and_then(Option::as_mut)
    }

    fn replace(&mut self, index: usize, value: Option<T>) -> Option<T> {
        mem::replace(&mut self[index], value)
    }

    #[inline]
    fn push(&mut self, value: Option<T>) {
        self.push_back(value);
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }
}

// Lets a map borrow a sequence the caller keeps ownership of.
impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn slot(&self, index: usize) -> Option<&S::Item> {
        (**self).slot(index)
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut S::Item> {
        (**self).slot_mut(index)
    }

    fn replace(&mut self, index: usize, value: Option<S::Item>) -> Option<S::Item> {
        (**self).replace(index, value)
    }

    fn push(&mut self, value: Option<S::Item>) {
        (**self).push(value)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

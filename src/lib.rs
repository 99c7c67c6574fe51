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

//! A map view over an ordered, growable sequence, written as
//! `IndexedMap<S>`. The keys of the map are the positions of the sequence,
//! so storage stays dense and ordered while callers keep map ergonomics.
//!
//! Lookups are *O*(1). Inserting at or before the end is *O*(1) amortized;
//! inserting past the end is *O*(*k*) in the size of the gap, which is filled
//! with absent slots.
//!
//! # Examples
//!
//! Wrap any [`Sequence`], such as a `Vec<Option<T>>`:
//!
//! ```
//! use indexed_map::IndexedMap;
//!
//! let map = IndexedMap::new(vec![Some("a"), Some("b")]);
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get(1), Some(&"b"));
//! ```
//!
//! Writing past the end grows the sequence:
//!
//! ```
//! use indexed_map::IndexedMap;
//!
//! let mut map = IndexedMap::new(vec![Some("a"), Some("b")]);
//! assert_eq!(map.insert(4, "c"), Ok(None));
//!
//! assert_eq!(map.len(), 5);
//! assert!(map.contains_key(3));
//! assert_eq!(map.get(3), None);
//! assert_eq!(map.get(4), Some(&"c"));
//! ```
//!
//! Removing never shrinks it:
//!
//! ```
//! use indexed_map::IndexedMap;
//!
//! let mut map = IndexedMap::new(vec![Some("a"), Some("b")]);
//! assert_eq!(map.remove(0), Some("a"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get(0), None);
//! ```
//!
//! # Absent slots
//!
//! A slot inside `0..len()` may hold no value. [`get`](IndexedMap::get) and
//! [`remove`](IndexedMap::remove) report such a slot exactly like a key that
//! is out of range, as `None`. Use [`contains_key`](IndexedMap::contains_key)
//! to tell the two apart.

#![no_std]

use core::{
    any::Any,
    fmt::{self, Debug},
    hash::{Hash, Hasher},
    ops::{Index, IndexMut, Range},
};

extern crate alloc;

use tracing::trace;

mod entry;
mod entry_set;
pub mod error;
mod iter;
mod key;
mod sequence;
#[cfg(feature = "serde")]
mod serialize;

pub use entry::{Entry, EntryMut};
pub use entry_set::EntrySet;
pub use error::{Error, Result};
pub use iter::{Entries, EntryCursor};
pub use key::Key;
pub use sequence::Sequence;

/// A map keyed by position, backed by a [`Sequence`].
///
/// The map owns its sequence and has no other state. The key domain is
/// exactly `0..len()` of the sequence at any instant, so anything done to the
/// sequence through [`values_mut`](IndexedMap::values_mut) is immediately
/// reflected by the map.
///
/// To keep ownership of the sequence elsewhere, wrap a `&mut` to it:
///
/// ```
/// use indexed_map::IndexedMap;
///
/// let mut list = vec![Some(1), Some(2)];
/// IndexedMap::new(&mut list).insert(2, 3).unwrap();
/// assert_eq!(list, [Some(1), Some(2), Some(3)]);
/// ```
///
/// # Indexing
///
/// `IndexedMap` implements [`Index`], which panics on a missing key, much
/// like the standard maps:
///
/// ```should_panic
/// use indexed_map::IndexedMap;
///
/// let map = IndexedMap::new(vec![Some(1), None]);
/// println!("{}", map[1]); // it will panic!
/// ```
///
/// # Equality
///
/// Two maps are equal when their sequences are equal slot by slot,
/// regardless of which sequence types back them.
#[derive(Clone, Default)]
pub struct IndexedMap<S> {
    seq: S,
}

impl<S> IndexedMap<S> {
    /// Wraps `seq` without copying it.
    #[inline]
    #[must_use]
    pub const fn new(seq: S) -> Self {
        Self { seq }
    }

    /// Wraps `seq`, failing if there is none.
    ///
    /// # Errors
    ///
    /// [`Error::NullSequence`] if `seq` is `None`.
    pub fn try_new(seq: Option<S>) -> Result<Self> {
        seq.map(Self::new).ok_or(Error::NullSequence)
    }

    /// Returns the backing sequence itself.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &S {
        &self.seq
    }

    /// Returns the backing sequence itself. Writes to it are writes to the map.
    #[inline]
    #[must_use]
    pub fn values_mut(&mut self) -> &mut S {
        &mut self.seq
    }

    /// Unwraps the backing sequence.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<S: Sequence> IndexedMap<S> {
    /// Returns the number of keys, which is the length of the sequence.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    /// Returns `true` if the sequence is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn index_of<K: Key>(&self, key: K) -> Option<usize> {
        key.to_index().ok().filter(|&index| index < self.len())
    }

    /// Returns `true` if `0 <= key < len()`.
    ///
    /// An absent slot is still a key of the map.
    #[must_use]
    pub fn contains_key<K: Key>(&self, key: K) -> bool {
        self.index_of(key).is_some()
    }

    /// Like [`contains_key`](IndexedMap::contains_key), for a key of unknown type.
    ///
    /// # Errors
    ///
    /// [`Error::NullKey`] if `key` is `None` and [`Error::InvalidKeyType`] if
    /// it is not a primitive integer.
    pub fn contains_dyn_key(&self, key: Option<&dyn Any>) -> Result<bool> {
        Ok(self.contains_key(key::from_any(key)?))
    }

    /// Returns `true` if some slot holds a value equal to `value`.
    ///
    /// Absent slots never match, so this cannot be used to look for them;
    /// compare [`get`](IndexedMap::get) with `None` over [`keys`](IndexedMap::keys)
    /// instead.
    #[must_use]
    pub fn contains_value(&self, value: &S::Item) -> bool
    where
        S::Item: PartialEq,
    {
        self.keys().any(|index| self.seq.slot(index) == Some(value))
    }

    /// Returns a reference to the value at `key`.
    ///
    /// `None` both when the key is out of range and when its slot is absent.
    #[must_use]
    pub fn get<K: Key>(&self, key: K) -> Option<&S::Item> {
        self.seq.slot(self.index_of(key)?)
    }

    /// Returns a mutable reference to the value at `key`.
    #[must_use]
    pub fn get_mut<K: Key>(&mut self, key: K) -> Option<&mut S::Item> {
        let index = self.index_of(key)?;
        self.seq.slot_mut(index)
    }

    /// Like [`get`](IndexedMap::get), for a key of unknown type.
    ///
    /// # Errors
    ///
    /// See [`contains_dyn_key`](IndexedMap::contains_dyn_key).
    pub fn get_dyn(&self, key: Option<&dyn Any>) -> Result<Option<&S::Item>> {
        Ok(self.get(key::from_any(key)?))
    }

    /// Stores `value` at `key`, returning the previous value.
    ///
    /// A key equal to `len()` appends. A key past the end first pads the
    /// sequence with absent slots so that `value` lands at `key`.
    ///
    /// # Errors
    ///
    /// [`Error::NegativeKey`] or [`Error::KeyOverflow`] if `key` is not a
    /// valid position. The map is unchanged in that case.
    pub fn insert<K: Key>(&mut self, key: K, value: S::Item) -> Result<Option<S::Item>> {
        self.insert_slot(key, Some(value))
    }

    /// Like [`insert`](IndexedMap::insert), but may also store an absent value.
    ///
    /// # Errors
    ///
    /// See [`insert`](IndexedMap::insert).
    pub fn insert_slot<K: Key>(
        &mut self,
        key: K,
        value: Option<S::Item>,
    ) -> Result<Option<S::Item>> {
        Ok(self.put_index(key.to_index()?, value))
    }

    pub(crate) fn put_index(&mut self, index: usize, value: Option<S::Item>) -> Option<S::Item> {
        let len = self.seq.len();

        if index < len {
            return self.seq.replace(index, value);
        }

        if index > len {
            trace!(len, index, gap = index - len, "padding sequence with absent slots");

            for _ in len..index {
                self.seq.push(None);
            }
        }

        self.seq.push(value);
        None
    }

    /// Inserts every pair of `entries` in iteration order.
    ///
    /// # Errors
    ///
    /// Stops at the first key [`insert`](IndexedMap::insert) rejects. Pairs
    /// before it stay applied.
    pub fn try_extend<K, I>(&mut self, entries: I) -> Result<()>
    where
        K: Key,
        I: IntoIterator<Item = (K, S::Item)>,
    {
        for (key, value) in entries {
            self.insert(key, value)?;
        }

        Ok(())
    }

    /// Like [`try_extend`](IndexedMap::try_extend), for keys of unknown type.
    ///
    /// # Errors
    ///
    /// Stops at the first key that is null, not an integer, or not a valid
    /// position. Pairs before it stay applied.
    pub fn try_extend_dyn<'k, I>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (Option<&'k dyn Any>, S::Item)>,
    {
        for (key, value) in entries {
            self.insert(key::from_any(key)?, value)?;
        }

        Ok(())
    }

    /// Empties the slot at `key`, returning the value it held.
    ///
    /// The length is never reduced. A key out of range is a no-op.
    pub fn remove<K: Key>(&mut self, key: K) -> Option<S::Item> {
        let index = self.index_of(key)?;
        self.seq.replace(index, None)
    }

    /// Like [`remove`](IndexedMap::remove), for a key of unknown type.
    ///
    /// # Errors
    ///
    /// See [`contains_dyn_key`](IndexedMap::contains_dyn_key).
    pub fn remove_dyn(&mut self, key: Option<&dyn Any>) -> Result<Option<S::Item>> {
        Ok(self.remove(key::from_any(key)?))
    }

    /// Empties the sequence. The length becomes 0.
    pub fn clear(&mut self) {
        trace!(len = self.seq.len(), "clearing sequence");
        self.seq.clear();
    }

    /// Returns the keys of the map, in order.
    #[inline]
    #[must_use]
    pub fn keys(&self) -> Range<usize> {
        0..self.len()
    }

    /// Returns a live view of the entry at `key`, if it is in range.
    #[must_use]
    pub fn entry<K: Key>(&self, key: K) -> Option<Entry<'_, S>> {
        let index = self.index_of(key)?;
        Some(Entry::new(self, index))
    }

    /// Returns a live, writable view of the entry at `key`, if it is in range.
    #[must_use]
    pub fn entry_mut<K: Key>(&mut self, key: K) -> Option<EntryMut<'_, S>> {
        let index = self.index_of(key)?;
        Some(EntryMut::new(self, index))
    }

    /// Returns an iterator over the entries, in ascending key order.
    #[must_use]
    pub fn entries(&self) -> Entries<'_, S> {
        Entries::new(self)
    }

    /// Returns a cursor over the entries that may modify the map as it goes.
    #[must_use]
    pub fn cursor(&mut self) -> EntryCursor<'_, S> {
        EntryCursor::new(self)
    }

    /// Returns the entries of the map viewed as a set.
    #[must_use]
    pub fn entry_set(&mut self) -> EntrySet<'_, S> {
        EntrySet::new(self)
    }
}

impl<S> From<S> for IndexedMap<S> {
    fn from(seq: S) -> Self {
        Self::new(seq)
    }
}

impl<S> Debug for IndexedMap<S>
where
    S: Sequence,
    S::Item: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.keys().map(|index| (index, self.seq.slot(index))))
            .finish()
    }
}

impl<S, T> PartialEq<IndexedMap<T>> for IndexedMap<S>
where
    S: Sequence,
    T: Sequence,
    S::Item: PartialEq<T::Item>,
{
    fn eq(&self, other: &IndexedMap<T>) -> bool {
        self.len() == other.len()
            && self.keys().all(|index| {
                match (self.seq.slot(index), other.seq.slot(index)) {
                    (Some(a), Some(b)) => a == b,
                    (None, None) => true,
                    _ => false,
                }
            })
    }
}

impl<S> Eq for IndexedMap<S>
where
    S: Sequence,
    S::Item: Eq,
{
}

impl<S> Hash for IndexedMap<S>
where
    S: Sequence,
    S::Item: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);

        for index in self.keys() {
            self.seq.slot(index).hash(state);
        }
    }
}

impl<S: Sequence> Index<usize> for IndexedMap<S> {
    type Output = S::Item;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("no entry found for key")
    }
}

impl<S: Sequence> IndexMut<usize> for IndexedMap<S> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).expect("no entry found for key")
    }
}

impl<S: Sequence> Extend<(usize, S::Item)> for IndexedMap<S> {
    fn extend<I: IntoIterator<Item = (usize, S::Item)>>(&mut self, iter: I) {
        for (index, value) in iter {
            self.put_index(index, Some(value));
        }
    }
}

impl<'a, S: Sequence> IntoIterator for &'a IndexedMap<S> {
    type Item = Entry<'a, S>;
    type IntoIter = Entries<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

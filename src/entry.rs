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

//! Live views of a single entry.

use core::fmt::{self, Debug};

use crate::{IndexedMap, Sequence};

/// A read-only view of the entry at a fixed position of an [`IndexedMap`].
///
/// The view holds no value of its own; [`value`](Entry::value) reads the map
/// on every call.
pub struct Entry<'a, S> {
    map: &'a IndexedMap<S>,
    index: usize,
}

impl<'a, S: Sequence> Entry<'a, S> {
    pub(crate) fn new(map: &'a IndexedMap<S>, index: usize) -> Self {
        Self { map, index }
    }

    /// Returns the position this entry is bound to.
    #[inline]
    #[must_use]
    pub fn key(&self) -> usize {
        self.index
    }

    /// Returns the value currently stored at this entry's position.
    #[must_use]
    pub fn value(&self) -> Option<&'a S::Item> {
        self.map.get(self.index)
    }
}

impl<S> Clone for Entry<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Entry<'_, S> {}

impl<S> Debug for Entry<'_, S>
where
    S: Sequence,
    S::Item: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Entry")
            .field(&self.key())
            .field(&self.value())
            .finish()
    }
}

/// A writable view of the entry at a fixed position of an [`IndexedMap`].
///
/// Reads and writes go straight through to the map.
///
/// # Examples
///
/// ```
/// use indexed_map::IndexedMap;
///
/// let mut map = IndexedMap::new(vec![Some('a'), Some('b')]);
///
/// let mut entry = map.entry_mut(1).unwrap();
/// assert_eq!(entry.set_value('c'), Some('b'));
/// assert_eq!(entry.value(), Some(&'c'));
///
/// assert_eq!(map.get(1), Some(&'c'));
/// ```
pub struct EntryMut<'a, S> {
    map: &'a mut IndexedMap<S>,
    index: usize,
}

impl<'a, S: Sequence> EntryMut<'a, S> {
    pub(crate) fn new(map: &'a mut IndexedMap<S>, index: usize) -> Self {
        Self { map, index }
    }

    /// Returns the position this entry is bound to.
    #[inline]
    #[must_use]
    pub fn key(&self) -> usize {
        self.index
    }

    /// Returns the value currently stored at this entry's position.
    #[must_use]
    pub fn value(&self) -> Option<&S::Item> {
        self.map.get(self.index)
    }

    /// Returns a mutable reference to the value at this entry's position.
    #[must_use]
    pub fn value_mut(&mut self) -> Option<&mut S::Item> {
        self.map.get_mut(self.index)
    }

    /// Stores `value` at this entry's position, returning the previous value.
    ///
    /// Behaves exactly like [`IndexedMap::insert`] at [`key`](EntryMut::key),
    /// including growth if the map was cleared since the view was made.
    pub fn set_value(&mut self, value: S::Item) -> Option<S::Item> {
        self.map.put_index(self.index, Some(value))
    }

    /// Empties the slot at this entry's position, returning its value.
    pub fn remove(&mut self) -> Option<S::Item> {
        self.map.remove(self.index)
    }

    /// Converts the view into a reference to its value with the map's lifetime.
    #[must_use]
    pub fn into_value(self) -> Option<&'a mut S::Item> {
        let Self { map, index } = self;
        map.get_mut(index)
    }
}

impl<S> Debug for EntryMut<'_, S>
where
    S: Sequence,
    S::Item: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntryMut")
            .field(&self.key())
            .field(&self.value())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, vec};

    use crate::IndexedMap;

    #[test]
    fn entry_reads_live() {
        let mut map = IndexedMap::new(vec![Some(1), Some(2)]);
        let entry = map.entry(1).unwrap();

        assert_eq!(entry.key(), 1);
        assert_eq!(entry.value(), Some(&2));
        assert_eq!(format!("{entry:?}"), "Entry(1, Some(2))");

        map.remove(1);
        assert!(map.entry(1).unwrap().value().is_none());
        assert!(map.entry(2).is_none());
    }

    #[test]
    fn entry_mut_writes_through() {
        let mut map = IndexedMap::new(vec![Some(1), None]);

        {
            let mut entry = map.entry_mut(1).unwrap();
            assert_eq!(entry.value(), None);
            assert_eq!(entry.set_value(5), None);
            *entry.value_mut().unwrap() += 1;
        }
        assert_eq!(map.get(1), Some(&6));

        assert_eq!(map.entry_mut(0).unwrap().remove(), Some(1));
        assert_eq!(map.len(), 2);

        *map.entry_mut(1).unwrap().into_value().unwrap() = 9;
        assert_eq!(map.get(1), Some(&9));
    }
}

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

//! Walking the entries of an [`IndexedMap`] in key order.

use core::iter::FusedIterator;

use crate::{
    entry::{Entry, EntryMut},
    error::{Error, Result},
    IndexedMap, Sequence,
};

/// An iterator over the entries of an [`IndexedMap`], in ascending key order.
/// Item type is [`Entry`].
///
/// Absent slots are yielded too; their entries have no value.
pub struct Entries<'a, S> {
    map: &'a IndexedMap<S>,
    /// Key of the next entry to yield.
    next: usize,
}

impl<'a, S: Sequence> Entries<'a, S> {
    pub(crate) fn new(map: &'a IndexedMap<S>) -> Self {
        Self { map, next: 0 }
    }
}

impl<'a, S: Sequence> Iterator for Entries<'a, S> {
    type Item = Entry<'a, S>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.map.len() {
            return None;
        }

        let entry = Entry::new(self.map, self.next);
        self.next += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }

    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.len()
    }
}

impl<S: Sequence> ExactSizeIterator for Entries<'_, S> {
    fn len(&self) -> usize {
        self.map.len().saturating_sub(self.next)
    }
}

impl<S: Sequence> FusedIterator for Entries<'_, S> {}

/// A single-pass cursor over the entries of an [`IndexedMap`] that holds the
/// map mutably, so entries can be written and removed along the way.
///
/// The cursor's only state is the position of the next entry. Whether one
/// remains is decided against the map's length at the time of asking, so a
/// map grown through [`map`](EntryCursor::map) extends the walk.
///
/// # Examples
///
/// ```
/// use indexed_map::IndexedMap;
///
/// let mut map = IndexedMap::new(vec![Some(1), Some(2), Some(3)]);
/// let mut cursor = map.cursor();
///
/// while cursor.has_next() {
///     let mut entry = cursor.next_entry().unwrap();
///     if let Some(&value) = entry.value() {
///         entry.set_value(value * 10);
///     }
/// }
/// assert!(cursor.next_entry().is_err());
///
/// assert_eq!(map.values(), &[Some(10), Some(20), Some(30)]);
/// ```
pub struct EntryCursor<'a, S> {
    map: &'a mut IndexedMap<S>,
    /// Key of the next entry to yield.
    cursor: usize,
}

impl<'a, S: Sequence> EntryCursor<'a, S> {
    pub(crate) fn new(map: &'a mut IndexedMap<S>) -> Self {
        Self { map, cursor: 0 }
    }

    /// Returns `true` if the map has an entry at the cursor.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.cursor < self.map.len()
    }

    /// Returns the key the next call to [`next_entry`](EntryCursor::next_entry)
    /// would yield.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Yields the entry at the cursor and advances past it.
    ///
    /// # Errors
    ///
    /// [`Error::NoMoreElements`] if [`has_next`](EntryCursor::has_next) is false.
    pub fn next_entry(&mut self) -> Result<EntryMut<'_, S>> {
        if !self.has_next() {
            return Err(Error::NoMoreElements);
        }

        let index = self.cursor;
        self.cursor += 1;
        Ok(EntryMut::new(self.map, index))
    }

    /// Empties the slot at the cursor, returning its value.
    ///
    /// The cursor has already moved past the last yielded entry, so this
    /// empties the slot *after* it, that is the one the next call to
    /// [`next_entry`](EntryCursor::next_entry) would yield. A cursor at the
    /// end removes nothing.
    ///
    /// ```
    /// use indexed_map::IndexedMap;
    ///
    /// let mut map = IndexedMap::new(vec![Some('a'), Some('b')]);
    /// let mut cursor = map.cursor();
    ///
    /// cursor.next_entry().unwrap();
    /// assert_eq!(cursor.remove_current(), Some('b'));
    ///
    /// assert_eq!(map.values(), &[Some('a'), None]);
    /// ```
    pub fn remove_current(&mut self) -> Option<S::Item> {
        self.map.remove(self.cursor)
    }

    /// Returns the map being walked.
    #[must_use]
    pub fn map(&mut self) -> &mut IndexedMap<S> {
        self.map
    }
}

#[cfg(test)]
mod tests {
    use alloc::{vec, vec::Vec};

    use crate::{Error, IndexedMap};

    #[test]
    fn entries_yield_every_slot_in_order() {
        let map = IndexedMap::new(vec![Some('a'), None, Some('c')]);

        let seen: Vec<_> = map.entries().map(|e| (e.key(), e.value())).collect();

        assert_eq!(seen, [(0, Some(&'a')), (1, None), (2, Some(&'c'))]);
    }

    #[test]
    fn entries_report_exact_length() {
        let map = IndexedMap::new(vec![Some(1), Some(2), Some(3)]);
        let mut entries = map.entries();

        assert_eq!(entries.len(), 3);
        entries.next();
        assert_eq!(entries.size_hint(), (2, Some(2)));
        assert_eq!(entries.count(), 2);
    }

    #[test]
    fn empty_map_yields_nothing() {
        let mut map = IndexedMap::new(Vec::<Option<u8>>::new());

        assert!(map.entries().next().is_none());
        let mut cursor = map.cursor();
        assert!(!cursor.has_next());
        assert_eq!(cursor.next_entry().unwrap_err(), Error::NoMoreElements);
    }

    #[test]
    fn cursor_sees_growth() {
        let mut map = IndexedMap::new(vec![Some(1)]);
        let mut cursor = map.cursor();

        assert_eq!(cursor.next_entry().unwrap().key(), 0);
        assert!(!cursor.has_next());

        cursor.map().insert(2, 3).unwrap();
        assert!(cursor.has_next());
        assert_eq!(cursor.next_entry().unwrap().value(), None);
        assert_eq!(cursor.next_entry().unwrap().value(), Some(&3));
        assert!(!cursor.has_next());
    }

    #[test]
    fn cursor_sees_clear() {
        let mut map = IndexedMap::new(vec![Some(1), Some(2)]);
        let mut cursor = map.cursor();

        cursor.next_entry().unwrap();
        cursor.map().clear();

        assert!(!cursor.has_next());
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn remove_current_targets_the_cursor() {
        let mut map = IndexedMap::new(vec![Some(1), Some(2), Some(3)]);
        let mut cursor = map.cursor();

        assert_eq!(cursor.remove_current(), Some(1));
        cursor.next_entry().unwrap();
        cursor.next_entry().unwrap();
        cursor.next_entry().unwrap();
        assert_eq!(cursor.remove_current(), None);

        assert_eq!(map.values(), &[None, Some(2), Some(3)]);
    }
}

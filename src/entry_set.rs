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

//! The entries of an [`IndexedMap`] viewed as a set.

use core::any::Any;

use crate::{
    error::Result,
    iter::{Entries, EntryCursor},
    key::{self, Key},
    IndexedMap, Sequence,
};

/// A live set view of the `(key, value)` pairs of an [`IndexedMap`].
///
/// Every operation is carried out on the map; the set stores nothing.
/// Candidate pairs are compared by key and by value, where an absent value
/// only equals another absent value.
///
/// # Examples
///
/// ```
/// use indexed_map::IndexedMap;
///
/// let mut map = IndexedMap::new(vec![Some("a"), Some("b")]);
/// let mut set = map.entry_set();
///
/// assert!(set.contains(1, Some(&"b")));
/// assert!(!set.contains(1, Some(&"c")));
///
/// assert_eq!(set.add(3, Some("d")), Ok(true));
/// assert!(set.remove(0, Some(&"a")));
///
/// assert_eq!(map.values(), &[None, Some("b"), None, Some("d")]);
/// ```
pub struct EntrySet<'a, S> {
    map: &'a mut IndexedMap<S>,
}

impl<'a, S: Sequence> EntrySet<'a, S> {
    pub(crate) fn new(map: &'a mut IndexedMap<S>) -> Self {
        Self { map }
    }

    /// Returns the number of entries, which is the length of the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns `true` if `key` is in range and the map holds `value` there.
    #[must_use]
    pub fn contains<K: Key>(&self, key: K, value: Option<&S::Item>) -> bool
    where
        S::Item: PartialEq,
    {
        self.map.contains_key(key) && self.map.get(key) == value
    }

    /// Like [`contains`](EntrySet::contains), for a key of unknown type.
    ///
    /// # Errors
    ///
    /// [`Error::NullKey`](crate::Error::NullKey) if `key` is `None` and
    /// [`Error::InvalidKeyType`](crate::Error::InvalidKeyType) if it is not a
    /// primitive integer.
    pub fn contains_dyn(&self, key: Option<&dyn Any>, value: Option<&S::Item>) -> Result<bool>
    where
        S::Item: PartialEq,
    {
        Ok(self.contains(key::from_any(key)?, value))
    }

    /// Stores `value` at `key`.
    ///
    /// Returns `true` unless the pair was already present. The write happens
    /// either way.
    ///
    /// # Errors
    ///
    /// See [`IndexedMap::insert`]. Nothing is written on error.
    pub fn add<K: Key>(&mut self, key: K, value: Option<S::Item>) -> Result<bool>
    where
        S::Item: PartialEq,
    {
        let added = !self.contains(key, value.as_ref());
        self.map.insert_slot(key, value)?;
        Ok(added)
    }

    /// Empties the slot at `key` if it holds `value`.
    ///
    /// Returns `false`, leaving the map untouched, if the pair is not present.
    pub fn remove<K: Key>(&mut self, key: K, value: Option<&S::Item>) -> bool
    where
        S::Item: PartialEq,
    {
        if !self.contains(key, value) {
            return false;
        }

        self.map.remove(key);
        true
    }

    /// Like [`remove`](EntrySet::remove), for a key of unknown type.
    ///
    /// # Errors
    ///
    /// See [`contains_dyn`](EntrySet::contains_dyn).
    pub fn remove_dyn(&mut self, key: Option<&dyn Any>, value: Option<&S::Item>) -> Result<bool>
    where
        S::Item: PartialEq,
    {
        Ok(self.remove(key::from_any(key)?, value))
    }

    /// Empties the map.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns an iterator over the entries, in ascending key order.
    #[must_use]
    pub fn iter(&self) -> Entries<'_, S> {
        self.map.entries()
    }

    /// Returns a cursor over the entries that may modify the map as it goes.
    #[must_use]
    pub fn cursor(&mut self) -> EntryCursor<'_, S> {
        self.map.cursor()
    }
}

impl<'s, S: Sequence> IntoIterator for &'s EntrySet<'_, S> {
    type Item = crate::Entry<'s, S>;
    type IntoIter = Entries<'s, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

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

//! `serde` support, enabled by the `serde` feature.
//!
//! A map serializes as `{index: value}` over every slot, absent ones
//! included, so that the length survives a round trip. Input must name its
//! indices densely and in ascending order; a key past the current end is
//! rejected rather than padded.

use core::{fmt, marker::PhantomData};

use serde::{
    de::{self, MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{IndexedMap, Sequence};

impl<S> Serialize for IndexedMap<S>
where
    S: Sequence,
    S::Item: Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;

        for index in self.keys() {
            map.serialize_entry(&index, &self.seq.slot(index))?;
        }

        map.end()
    }
}

struct IndexedMapVisitor<S>(PhantomData<S>);

impl<S> Default for IndexedMapVisitor<S> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<'de, S> Visitor<'de> for IndexedMapVisitor<S>
where
    S: Sequence + Default,
    S::Item: Deserialize<'de>,
{
    type Value = IndexedMap<S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map keyed by position")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = IndexedMap::new(S::default());

        while let Some((index, value)) = access.next_entry::<usize, Option<S::Item>>()? {
            if index > map.len() {
                return Err(<A::Error as de::Error>::custom(
                    "indices must be dense and ascending",
                ));
            }

            map.put_index(index, value);
        }

        Ok(map)
    }
}

impl<'de, S> Deserialize<'de> for IndexedMap<S>
where
    S: Sequence + Default,
    S::Item: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(IndexedMapVisitor::default())
    }
}

#[cfg(test)]
mod tests {
    use alloc::{
        collections::{BTreeMap, VecDeque},
        vec,
        vec::Vec,
    };

    use crate::IndexedMap;

    #[test]
    fn absent_slots_survive_a_round_trip() {
        let map = IndexedMap::new(vec![Some(3u32), None, Some(5), None]);

        let bytes = postcard::to_allocvec(&map).unwrap();
        let back: IndexedMap<Vec<Option<u32>>> = postcard::from_bytes(&bytes).unwrap();

        assert_eq!(back, map);
        assert_eq!(back.len(), 4);
    }

    #[test]
    fn deserializes_into_another_sequence() {
        let map = IndexedMap::new(vec![Some(1i64), Some(-2)]);

        let bytes = postcard::to_allocvec(&map).unwrap();
        let back: IndexedMap<VecDeque<Option<i64>>> = postcard::from_bytes(&bytes).unwrap();

        assert_eq!(back, map);
    }

    #[test]
    fn gapped_indices_are_rejected() {
        let gapped: BTreeMap<usize, Option<u8>> =
            BTreeMap::from([(0, Some(1)), (1 << 26, None)]);

        let bytes = postcard::to_allocvec(&gapped).unwrap();
        let result = postcard::from_bytes::<IndexedMap<Vec<Option<u8>>>>(&bytes);

        assert!(result.is_err());
    }

    #[test]
    fn dense_indices_in_a_plain_map_are_accepted() {
        let dense: BTreeMap<usize, Option<u8>> = BTreeMap::from([(0, None), (1, Some(2))]);

        let bytes = postcard::to_allocvec(&dense).unwrap();
        let back: IndexedMap<Vec<Option<u8>>> = postcard::from_bytes(&bytes).unwrap();

        assert_eq!(back.values(), &[None, Some(2)]);
    }
}

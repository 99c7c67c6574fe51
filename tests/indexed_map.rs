use std::collections::{BTreeMap, HashSet, VecDeque};

use indexed_map::{Error, IndexedMap};
use pretty_assertions::assert_eq;

fn letters() -> IndexedMap<Vec<Option<&'static str>>> {
    IndexedMap::new(vec![Some("a"), Some("b")])
}

#[test]
fn starts_at_the_size_of_the_sequence() {
    assert_eq!(letters().len(), 2);
    assert!(!letters().is_empty());
    assert!(IndexedMap::new(Vec::<Option<u8>>::new()).is_empty());
}

#[test]
fn put_then_get_returns_the_value() {
    let mut map = letters();

    for i in [0usize, 1, 2, 7, 3] {
        map.insert(i, "v").unwrap();
        assert_eq!(map.get(i), Some(&"v"));
    }
}

#[test]
fn contains_key_matches_the_range() {
    let map = letters();

    for key in -3i64..5 {
        assert_eq!(map.contains_key(key), (0..2).contains(&key), "key {key}");
    }
}

#[test]
fn put_at_the_end_grows_by_one() {
    let mut map = letters();

    assert_eq!(map.insert(2, "c"), Ok(None));
    assert_eq!(map.len(), 3);
    assert_eq!(map.get(2), Some(&"c"));
}

#[test]
fn put_past_the_end_pads_with_absent_slots() {
    let mut map = letters();

    assert_eq!(map.insert(4, "c"), Ok(None));

    assert_eq!(map.len(), 5);
    assert!(map.contains_key(3));
    assert_eq!(map.get(3), None);
    assert_eq!(map.get(4), Some(&"c"));
}

#[test]
fn put_at_a_negative_key_fails() {
    let mut map = letters();

    assert_eq!(map.insert(-1, "c"), Err(Error::NegativeKey));
    assert_eq!(map.len(), 2);
}

#[test]
fn remove_empties_without_shrinking() {
    let mut map = letters();

    assert_eq!(map.remove(0), Some("a"));

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(0), None);
    assert_eq!(map.get(1), Some(&"b"));
}

#[test]
fn remove_out_of_range_is_a_no_op() {
    let mut map = letters();

    assert_eq!(map.remove(3), None);
    assert_eq!(map, letters());
}

#[test]
fn put_all_updates_and_extends() {
    let mut map = letters();
    let other = BTreeMap::from([(1, "c"), (2, "d"), (4, "e")]);

    map.try_extend(other).unwrap();

    assert_eq!(
        map.values(),
        &[Some("a"), Some("c"), Some("d"), None, Some("e")]
    );
}

#[test]
fn values_is_the_backing_sequence() {
    let mut map = letters();

    map.values_mut().push(Some("c"));
    assert_eq!(map.get(2), Some(&"c"));

    map.insert(3, "d").unwrap();
    assert_eq!(map.values().last(), Some(&Some("d")));
}

#[test]
fn a_borrowed_sequence_sees_every_write() {
    let mut list = vec![Some("a"), Some("b")];

    {
        let mut map = IndexedMap::new(&mut list);
        map.insert(3, "d").unwrap();
        map.remove(0);
    }

    assert_eq!(list, [None, Some("b"), None, Some("d")]);
}

#[test]
fn equality_is_element_wise() {
    let map = letters();
    assert_eq!(map, map.clone());

    let deque = IndexedMap::new(VecDeque::from([Some("a"), Some("b")]));
    assert!(map == deque);

    let mut set = HashSet::new();
    set.insert(letters());
    assert!(set.contains(&IndexedMap::new(vec![Some("a"), Some("b")])));
}

#[test]
fn dynamic_key_errors() {
    let map = letters();

    assert_eq!(map.contains_dyn_key(Some(&"1")), Err(Error::InvalidKeyType));
    assert_eq!(map.contains_dyn_key(None), Err(Error::NullKey));
    assert_eq!(map.get_dyn(Some(&1i32)), Ok(Some(&"b")));
}

#[test]
fn keys_and_entries_line_up() {
    let mut map = letters();
    map.insert(3, "d").unwrap();

    let keys: Vec<usize> = map.keys().collect();
    let entries: Vec<_> = (&map).into_iter().map(|e| (e.key(), e.value())).collect();

    assert_eq!(keys, [0, 1, 2, 3]);
    assert_eq!(
        entries,
        [(0, Some(&"a")), (1, Some(&"b")), (2, None), (3, Some(&"d"))]
    );
}

#[test]
fn entry_values_are_read_at_access_time() {
    let mut map = letters();

    let mut cursor = map.cursor();
    let mut first = cursor.next_entry().unwrap();
    assert_eq!(first.value(), Some(&"a"));
    first.set_value("z");
    assert_eq!(first.value(), Some(&"z"));

    cursor.map().remove(0);
    cursor.map().insert(0, "y").unwrap();
    assert_eq!(cursor.map().entry(0).unwrap().value(), Some(&"y"));
}

#[test]
fn cursor_removal_hits_the_following_slot() {
    let mut map = IndexedMap::new(vec![Some(1), Some(2), Some(3)]);
    let mut cursor = map.cursor();

    let first = cursor.next_entry().unwrap();
    assert_eq!(first.key(), 0);
    assert_eq!(cursor.remove_current(), Some(2));

    assert_eq!(map.values(), &[Some(1), None, Some(3)]);
}

#[test]
fn entry_set_round() {
    let mut map = letters();
    let mut set = map.entry_set();

    assert_eq!(set.len(), 2);
    assert!(set.contains(1, Some(&"b")));
    assert_eq!(set.add(1, Some("b")), Ok(false));
    assert_eq!(set.add(2, Some("c")), Ok(true));
    assert!(set.remove(2, Some(&"c")));
    assert!(!set.remove(2, Some(&"c")));
    assert_eq!(set.iter().count(), 3);

    set.clear();
    assert!(map.is_empty());
}

#[test]
fn put_at_an_oversized_key_fails_untouched() {
    let mut map = letters();

    assert_eq!(map.insert(u128::MAX, "c"), Err(Error::KeyOverflow));
    assert_eq!(map.insert_slot(i128::MAX, None), Err(Error::KeyOverflow));

    assert_eq!(map, letters());
    assert!(!map.contains_key(u128::MAX));
    assert_eq!(map.get(u128::MAX), None);
}

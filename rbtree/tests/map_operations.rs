//! Integration tests for the public RBTreeMap API: lookup, insertion,
//! erasure, indexed access, traversal, and the cursor misuse taxonomy.

use rbtree::{Cursor, OrderBy, RBTreeError, RBTreeMap};

#[test]
fn test_mixed_workload_scenario() {
    let mut map = RBTreeMap::new();
    for key in [5, 3, 8, 1, 4, 7, 9] {
        map.insert(key, key);
    }

    let keys: Vec<i32> = map.keys().copied().collect();
    assert_eq!(keys, [1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(map.at(&8), Ok(&8));

    map.erase(map.find(&5)).unwrap();
    assert_eq!(map.count(&5), 0);
    assert_eq!(map.len(), 6);

    // Indexed access inserts a default value for a missing key.
    assert_eq!(*map.get_or_insert_default(10), 0);
    assert_eq!(map.len(), 7);
    assert!(map.check_invariants());
}

#[test]
fn test_empty_map_scenario() {
    let map = RBTreeMap::<i32, i32>::new();

    assert_eq!(map.begin(), map.end());
    assert!(map.prev(map.end()).unwrap_err().is_invalid_cursor());
    assert_eq!(map.at(&42), Err(RBTreeError::KeyNotFound));
}

#[test]
fn test_duplicate_insert_leaves_map_unchanged() {
    let mut map = RBTreeMap::new();
    for key in [4, 2, 6, 1, 3, 5, 7] {
        map.insert(key, key * 10);
    }
    let before: Vec<(i32, i32)> = map.items().map(|(k, v)| (*k, *v)).collect();

    let (cursor, inserted) = map.insert(4, 999);
    assert!(!inserted);
    assert_eq!(map.pair(cursor), Ok((&4, &40)));
    assert_eq!(map.len(), 7);

    let after: Vec<(i32, i32)> = map.items().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(before, after);
}

#[test]
fn test_erase_then_find() {
    let mut map = RBTreeMap::new();
    for key in 0..100 {
        map.insert(key, key);
    }

    for key in (0..100).step_by(7) {
        map.erase(map.find(&key)).unwrap();
        assert_eq!(map.find(&key), map.end());
        assert_eq!(map.count(&key), 0);
        assert!(map.check_invariants());
    }
}

#[test]
fn test_copy_independence() {
    let mut a = RBTreeMap::new();
    for key in 0..20 {
        a.insert(key, key);
    }

    let mut b = a.clone();
    *b.at_mut(&5).unwrap() = 500;
    assert_eq!(a.at(&5), Ok(&5));
    assert_eq!(b.at(&5), Ok(&500));

    *a.at_mut(&6).unwrap() = 600;
    assert_eq!(b.at(&6), Ok(&6));

    // Structural mutation of the copy leaves the original alone too.
    b.erase(b.find(&7)).unwrap();
    assert_eq!(a.count(&7), 1);
    assert_eq!(b.count(&7), 0);
    assert!(a.check_invariants());
    assert!(b.check_invariants());
}

#[test]
fn test_cursors_do_not_transfer_to_a_copy() {
    let mut a = RBTreeMap::new();
    a.insert(1, 1);

    let b = a.clone();
    let cursor = a.find(&1);
    assert!(b.pair(cursor).unwrap_err().is_invalid_cursor());
    assert_ne!(a.end(), b.end());
}

#[test]
fn test_size_matches_cursor_walk() {
    let mut map = RBTreeMap::new();
    for key in [13, 8, 17, 1, 11, 15, 25] {
        map.insert(key, ());
    }

    let mut steps = 0;
    let mut cursor = map.begin();
    while cursor != map.end() {
        steps += 1;
        cursor = map.next(cursor).unwrap();
    }
    assert_eq!(steps, map.len());
}

#[test]
fn test_surviving_cursors_stay_valid_across_mutation() {
    let mut map = RBTreeMap::new();
    for key in 0..50 {
        map.insert(key, key);
    }

    let kept = map.find(&30);
    // Rebalancing around the kept entry must not disturb its cursor.
    for key in (0..50).filter(|k| k % 2 == 0 && *k != 30) {
        map.erase(map.find(&key)).unwrap();
    }
    for key in 100..120 {
        map.insert(key, key);
    }

    assert_eq!(map.pair(kept), Ok((&30, &30)));
    assert!(map.check_invariants());
}

#[test]
fn test_erase_via_cursor_walk() {
    let mut map = RBTreeMap::new();
    for key in 0..30 {
        map.insert(key, key);
    }

    // Walk and erase every entry through cursors alone.
    let mut cursor = map.begin();
    while cursor != map.end() {
        let next = map.next(cursor).unwrap();
        map.erase(cursor).unwrap();
        cursor = next;
    }
    assert!(map.is_empty());
}

#[test]
fn test_detached_cursor_usage() {
    let mut map = RBTreeMap::new();
    map.insert(1, 1);

    let detached = Cursor::default();
    assert!(map.pair(detached).unwrap_err().is_invalid_cursor());
    assert!(map.erase(detached).unwrap_err().is_invalid_cursor());
    assert_eq!(map.len(), 1);
}

#[test]
fn test_custom_comparator_reverses_order() {
    let mut map = RBTreeMap::with_comparator(OrderBy(|a: &i32, b: &i32| a > b));
    for key in [2, 5, 1, 4, 3] {
        map.insert(key, key);
    }

    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [5, 4, 3, 2, 1]);
    assert_eq!(map.first(), Some((&5, &5)));
    assert_eq!(map.last(), Some((&1, &1)));
    assert!(map.check_invariants());

    // Equivalence still means "neither orders before the other".
    let (_, inserted) = map.insert(3, 33);
    assert!(!inserted);
}

#[test]
fn test_value_mutation_in_place() {
    let mut map = RBTreeMap::new();
    map.insert("counter", 0);

    *map.get_mut(&"counter").unwrap() += 1;
    *map.at_mut(&"counter").unwrap() += 1;
    *map.get_or_insert_default("counter") += 1;
    assert_eq!(map[&"counter"], 3);
    assert_eq!(map.len(), 1);
}

#[test]
#[should_panic(expected = "no entry found for key")]
fn test_index_panics_on_missing_key() {
    let map = RBTreeMap::<i32, i32>::new();
    let _ = map[&1];
}

#[test]
fn test_clear_then_reuse() {
    let mut map = RBTreeMap::new();
    for key in 0..10 {
        map.insert(key, key);
    }
    map.clear();
    assert_eq!(map.len(), 0);
    assert_eq!(map.begin(), map.end());

    for key in 20..25 {
        map.insert(key, key);
    }
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [20, 21, 22, 23, 24]);
    assert!(map.check_invariants());
}

#[test]
fn test_string_keys() {
    let mut map = RBTreeMap::new();
    for name in ["pear", "apple", "orange", "banana"] {
        map.insert(name.to_string(), name.len());
    }

    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["apple", "banana", "orange", "pear"]);
    assert_eq!(map.at(&"orange".to_string()), Ok(&6));
}

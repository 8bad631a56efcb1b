//! Property-based tests: weighted random operation sequences are applied to
//! both RBTreeMap and a std BTreeMap oracle, with full invariant validation
//! after every structural mutation.

use proptest::prelude::*;
use rbtree::RBTreeMap;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
enum Op {
    Insert(i16, u32),
    Erase(i16),
    Lookup(i16),
    Clear,
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    // A narrow key range forces plenty of duplicate hits and erase hits.
    let key = -64i16..=64;
    let op = prop_oneof![
        50 => (key.clone(), any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        30 => key.clone().prop_map(Op::Erase),
        18 => key.prop_map(Op::Lookup),
        2 => Just(Op::Clear),
    ];
    prop::collection::vec(op, 0..=300)
}

fn apply(ops: &[Op]) -> (RBTreeMap<i16, u32>, BTreeMap<i16, u32>) {
    let mut ours = RBTreeMap::new();
    let mut oracle = BTreeMap::new();

    for op in ops {
        match *op {
            Op::Insert(key, value) => {
                let (cursor, inserted) = ours.insert(key, value);
                assert_eq!(inserted, !oracle.contains_key(&key));
                oracle.entry(key).or_insert(value);
                assert_eq!(ours.pair(cursor), Ok((&key, &oracle[&key])));
            }
            Op::Erase(key) => {
                let cursor = ours.find(&key);
                if cursor == ours.end() {
                    assert!(!oracle.contains_key(&key));
                } else {
                    let (_, value) = ours.erase(cursor).unwrap();
                    assert_eq!(oracle.remove(&key), Some(value));
                }
            }
            Op::Lookup(key) => {
                assert_eq!(ours.get(&key), oracle.get(&key));
                assert_eq!(ours.count(&key), usize::from(oracle.contains_key(&key)));
            }
            Op::Clear => {
                ours.clear();
                oracle.clear();
            }
        }

        assert_eq!(ours.check_invariants_detailed(), Ok(()));
        assert_eq!(ours.len(), oracle.len());
    }

    (ours, oracle)
}

proptest! {
    #[test]
    fn matches_btreemap_oracle(ops in ops_strategy()) {
        let (ours, oracle) = apply(&ops);

        let ours_items: Vec<(i16, u32)> = ours.items().map(|(k, v)| (*k, *v)).collect();
        let oracle_items: Vec<(i16, u32)> = oracle.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(ours_items, oracle_items);
    }

    #[test]
    fn keys_come_out_strictly_increasing(ops in ops_strategy()) {
        let (ours, _) = apply(&ops);

        let keys: Vec<i16> = ours.keys().copied().collect();
        for window in keys.windows(2) {
            prop_assert!(window[0] < window[1]);
        }
        prop_assert_eq!(keys.len(), ours.len());
    }

    #[test]
    fn clone_is_independent(ops in ops_strategy(), extra in -64i16..=64) {
        let (mut ours, _) = apply(&ops);

        let mut copy = ours.clone();
        prop_assert!(copy.check_invariants());
        prop_assert_eq!(
            ours.items().collect::<Vec<_>>(),
            copy.items().collect::<Vec<_>>()
        );

        // Mutating the copy never leaks into the original.
        copy.insert(extra, 0xDEAD);
        let cursor = copy.find(&extra);
        copy.erase(cursor).unwrap();
        prop_assert_eq!(copy.count(&extra), 0);

        *ours.get_or_insert_default(extra) = 7;
        prop_assert_eq!(copy.get(&extra), None);
        prop_assert!(ours.check_invariants());
        prop_assert!(copy.check_invariants());
    }
}

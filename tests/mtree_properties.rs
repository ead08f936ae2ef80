//! Property tests: the tree against a `BTreeSet` model.

use std::collections::BTreeSet;

use mwaytree::{Error, MTree};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(i32),
    Remove(i32),
    Search(i32),
    Rebuild,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0i32..200).prop_map(Op::Insert),
        3 => (0i32..200).prop_map(Op::Remove),
        2 => (0i32..200).prop_map(Op::Search),
        1 => Just(Op::Rebuild),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn bulk_build_round_trip(order in 2usize..8, keys in prop::collection::vec(-500i32..500, 0..300)) {
        let tree = MTree::from_keys(order, keys.clone()).unwrap();

        let expected: Vec<i32> = keys.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        prop_assert_eq!(tree.collect_values(), expected);
        prop_assert!(tree.check_invariants().is_empty());
        prop_assert_eq!(tree.stats().empty_leaves, usize::from(tree.is_empty()));
    }

    #[test]
    fn operations_match_model(order in 2usize..6, ops in prop::collection::vec(op_strategy(), 0..400)) {
        let mut tree = MTree::new(order).unwrap();
        let mut model = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(k) => {
                    let before = tree.clone();
                    match tree.insert(k) {
                        Ok(()) => {
                            prop_assert!(model.insert(k));
                            prop_assert!(tree.search(&k));
                        }
                        Err(e) => {
                            prop_assert_eq!(e, Error::DuplicateKey);
                            prop_assert!(model.contains(&k));
                            prop_assert_eq!(&tree, &before);
                        }
                    }
                }
                Op::Remove(k) => {
                    let before = tree.clone();
                    match tree.remove(&k) {
                        Ok(()) => {
                            prop_assert!(model.remove(&k));
                            prop_assert!(!tree.search(&k));
                        }
                        Err(e) => {
                            prop_assert_eq!(e, Error::KeyNotFound);
                            prop_assert!(!model.contains(&k));
                            prop_assert_eq!(&tree, &before);
                        }
                    }
                }
                Op::Search(k) => {
                    prop_assert_eq!(tree.search(&k), model.contains(&k));
                }
                Op::Rebuild => {
                    tree.rebuild();
                }
            }

            prop_assert!(tree.check_invariants().is_empty());
        }

        let expected: Vec<i32> = model.into_iter().collect();
        prop_assert_eq!(tree.collect_values(), expected);
    }

    #[test]
    fn rebuild_is_idempotent(order in 2usize..6, inserts in prop::collection::vec(0i32..1000, 0..200), removes in prop::collection::vec(0i32..1000, 0..100)) {
        let mut tree = MTree::new(order).unwrap();
        for k in inserts {
            let _ = tree.insert(k);
        }
        for k in removes {
            let _ = tree.remove(&k);
        }
        let contents = tree.collect_values();

        tree.rebuild();
        prop_assert_eq!(tree.collect_values(), contents);
        let once = tree.clone();

        tree.rebuild();
        prop_assert_eq!(tree, once);
    }

    #[test]
    fn insertion_order_does_not_matter_after_rebuild(order in 2usize..6, keys in prop::collection::vec(0i32..500, 0..150)) {
        let mut forward = MTree::new(order).unwrap();
        for &k in &keys {
            let _ = forward.insert(k);
        }
        let mut backward = MTree::new(order).unwrap();
        for &k in keys.iter().rev() {
            let _ = backward.insert(k);
        }

        forward.rebuild();
        backward.rebuild();
        prop_assert_eq!(forward, backward);
    }
}

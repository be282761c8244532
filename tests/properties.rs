//! Property-based tests for joining sets and folding their values.
//!
//! Elements are the integers `0 .. len` for a generated `len`, and union
//! sequences are generated as pairs of those integers. Every property is
//! checked against a naive relabeling partition where that helps.

use disjoint_groups::{DisjointSet, DisjointSetFold, Error};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

type Partition = BTreeSet<BTreeSet<u16>>;

fn unions(len: u16) -> impl Strategy<Value = Vec<(u16, u16)>> {
    prop::collection::vec((0 .. len, 0 .. len), 0 .. 60)
}

fn elements_and_unions() -> impl Strategy<Value = (u16, Vec<(u16, u16)>)> {
    (1 .. 40u16).prop_flat_map(|len| (Just(len), unions(len)))
}

fn build(len: u16, unions: &[(u16, u16)]) -> DisjointSet<u16> {
    let mut disjoint_set: DisjointSet<u16> = (0 .. len).collect();
    for (x, y) in unions {
        disjoint_set.union(x, y).expect("registered");
    }
    disjoint_set
}

/// Computes the partition by relabeling every member of the absorbed set.
fn naive_partition(len: u16, unions: &[(u16, u16)]) -> Partition {
    let mut labels: Vec<u16> = (0 .. len).collect();
    for &(x, y) in unions {
        let (from, to) = (labels[usize::from(y)], labels[usize::from(x)]);
        for label in labels.iter_mut() {
            if *label == from {
                *label = to;
            }
        }
    }

    let mut groups: HashMap<u16, BTreeSet<u16>> = HashMap::new();
    for (element, &label) in (0 ..).zip(labels.iter()) {
        groups.entry(label).or_default().insert(element);
    }
    groups.into_values().collect()
}

fn partition(disjoint_set: &DisjointSet<u16>) -> Partition {
    disjoint_set
        .groups()
        .into_iter()
        .map(|group| group.into_iter().copied().collect())
        .collect()
}

fn initial_value(element: u16) -> u64 {
    u64::from(element) * 3 + 1
}

proptest! {
    #[test]
    fn linked_is_reflexive((len, unions) in elements_and_unions()) {
        let disjoint_set = build(len, &unions);
        for element in 0 .. len {
            prop_assert_eq!(disjoint_set.linked(&element, &element), Ok(true));
        }
    }

    #[test]
    fn matches_naive_partition((len, unions) in elements_and_unions()) {
        let disjoint_set = build(len, &unions);
        let expected = naive_partition(len, &unions);

        prop_assert_eq!(disjoint_set.group_count(), expected.len());
        prop_assert_eq!(partition(&disjoint_set), expected);
    }

    #[test]
    fn union_is_idempotent((len, unions) in elements_and_unions()) {
        let once = build(len, &unions);
        let mut twice = once.clone();
        for (x, y) in &unions {
            prop_assert_eq!(twice.union(x, y), Ok(false));
        }
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.to_string(), twice.to_string());
    }

    #[test]
    fn union_order_does_not_matter(
        (len, unions, shuffled) in elements_and_unions().prop_flat_map(|(len, unions)| {
            let shuffled = Just(unions.clone()).prop_shuffle();
            (Just(len), Just(unions), shuffled)
        })
    ) {
        let first = build(len, &unions);
        let flipped: Vec<(u16, u16)> = shuffled.iter().map(|&(x, y)| (y, x)).collect();
        let second = build(len, &flipped);

        prop_assert!(first.equals(&second));
        prop_assert_eq!(first.describe(), second.describe());
    }

    #[test]
    fn sizes_are_conserved((len, unions) in elements_and_unions()) {
        let mut disjoint_set: DisjointSet<u16> = (0 .. len).collect();

        for (x, y) in &unions {
            let linked = disjoint_set.linked(x, y).expect("registered");
            let size_x = disjoint_set.group_size(x).expect("registered");
            let size_y = disjoint_set.group_size(y).expect("registered");

            disjoint_set.union(x, y).expect("registered");

            let root = disjoint_set.find(x).expect("registered");
            let expected = if linked { size_x } else { size_x + size_y };
            prop_assert_eq!(disjoint_set.group_size(root), Ok(expected));
        }

        let total: usize = disjoint_set.groups().iter().map(|group| group.len()).sum();
        prop_assert_eq!(total, disjoint_set.len());
    }

    #[test]
    fn groups_partition_the_elements((len, unions) in elements_and_unions()) {
        let disjoint_set = build(len, &unions);
        let groups = disjoint_set.groups();

        let mut seen = BTreeSet::new();
        for group in &groups {
            prop_assert!(!group.is_empty());
            for &element in group {
                // Every element shows up in exactly one group.
                prop_assert!(seen.insert(element));
                prop_assert_eq!(disjoint_set.group_size(&element), Ok(group.len()));
            }
        }

        prop_assert_eq!(seen, (0 .. len).collect::<BTreeSet<u16>>());
        prop_assert_eq!(groups.len(), disjoint_set.group_count());
    }

    #[test]
    fn merge_matches_pairwise_unions(
        (len, chunks) in (2 .. 30u16).prop_flat_map(|len| {
            (Just(len), prop::collection::vec(prop::collection::vec(0 .. len, 0 .. 6), 0 .. 8))
        })
    ) {
        let mut merged: DisjointSet<u16> = (0 .. len).collect();
        let mut pairwise: DisjointSet<u16> = (0 .. len).collect();

        for chunk in &chunks {
            let before = merged.group_count();
            let joins = merged.merge(chunk).expect("registered");
            prop_assert_eq!(before - joins, merged.group_count());

            for window in chunk.windows(2) {
                pairwise.union(&window[0], &window[1]).expect("registered");
            }
        }

        prop_assert_eq!(merged, pairwise);
    }

    #[test]
    fn failed_merge_changes_nothing(
        (len, unions) in elements_and_unions(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1 .. 6),
    ) {
        let mut disjoint_set = build(len, &unions);
        let before = disjoint_set.clone();

        let mut operands: Vec<u16> = picks.iter().map(|pick| pick.index(usize::from(len)) as u16).collect();
        operands.push(len);

        prop_assert_eq!(disjoint_set.merge(&operands), Err(Error::NotFound));
        prop_assert_eq!(disjoint_set.group_count(), before.group_count());
        prop_assert_eq!(disjoint_set, before);
    }

    #[test]
    fn fold_values_match_members((len, unions) in elements_and_unions()) {
        let items = (0 .. len).map(|element| (element, initial_value(element)));
        let mut fold = DisjointSetFold::from_items(|a: u64, b: u64| a + b, items).expect("distinct keys");

        for (x, y) in &unions {
            fold.union(x, y).expect("registered");
        }

        let groups = fold.groups();
        prop_assert_eq!(groups.len(), fold.group_count());

        for group in &groups {
            let expected: u64 = group.iter().map(|&element| initial_value(element)).sum();
            prop_assert_eq!(*group.value(), expected);

            for &element in group {
                prop_assert_eq!(fold.get(&element), Ok(group.value()));
            }
        }
    }

    #[test]
    fn fold_does_not_depend_on_order(
        (len, unions, shuffled) in elements_and_unions().prop_flat_map(|(len, unions)| {
            let shuffled = Just(unions.clone()).prop_shuffle();
            (Just(len), Just(unions), shuffled)
        })
    ) {
        let items = || (0 .. len).map(|element| (element, initial_value(element)));
        let mut first = DisjointSetFold::from_items(u64::max, items()).expect("distinct keys");
        let mut second = DisjointSetFold::from_items(u64::max, items()).expect("distinct keys");

        for (x, y) in &unions {
            first.union(x, y).expect("registered");
        }
        for (x, y) in shuffled.iter().rev() {
            second.union(y, x).expect("registered");
        }

        prop_assert!(first == second);
        prop_assert_eq!(first.to_string(), second.to_string());
    }
}

#[cfg(feature = "proptest")]
proptest! {
    #[test]
    fn arbitrary_sets_are_consistent(disjoint_set in any::<DisjointSet<u8>>()) {
        let groups = disjoint_set.groups();
        let total: usize = groups.iter().map(|group| group.len()).sum();

        prop_assert_eq!(total, disjoint_set.len());
        prop_assert_eq!(groups.len(), disjoint_set.group_count());
        prop_assert_eq!(&disjoint_set, &disjoint_set.clone());
    }
}

//! Property-based tests for MutableSet laws.
//!
//! These tests verify that MutableSet and the n-ary combinators satisfy the algebraic properties
//! expected of sets, checking results against a simple counting model where the rule isn't a plain
//! equation.

use std::collections::HashMap;

use mutable_set::collections::set::{MutableSet, combinators};
use proptest::prelude::*;

fn arbitrary_set() -> impl Strategy<Value = MutableSet<u8>> {
    prop::collection::vec(0_u8..32, 0..24).prop_map(MutableSet::from_elements)
}

// =============================================================================
// Idempotence Laws
// Description: Adding a present element or discarding an absent one changes nothing
// =============================================================================

proptest! {
    #[test]
    fn prop_add_idempotence_law(set in arbitrary_set(), element: u8) {
        let mut once = set.clone();
        once.add(element);
        let mut twice = once.clone();
        let added_again = twice.add(element);

        prop_assert!(!added_again);
        prop_assert_eq!(once.cardinality(), twice.cardinality());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_discard_absent_law(set in arbitrary_set(), element in 32_u8..) {
        let mut discarded = set.clone();

        prop_assert!(!discarded.discard(&element));
        prop_assert_eq!(discarded, set);
    }

    #[test]
    fn prop_contains_negation_law(set in arbitrary_set(), element: u8) {
        prop_assert_ne!(set.contains(&element), set.does_not_contain(&element));
    }
}

// =============================================================================
// Equality Laws
// Description: Equality is an equivalence relation and clones are equal but independent
// =============================================================================

proptest! {
    #[test]
    fn prop_equality_reflexive_symmetric_law(a in arbitrary_set(), b in arbitrary_set()) {
        prop_assert!(a.is_equal_to(&a));
        prop_assert_eq!(a.is_equal_to(&b), b.is_equal_to(&a));
    }

    #[test]
    fn prop_equality_transitive_law(elements in prop::collection::vec(0_u8..32, 0..24)) {
        let a = MutableSet::from_elements(elements.iter().copied());
        let b = MutableSet::from_elements(elements.iter().rev().copied());
        let c: MutableSet<u8> = a.iter().copied().collect();

        prop_assert!(a.is_equal_to(&b) && b.is_equal_to(&c));
        prop_assert!(a.is_equal_to(&c));
    }

    #[test]
    fn prop_clone_independence_law(set in arbitrary_set(), element in 32_u8..) {
        let mut clone = set.clone();
        prop_assert!(clone.is_equal_to(&set));

        clone.add(element);
        prop_assert!(set.does_not_contain(&element));
        prop_assert_ne!(clone, set);
    }

    #[test]
    fn prop_original_mutation_leaves_clone_law(set in arbitrary_set(), element in 32_u8..) {
        let mut original = set.clone();
        let clone = original.clone();

        original.add(element);
        let removed = set.iter().next().copied();
        if let Some(removed) = removed {
            original.discard(&removed);
        }

        prop_assert!(clone.does_not_contain(&element));
        prop_assert_eq!(&clone, &set);
        if let Some(removed) = removed {
            prop_assert!(clone.contains(&removed));
        }
    }
}

// =============================================================================
// Commutativity and Associativity Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_union_commutativity_law(a in arbitrary_set(), b in arbitrary_set()) {
        prop_assert_eq!(combinators::union([&a, &b]), combinators::union([&b, &a]));
    }

    #[test]
    fn prop_union_associativity_law(
        a in arbitrary_set(),
        b in arbitrary_set(),
        c in arbitrary_set()
    ) {
        let left = combinators::union([&combinators::union([&a, &b]), &c]);
        let right = combinators::union([&a, &combinators::union([&b, &c])]);

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_intersection_commutativity_law(a in arbitrary_set(), b in arbitrary_set()) {
        prop_assert_eq!(
            combinators::intersection([&a, &b]),
            combinators::intersection([&b, &a])
        );
    }

    #[test]
    fn prop_intersection_associativity_law(
        a in arbitrary_set(),
        b in arbitrary_set(),
        c in arbitrary_set()
    ) {
        let left = combinators::intersection([&combinators::intersection([&a, &b]), &c]);
        let right = combinators::intersection([&a, &combinators::intersection([&b, &c])]);

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_symmetric_difference_commutativity_law(a in arbitrary_set(), b in arbitrary_set()) {
        prop_assert_eq!(
            combinators::symmetric_difference([&a, &b]),
            combinators::symmetric_difference([&b, &a])
        );
    }

    #[test]
    fn prop_difference_anti_commutativity_law(a in arbitrary_set(), b in arbitrary_set()) {
        let forward = combinators::difference([&a, &b]);
        let backward = combinators::difference([&b, &a]);

        // A \ B and B \ A can only agree when both are empty, i.e. when A == B.
        prop_assert_eq!(forward == backward, a == b);
    }
}

// =============================================================================
// n-ary Definitions
// Description: Check every combinator against a count of how many operands hold each element
// =============================================================================

fn membership_counts(sets: &[MutableSet<u8>]) -> HashMap<u8, usize> {
    let mut counts = HashMap::new();
    for set in sets {
        for &element in set {
            *counts.entry(element).or_insert(0) += 1;
        }
    }
    counts
}

proptest! {
    #[test]
    fn prop_union_definition_law(sets in prop::collection::vec(arbitrary_set(), 0..6)) {
        let result = combinators::union(sets.iter());
        let counts = membership_counts(&sets);

        prop_assert_eq!(result.cardinality(), counts.len());
        prop_assert!(counts.keys().all(|element| result.contains(element)));
    }

    #[test]
    fn prop_intersection_definition_law(sets in prop::collection::vec(arbitrary_set(), 1..6)) {
        let result = combinators::intersection(sets.iter());
        let counts = membership_counts(&sets);

        for (element, count) in counts {
            prop_assert_eq!(result.contains(&element), count == sets.len());
        }
    }

    #[test]
    fn prop_difference_definition_law(sets in prop::collection::vec(arbitrary_set(), 1..6)) {
        let result = combinators::difference(sets.iter());
        let rest = membership_counts(&sets[1..]);

        for &element in &sets[0] {
            prop_assert_eq!(result.contains(&element), !rest.contains_key(&element));
        }
        prop_assert!(result.iter().all(|element| sets[0].contains(element)));
    }

    #[test]
    fn prop_symmetric_difference_exactly_one_law(
        sets in prop::collection::vec(arbitrary_set(), 0..6)
    ) {
        let result = combinators::symmetric_difference(sets.iter());
        let counts = membership_counts(&sets);

        for (element, count) in &counts {
            prop_assert_eq!(result.contains(element), *count == 1);
        }
        prop_assert!(result.iter().all(|element| counts.contains_key(element)));
    }

    #[test]
    fn prop_combinators_leave_inputs_unchanged(
        sets in prop::collection::vec(arbitrary_set(), 0..6)
    ) {
        let before = sets.clone();

        let _ = combinators::union(sets.iter());
        let _ = combinators::intersection(sets.iter());
        let _ = combinators::difference(sets.iter());
        let _ = combinators::symmetric_difference(sets.iter());

        prop_assert_eq!(sets, before);
    }
}

//! Pure, n-ary set combinators.
//!
//! Each function takes zero or more borrowed sets and reduces them into a brand new
//! [`MutableSet`]. None of the input sets are modified. Any `IntoIterator` over `&MutableSet` will
//! do, so arrays of references (`[&a, &b, &c]`) and `sets.iter()` on a collection of sets both
//! work.
//!
//! Given no sets at all, every combinator returns an empty set, and given exactly one set, every
//! combinator returns a clone of it.

use std::hash::{BuildHasher, Hash};

use super::MutableSet;
use crate::util::trace::trace;

/// Computes the union of zero or more sets: every element that belongs to at least one of them.
pub fn union<'a, T, B, I>(sets: I) -> MutableSet<T, B>
where
    T: Hash + Eq + Clone + 'a,
    B: BuildHasher + Default + Clone + 'a,
    I: IntoIterator<Item = &'a MutableSet<T, B>>,
{
    let sets: Vec<_> = sets.into_iter().collect();
    let result = fold(&sets, |result, other| result.union_with(other));
    trace!(
        operation = %super::SetOperation::Union,
        operands = sets.len(),
        cardinality = result.cardinality()
    );
    result
}

/// Computes the intersection of zero or more sets: every element that belongs to all of them.
///
/// The intersection of no sets is defined to be the empty set. Mathematically, it would be the
/// universal set, which can't be represented here.
pub fn intersection<'a, T, B, I>(sets: I) -> MutableSet<T, B>
where
    T: Hash + Eq + Clone + 'a,
    B: BuildHasher + Default + Clone + 'a,
    I: IntoIterator<Item = &'a MutableSet<T, B>>,
{
    let sets: Vec<_> = sets.into_iter().collect();
    let result = fold(&sets, |result, other| result.intersect_with(other));
    trace!(
        operation = %super::SetOperation::Intersection,
        operands = sets.len(),
        cardinality = result.cardinality()
    );
    result
}

/// Computes the first set minus the union of all remaining sets: every element of the first set
/// that belongs to none of the others.
pub fn difference<'a, T, B, I>(sets: I) -> MutableSet<T, B>
where
    T: Hash + Eq + Clone + 'a,
    B: BuildHasher + Default + Clone + 'a,
    I: IntoIterator<Item = &'a MutableSet<T, B>>,
{
    let sets: Vec<_> = sets.into_iter().collect();
    let result = match sets.as_slice() {
        [] => MutableSet::default(),
        [first, rest @ ..] => {
            let mut result = (*first).clone();
            result.difference_with(&fold(rest, |result, other| result.union_with(other)));
            result
        },
    };
    trace!(
        operation = %super::SetOperation::Difference,
        operands = sets.len(),
        cardinality = result.cardinality()
    );
    result
}

/// Computes the elements that belong to exactly one of the provided sets.
///
/// For two sets this is the usual symmetric difference. For three or more, any element found in
/// more than one set is excluded, unlike the parity result of chaining
/// [`MutableSet::symmetric_difference_with`]. It is computed as the union of all sets minus the
/// union of every pairwise intersection.
pub fn symmetric_difference<'a, T, B, I>(sets: I) -> MutableSet<T, B>
where
    T: Hash + Eq + Clone + 'a,
    B: BuildHasher + Default + Clone + 'a,
    I: IntoIterator<Item = &'a MutableSet<T, B>>,
{
    let sets: Vec<_> = sets.into_iter().collect();
    let mut result = fold(&sets, |result, other| result.union_with(other));

    let mut overlaps = MutableSet::<T, B>::default();
    for (index, &left) in sets.iter().enumerate() {
        for &right in &sets[index + 1..] {
            let mut overlap = MutableSet::clone(left);
            overlap.intersect_with(right);
            overlaps.union_with(&overlap);
        }
    }
    result.difference_with(&overlaps);

    trace!(
        operation = %super::SetOperation::SymmetricDifference,
        operands = sets.len(),
        cardinality = result.cardinality()
    );
    result
}

/// Clones the first set and applies `step` with each remaining set in turn.
fn fold<T, B>(
    sets: &[&MutableSet<T, B>],
    step: impl Fn(&mut MutableSet<T, B>, &MutableSet<T, B>),
) -> MutableSet<T, B>
where
    T: Hash + Eq + Clone,
    B: BuildHasher + Default + Clone,
{
    match sets {
        [] => MutableSet::default(),
        [first, rest @ ..] => {
            let mut result = (*first).clone();
            for &other in rest {
                step(&mut result, other);
            }
            result
        },
    }
}

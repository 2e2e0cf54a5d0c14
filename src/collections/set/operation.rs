use std::hash::{BuildHasher, Hash};

use derive_more::{Display, IsVariant};

use super::{MutableSet, combinators};

/// One of the four binary set operations, for choosing an operation at runtime.
///
/// Each variant maps to both an in-place mutator (via [`MutableSet::apply`]) and an n-ary
/// combinator (via [`SetOperation::combine`]).
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum SetOperation {
    #[display("union")]
    Union,
    #[display("intersection")]
    Intersection,
    #[display("difference")]
    Difference,
    #[display("symmetric difference")]
    SymmetricDifference,
}

impl SetOperation {
    pub const ALL: [SetOperation; 4] = [
        SetOperation::Union,
        SetOperation::Intersection,
        SetOperation::Difference,
        SetOperation::SymmetricDifference,
    ];

    /// Returns true if the order of operands doesn't affect the result.
    pub fn is_commutative(self) -> bool {
        !self.is_difference()
    }

    /// Reduces `sets` into a new set with the combinator matching this operation.
    pub fn combine<'a, T, B, I>(self, sets: I) -> MutableSet<T, B>
    where
        T: Hash + Eq + Clone + 'a,
        B: BuildHasher + Default + Clone + 'a,
        I: IntoIterator<Item = &'a MutableSet<T, B>>,
    {
        match self {
            SetOperation::Union => combinators::union(sets),
            SetOperation::Intersection => combinators::intersection(sets),
            SetOperation::Difference => combinators::difference(sets),
            SetOperation::SymmetricDifference => combinators::symmetric_difference(sets),
        }
    }
}

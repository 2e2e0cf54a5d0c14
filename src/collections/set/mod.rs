//! A module containing [`MutableSet`] and associated types.
//!
//! [`MutableSet`] is the set itself, with in-place binary set operations. The [`combinators`]
//! module reduces any number of sets into a new one without touching the inputs, and
//! [`SetOperation`] lets either be chosen at runtime.
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating the entries
//! in place would cause a logic error.

pub mod combinators;
mod iter;
mod mutable_set;
mod operation;

pub use iter::*;
pub use mutable_set::*;
pub use operation::*;

#[doc(inline)]
pub use crate::util::error::CapacityOverflow;

/// Creates a [`MutableSet`] containing the provided elements, collapsing any duplicates.
///
/// ```
/// use mutable_set::set;
///
/// let primes = set![2, 3, 5, 7, 7];
/// assert_eq!(primes.cardinality(), 4);
/// assert!(primes.contains(&7));
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::collections::set::MutableSet::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::collections::set::MutableSet::from([$($item),+])
    };
}

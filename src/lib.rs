//! A mutable, hash-backed set with the usual set algebra, both in place and across any number of
//! sets at once.
//!
//! # Purpose
//! Sets turn up everywhere but the standard library's `HashSet` only offers lazy, two-operand views
//! for set algebra. This crate provides a set whose binary operations mutate it in place, plus
//! combinators that reduce *n* sets into a new one with clearly defined edge cases.
//!
//! # Overview
//! - [`MutableSet`](collections::set::MutableSet): membership, insertion, removal, snapshots and
//!   the in-place operators `union_with`, `intersect_with`, `difference_with` and
//!   `symmetric_difference_with`.
//! - [`combinators`](collections::set::combinators): `union`, `intersection`, `difference` and
//!   `symmetric_difference` over zero or more sets, none of which are modified.
//! - [`Set`](collections::traits::set::Set): the read-only trait, providing lazy views such as
//!   `a.union(&b)` and subset checks.
//!
//! ```
//! use mutable_set::collections::set::combinators;
//! use mutable_set::set;
//!
//! let evens = set![2, 4, 6, 8];
//! let small = set![1, 2, 3, 4, 5];
//! let mixed = set![3, 6, 10];
//!
//! // Elements found in exactly one of the sets.
//! let lonely = combinators::symmetric_difference([&evens, &small, &mixed]);
//! assert_eq!(lonely, set![1, 5, 8, 10]);
//! ```
//!
//! # Error Handling
//! Almost nothing here can fail: absence is reported through `bool`s and [`Option`]s rather than
//! errors. The one exception is
//! [`try_reserve`](collections::set::MutableSet::try_reserve), which returns a strongly typed ZST
//! error, [`CapacityOverflow`](collections::set::CapacityOverflow), instead of panicking.
//!
//! # Logging
//! With the `tracing` feature enabled, every n-ary combinator emits a trace-level event with the
//! operation, the number of operands and the cardinality of the result. The crate never installs a
//! subscriber.
//!
//! # Concurrency
//! None. Every mutation goes through `&mut self`, so sharing a set between threads needs external
//! locking, which the borrow checker will insist on anyway.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]

pub mod collections;

pub(crate) mod util;

//! Traits shared by set types.
//!
//! [`Set`](set::Set) describes everything that can be done with a set without mutating it,
//! including the lazy, borrowing views over the result of binary set operations.

pub mod set;

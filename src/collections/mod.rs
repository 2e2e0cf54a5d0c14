//! General-purpose collection types.
//!
//! # Purpose
//! At the moment this is just a hash-backed set, but it's written to leave room for more. The
//! split between [`set`] (the concrete type) and [`traits`] (what any set can do) follows the
//! same idea: set algebra that only needs to read belongs to the trait, while anything that
//! mutates belongs to the type.

pub mod set;
pub mod traits;

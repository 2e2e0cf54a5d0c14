use derive_more::{Display, Error};

/// The error returned when a set can't grow to hold the requested number of elements, either
/// because the new capacity overflows `usize` or because the allocator refused the request.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

pub mod error;
#[cfg(test)]
pub mod hash;
pub mod trace;

//! Utility code.

pub mod text;
pub mod wrap;

#[cfg(test)]
pub mod testing;

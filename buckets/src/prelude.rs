//! Convenience re-exports for common usage

pub use bit_array::{BitArray, BitArrayError};
pub use stack::Stack;

//! # bit_array
//!
//! A `no_std` compatible packed boolean sequence.
//!
//! [`BitArray`] stores one bit per element in 64-bit words and keeps a running
//! count of `true` elements (its *cardinality*) through every mutation.
//!
//! ```rust
//! use bit_array::BitArray;
//!
//! let mut bits = BitArray::new();
//! bits.append(true);
//! bits.append(false);
//! bits.append(true);
//!
//! assert_eq!(bits.len(), 3);
//! assert_eq!(bits.cardinality(), 2);
//! assert_eq!(bits.get(1), Ok(false));
//! assert_eq!(bits.to_string(), "[true, false, true]");
//! ```
//!
//! ## Memory Savings Example
//!
//! ```rust
//! use bit_array::BitArray;
//!
//! // Vec<bool>: 1000 elements × 1 byte = 1000 bytes
//! let standard = vec![true; 1000];
//!
//! // BitArray: 1000 elements × 1 bit = 16 words = 128 bytes
//! let packed: BitArray = standard.iter().copied().collect();
//! assert_eq!(packed.words().len(), 16);
//! assert_eq!(packed.cardinality(), 1000);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::BitArrayError;

mod bit_ops;
mod index;

pub mod container;
pub mod iter;

pub use container::BitArray;
pub use iter::{IntoIter, Iter};

/// Backing word type.
pub type Word = u64;

/// Bits per backing word. Element `i` lives in word `i / WORD_BITS`, bit `i % WORD_BITS`.
pub const WORD_BITS: usize = Word::BITS as usize;

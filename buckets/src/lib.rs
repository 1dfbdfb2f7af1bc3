//! # Buckets
//!
//! Small general-purpose containers under one roof.
//!
//! ## Features
//!
//! - **Packed booleans**: [`BitArray`] stores one bit per element and tracks
//!   how many are set
//! - **LIFO stack**: [`Stack`] with top-down iteration
//! - **Word buffers**: [`Container`] of plain-old-data words with geometric growth
//!
//! ## Quick Start
//!
//! ```rust
//! use buckets::prelude::*;
//!
//! let mut visited = BitArray::with_repeated(8, false);
//! let mut pending: Stack<usize> = Stack::from([0]);
//!
//! while let Some(node) = pending.pop() {
//!     if visited.get(node)? {
//!         continue;
//!     }
//!     visited.set(node, true)?;
//!     for next in [node * 2 + 1, node * 2 + 2] {
//!         if next < visited.len() {
//!             pending.push(next);
//!         }
//!     }
//! }
//!
//! assert_eq!(visited.cardinality(), 8);
//! # Ok::<(), BitArrayError>(())
//! ```

pub mod prelude;

// Re-export bit_array types
pub use bit_array::{BitArray, BitArrayError, IntoIter as BitArrayIntoIter, Iter as BitArrayIter};
pub use bit_array::{WORD_BITS, Word};

// Re-export stack types
pub use stack::{IntoIter as StackIntoIter, Iter as StackIter, Stack};

// Re-export raw_words types
pub use raw_words::{Container, ContainerError, Storage};

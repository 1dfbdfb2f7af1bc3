//! # raw_words
//!
//! Owned, growable buffers of plain-old-data words.
//!
//! [`Container`] is the typed front end, [`Storage`] the backing buffer that
//! owns the allocation and decides how it grows.
//!
//! ```rust
//! use raw_words::Container;
//!
//! let mut words = Container::<u64>::new();
//! words.push(0xFF);
//! words.push(0x0F);
//! assert_eq!(words.as_slice(), &[0xFF, 0x0F]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
pub use std::vec::Vec;

#[cfg(not(feature = "std"))]
pub use alloc::vec::Vec;

pub mod container;
pub mod error;
pub mod storage;

pub use container::Container;
pub use error::ContainerError;
pub use storage::{GROWTH_FACTOR, MIN_CAPACITY, Storage};

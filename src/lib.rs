#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// A hash map for unboxed 64-bit integer keys.
///
/// This module provides `LongMap`, an open-addressing table with linear
/// probing and tombstone-based deletion, plus its iterators and entry views.
pub mod long_map;

pub use long_map::Entries;
pub use long_map::Entry;
pub use long_map::LongMap;

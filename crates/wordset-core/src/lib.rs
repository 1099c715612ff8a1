//! Fixed-capacity bit-vector primitives.
//!
//! This crate provides [`WordSet`], a compile-time-sized set of bits packed
//! into `u64` machine words. It is the storage layer for higher-level
//! "sized set of booleans" abstractions: flag sets, small id-sets, sparse
//! boolean matrices. The surface covers boolean algebra (AND/OR/XOR/NOT),
//! membership, population count, set-bit location, multi-word shifts, and
//! checked conversion to integer types.
//!
//! Bounds-checked single-bit access, iteration, and string conversion are
//! intentionally left to wrapper layers built on top of this crate.
//!
//! # Examples
//!
//! ```
//! use wordset_core::{WordSet, words_for_bits};
//!
//! const LOGICAL_BITS: usize = 70;
//! let mut set: WordSet<{ words_for_bits(LOGICAL_BITS) }> = WordSet::new();
//!
//! set.set(0);
//! set.set(69);
//! assert_eq!(set.count(), 2);
//! assert_eq!(set.find_first_set(LOGICAL_BITS), Some(0));
//! assert_eq!(set.find_next_set(0, LOGICAL_BITS), Some(69));
//! ```

pub mod word_set;

pub use word_set::{BITS_PER_WORD, OverflowError, WordSet, words_for_bits};

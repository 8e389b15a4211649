//! Core domain types for descrambling
//!
//! The letter multiset an input is reduced to, and the range of word lengths
//! the dictionaries cover.

mod letters;

pub use letters::Letters;

use std::ops::RangeInclusive;

/// Shortest word the descrambler reports
pub const MIN_WORD_LEN: usize = 3;

/// Longest word the dictionaries hold
pub const MAX_WORD_LEN: usize = 7;

/// Every supported word length, shortest first
pub const WORD_LENGTHS: RangeInclusive<usize> = MIN_WORD_LEN..=MAX_WORD_LEN;

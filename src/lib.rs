//! Descrambler
//!
//! Finds every dictionary word of three to seven letters that can be built
//! from a jumble of letters.
//!
//! # Quick Start
//!
//! ```rust
//! use descrambler::solver::{Descrambler, GeneratorType};
//! use descrambler::wordlists::WordBank;
//!
//! let descrambler = Descrambler::new(GeneratorType::Positional, WordBank::embedded());
//! let buckets = descrambler.descramble("act");
//!
//! for (len, words) in buckets.iter() {
//!     println!("{len}: {words:?}");
//! }
//! ```

// Core domain types
pub mod core;

// Descrambling algorithms
pub mod solver;

// Word banks
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

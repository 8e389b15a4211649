//! Descrambling algorithms
//!
//! Candidate generation, dictionary matching and grouping of results.

pub mod bucket;
mod engine;
pub mod matcher;
pub mod permutations;

pub use bucket::{Buckets, bucket};
pub use engine::Descrambler;
pub use matcher::filter;
pub use permutations::{
    Generator, GeneratorType, MultisetGenerator, PositionalGenerator, generate,
};

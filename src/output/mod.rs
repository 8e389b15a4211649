//! Terminal output formatting
//!
//! Presentation of descramble results; nothing here affects what is found.

pub mod display;
pub mod formatters;

pub use display::{
    print_batch_result, print_benchmark_result, print_descramble_result, write_buckets,
    write_descramble_result, write_summary,
};

//! Command implementations

pub mod batch;
pub mod benchmark;
pub mod descramble;
pub mod simple;

pub use batch::{BatchConfig, BatchResult, run_batch, run_batch_file};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_words};
pub use descramble::{DescrambleConfig, DescrambleResult, MAX_INPUT_LEN, descramble_word};
pub use simple::{EXIT_COMMAND, run_session, run_simple};

//! Batch descramble command
//!
//! Descrambles every line of an input file, spreading the work across threads.

use super::descramble::MAX_INPUT_LEN;
use crate::core::Letters;
use crate::solver::{Buckets, Descrambler, Generator};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Configuration for a batch run
pub struct BatchConfig {
    pub path: PathBuf,
    pub max_input_len: usize,
    pub show_progress: bool,
}

impl BatchConfig {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            max_input_len: MAX_INPUT_LEN,
            show_progress: true,
        }
    }
}

/// Result for a single input line
#[derive(Debug, Clone)]
pub struct BatchEntry {
    pub input: String,
    pub buckets: Buckets,
}

/// Result of a batch run, entries in file order
#[derive(Debug)]
pub struct BatchResult {
    pub entries: Vec<BatchEntry>,
    pub skipped: Vec<String>,
    pub duration: Duration,
}

impl BatchResult {
    /// Total words found across all inputs
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.entries.iter().map(|entry| entry.buckets.total()).sum()
    }
}

/// Read batch inputs from a file, one per line, skipping blank lines
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_inputs(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read batch input {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Descramble every line of the configured file
///
/// # Errors
///
/// Returns an error if the input file cannot be read.
pub fn run_batch_file<G: Generator>(
    config: &BatchConfig,
    descrambler: &Descrambler<G>,
) -> Result<BatchResult> {
    let inputs = read_inputs(&config.path)?;
    info!("Read {} inputs from {}", inputs.len(), config.path.display());
    Ok(run_batch(descrambler, &inputs, config))
}

/// Descramble many inputs in parallel
///
/// Inputs longer than `config.max_input_len` are skipped and reported.
pub fn run_batch<G: Generator>(
    descrambler: &Descrambler<G>,
    inputs: &[String],
    config: &BatchConfig,
) -> BatchResult {
    let (accepted, skipped): (Vec<&String>, Vec<&String>) = inputs
        .iter()
        .partition(|input| Letters::new(input.as_str()).len() <= config.max_input_len);

    for input in &skipped {
        warn!("Skipping '{input}': more than {} letters", config.max_input_len);
    }

    let pb = if config.show_progress {
        ProgressBar::new(accepted.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let entries: Vec<BatchEntry> = accepted
        .par_iter()
        .map(|&input| {
            let buckets = descrambler.descramble(input);
            pb.inc(1);
            BatchEntry {
                input: input.clone(),
                buckets,
            }
        })
        .collect();

    pb.finish_with_message("Complete!");

    BatchResult {
        entries,
        skipped: skipped.into_iter().cloned().collect(),
        duration: start.elapsed(),
    }
}

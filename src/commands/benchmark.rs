//! Benchmark command
//!
//! Scrambles random dictionary words, descrambles them again and checks that
//! every original word is recovered.

use crate::solver::{Descrambler, Generator};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub recovered: usize,
    pub missed: Vec<String>,
    pub total_matches: usize,
    pub min_matches: usize,
    pub max_matches: usize,
    pub by_length: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct words from the descrambler's bank
///
/// Sampling is driven by `rng`, so a seeded generator picks the same words
/// every run.
#[must_use]
pub fn sample_words<G, R>(descrambler: &Descrambler<G>, count: usize, rng: &mut R) -> Vec<String>
where
    G: Generator,
    R: Rng + ?Sized,
{
    let mut pool: Vec<&str> = descrambler.bank().iter().collect();
    pool.sort_unstable();

    pool.choose_multiple(rng, count)
        .map(|&word| word.to_string())
        .collect()
}

/// Shuffle the letters of a word
#[must_use]
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    letters.shuffle(rng);
    letters.into_iter().collect()
}

/// Run benchmark on a set of target words
///
/// Each target is scrambled, descrambled, and counted as recovered if it
/// appears in the bucket for its length.
pub fn run_benchmark<G, R>(
    descrambler: &Descrambler<G>,
    targets: &[String],
    rng: &mut R,
    show_progress: bool,
) -> BenchmarkResult
where
    G: Generator,
    R: Rng + ?Sized,
{
    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut recovered = 0;
    let mut missed = Vec::new();
    let mut total_matches = 0;
    let mut min_matches = usize::MAX;
    let mut max_matches = 0;
    let mut by_length: FxHashMap<usize, usize> = FxHashMap::default();

    for target in targets {
        let scrambled = scramble(target, rng);
        let buckets = descrambler.descramble(&scrambled);
        let len = target.chars().count();

        if buckets.get(len).contains(target) {
            recovered += 1;
        } else {
            missed.push(target.clone());
        }

        let matches = buckets.total();
        total_matches += matches;
        min_matches = min_matches.min(matches);
        max_matches = max_matches.max(matches);
        *by_length.entry(len).or_insert(0) += 1;

        pb.set_message(scrambled);
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_words = targets.len();

    BenchmarkResult {
        total_words,
        recovered,
        missed,
        total_matches,
        min_matches: if total_words == 0 { 0 } else { min_matches },
        max_matches,
        by_length,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64(),
    }
}

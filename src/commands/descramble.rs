//! One-shot descramble command
//!
//! Descrambles a single input and returns the grouped words with timing.

use crate::core::Letters;
use crate::solver::{Buckets, Descrambler, Generator};
use anyhow::{Result, bail};
use log::info;
use std::time::{Duration, Instant};

/// Default longest input the command layer will attempt
///
/// Candidate counts grow factorially; ten letters already means close to ten
/// million arrangements. The CLI overrides it with `--max-len`.
pub const MAX_INPUT_LEN: usize = 10;

/// Configuration for descrambling one input
pub struct DescrambleConfig {
    pub input: String,
    pub max_input_len: usize,
}

impl DescrambleConfig {
    #[must_use]
    pub const fn new(input: String) -> Self {
        Self {
            input,
            max_input_len: MAX_INPUT_LEN,
        }
    }
}

/// Result of descrambling one input
#[derive(Debug)]
pub struct DescrambleResult {
    pub input: String,
    pub buckets: Buckets,
    pub duration: Duration,
}

/// Descramble a single input
///
/// # Errors
///
/// Returns an error if the input is longer than `config.max_input_len` letters.
pub fn descramble_word<G: Generator>(
    config: DescrambleConfig,
    descrambler: &Descrambler<G>,
) -> Result<DescrambleResult> {
    let letters = Letters::new(&config.input);
    if letters.len() > config.max_input_len {
        bail!(
            "'{}' has {} letters; at most {} are supported",
            config.input,
            letters.len(),
            config.max_input_len
        );
    }

    let start = Instant::now();
    let buckets = descrambler.descramble(letters.text());
    let duration = start.elapsed();

    info!(
        "Descrambled '{}' into {} words in {:.2?}",
        config.input,
        buckets.total(),
        duration
    );

    Ok(DescrambleResult {
        input: config.input,
        buckets,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::PositionalGenerator;
    use crate::wordlists::WordBank;

    #[test]
    fn descramble_word_finds_words() {
        let descrambler = Descrambler::new(PositionalGenerator, WordBank::embedded());
        let result = descramble_word(DescrambleConfig::new("tabs".to_string()), &descrambler)
            .unwrap();

        assert_eq!(result.input, "tabs");
        assert!(result.buckets.get(3).contains(&"tab".to_string()));
        assert!(result.buckets.get(4).contains(&"tabs".to_string()));
    }

    #[test]
    fn descramble_word_keeps_original_input() {
        let descrambler = Descrambler::new(PositionalGenerator, WordBank::embedded());
        let result =
            descramble_word(DescrambleConfig::new("CAT".to_string()), &descrambler).unwrap();

        assert_eq!(result.input, "CAT");
        assert!(result.buckets.get(3).contains(&"cat".to_string()));
    }

    #[test]
    fn empty_input_is_not_an_error() {
        let descrambler = Descrambler::new(PositionalGenerator, WordBank::embedded());
        let result = descramble_word(DescrambleConfig::new(String::new()), &descrambler).unwrap();

        assert!(result.buckets.is_empty());
    }

    #[test]
    fn oversized_input_rejected() {
        let descrambler = Descrambler::new(PositionalGenerator, WordBank::embedded());
        let mut config = DescrambleConfig::new("abcdef".to_string());
        config.max_input_len = 5;

        let err = descramble_word(config, &descrambler).unwrap_err();
        assert!(err.to_string().contains("at most 5"));
    }
}

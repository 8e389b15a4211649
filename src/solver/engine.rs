//! Main descrambling interface

use super::bucket::{Buckets, bucket};
use super::matcher::filter;
use super::permutations::Generator;
use crate::core::Letters;
use crate::wordlists::WordBank;
use log::debug;
use rustc_hash::FxHashSet;

/// Main descrambler
///
/// Pairs a candidate generator with a borrowed, read-only word bank. Each
/// call is independent, so one `Descrambler` can serve many threads.
pub struct Descrambler<'a, G: Generator> {
    generator: G,
    bank: &'a WordBank,
}

impl<'a, G: Generator> Descrambler<'a, G> {
    /// Create a new descrambler with the given generator and word bank
    pub const fn new(generator: G, bank: &'a WordBank) -> Self {
        Self { generator, bank }
    }

    #[inline]
    #[must_use]
    pub const fn generator(&self) -> &G {
        &self.generator
    }

    /// The word bank results are checked against
    #[inline]
    #[must_use]
    pub const fn bank(&self) -> &'a WordBank {
        self.bank
    }

    /// Every arrangement of three or more input letters, before the dictionary check
    #[must_use]
    pub fn candidates(&self, input: &str) -> FxHashSet<String> {
        self.generator.generate(&Letters::new(input))
    }

    /// Candidates that are real words, not yet grouped
    #[must_use]
    pub fn matches(&self, input: &str) -> FxHashSet<String> {
        let candidates = self.candidates(input);
        let matched = filter(&candidates, self.bank);
        debug!(
            "'{input}': {} candidates, {} words",
            candidates.len(),
            matched.len()
        );
        matched
    }

    /// Find every dictionary word hidden in `input`, grouped by length
    ///
    /// Input is lower-cased first. Inputs shorter than three letters give
    /// empty buckets.
    ///
    /// # Examples
    /// ```
    /// use descrambler::solver::{Descrambler, GeneratorType};
    /// use descrambler::wordlists::WordBank;
    ///
    /// let descrambler = Descrambler::new(GeneratorType::Positional, WordBank::embedded());
    /// let buckets = descrambler.descramble("Tabs");
    /// assert!(buckets.get(3).contains(&"tab".to_string()));
    /// assert!(buckets.get(4).contains(&"tabs".to_string()));
    /// ```
    #[must_use]
    pub fn descramble(&self, input: &str) -> Buckets {
        bucket(&self.matches(input))
    }
}

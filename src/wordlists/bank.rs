//! Immutable per-length word banks

use crate::core::WORD_LENGTHS;
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::OnceLock;

use super::embedded;

/// Valid words grouped by length
///
/// Built once, then only read. A length with no bank (or an empty one)
/// simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBank {
    banks: FxHashMap<usize, FxHashSet<String>>,
}

impl WordBank {
    /// Create an empty bank
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bank from `(length, words)` lists
    ///
    /// Words are trimmed and lower-cased. Blank entries and entries whose
    /// length does not match their list are dropped.
    ///
    /// # Examples
    /// ```
    /// use descrambler::wordlists::WordBank;
    ///
    /// let bank = WordBank::from_lists([(3, vec!["Cat", "dog"]), (4, vec!["tabs"])]);
    /// assert!(bank.contains("cat"));
    /// assert!(bank.contains("tabs"));
    /// assert_eq!(bank.len(), 3);
    /// ```
    pub fn from_lists<I, W, S>(lists: I) -> Self
    where
        I: IntoIterator<Item = (usize, W)>,
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut bank = Self::new();
        for (len, words) in lists {
            for word in words {
                bank.insert(len, word.as_ref());
            }
        }
        bank
    }

    /// The bank compiled into the binary
    ///
    /// Built on first use and shared for the rest of the process, however
    /// many times it is requested.
    #[must_use]
    pub fn embedded() -> &'static Self {
        static EMBEDDED: OnceLock<WordBank> = OnceLock::new();

        EMBEDDED.get_or_init(|| {
            let bank = Self::from_lists(
                WORD_LENGTHS.filter_map(|len| embedded::list_for(len).map(|list| (len, list))),
            );
            debug!("Built embedded word bank with {} words", bank.len());
            bank
        })
    }

    /// Add a word to the bank for `len`, returning whether it was accepted
    pub(crate) fn insert(&mut self, len: usize, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        if word.is_empty() || word.chars().count() != len {
            return false;
        }
        self.banks.entry(len).or_default().insert(word)
    }

    /// Make sure a (possibly empty) bank exists for `len`
    pub(crate) fn ensure_length(&mut self, len: usize) {
        self.banks.entry(len).or_default();
    }

    /// Words of exactly `len` letters, if a bank exists for that length
    #[inline]
    #[must_use]
    pub fn words(&self, len: usize) -> Option<&FxHashSet<String>> {
        self.banks.get(&len)
    }

    /// Check whether `word` is in the bank for its own length
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words(word.chars().count())
            .is_some_and(|bank| bank.contains(word))
    }

    /// Total number of words across all lengths
    #[must_use]
    pub fn len(&self) -> usize {
        self.banks.values().map(FxHashSet::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All words, shortest lengths first (order within a length is unspecified)
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        WORD_LENGTHS
            .filter_map(|len| self.words(len))
            .flat_map(|bank| bank.iter().map(String::as_str))
    }
}

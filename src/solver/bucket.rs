//! Grouping matched words by length

use crate::core::WORD_LENGTHS;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// Matched words keyed by length
///
/// Always holds a (possibly empty) list for every length 3..=7, shortest first.
/// Lists are sorted alphabetically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buckets {
    buckets: BTreeMap<usize, Vec<String>>,
}

impl Default for Buckets {
    fn default() -> Self {
        Self {
            buckets: WORD_LENGTHS.map(|len| (len, Vec::new())).collect(),
        }
    }
}

impl Buckets {
    /// Words of exactly `len` letters; empty outside 3..=7
    #[must_use]
    pub fn get(&self, len: usize) -> &[String] {
        self.buckets.get(&len).map_or(&[], Vec::as_slice)
    }

    /// `(length, words)` pairs, shortest first
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.buckets.iter().map(|(&len, words)| (len, words.as_slice()))
    }

    /// The lengths present, always 3..=7
    pub fn lengths(&self) -> impl Iterator<Item = usize> {
        self.buckets.keys().copied()
    }

    /// Every matched word, shortest first
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.buckets.values().flatten().map(String::as_str)
    }

    /// Total number of matched words
    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Group words by length
///
/// Every length 3..=7 gets a key even when no word has that length. Words
/// outside that range are dropped.
///
/// # Examples
/// ```
/// use descrambler::solver::bucket;
/// use rustc_hash::FxHashSet;
///
/// let words: FxHashSet<String> = ["tab", "bat", "tabs"].iter().map(|w| w.to_string()).collect();
/// let buckets = bucket(&words);
/// assert_eq!(buckets.get(3), ["bat", "tab"]);
/// assert_eq!(buckets.get(4), ["tabs"]);
/// assert!(buckets.get(7).is_empty());
/// ```
#[must_use]
pub fn bucket(words: &FxHashSet<String>) -> Buckets {
    let mut result = Buckets::default();

    for word in words {
        if let Some(list) = result.buckets.get_mut(&word.chars().count()) {
            list.push(word.clone());
        }
    }
    for list in result.buckets.values_mut() {
        list.sort_unstable();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> FxHashSet<String> {
        list.iter().map(|&w| w.to_string()).collect()
    }

    #[test]
    fn every_length_present_when_empty() {
        let buckets = bucket(&FxHashSet::default());
        assert_eq!(buckets.lengths().collect::<Vec<_>>(), vec![3, 4, 5, 6, 7]);
        assert!(buckets.is_empty());
        assert_eq!(buckets, Buckets::default());
    }

    #[test]
    fn words_grouped_by_length() {
        let buckets = bucket(&words(&["cat", "tabs", "state", "planet", "example"]));
        for len in WORD_LENGTHS {
            assert_eq!(buckets.get(len).len(), 1);
            assert!(buckets.get(len).iter().all(|w| w.len() == len));
        }
        assert_eq!(buckets.total(), 5);
    }

    #[test]
    fn lists_sorted() {
        let buckets = bucket(&words(&["tab", "cat", "bat", "act"]));
        assert_eq!(buckets.get(3), ["act", "bat", "cat", "tab"]);
    }

    #[test]
    fn out_of_range_words_dropped() {
        let buckets = bucket(&words(&["at", "cat", "examples"]));
        assert_eq!(buckets.total(), 1);
        assert_eq!(buckets.lengths().count(), 5);
    }

    #[test]
    fn get_outside_range_is_empty() {
        let buckets = bucket(&words(&["cat"]));
        assert!(buckets.get(2).is_empty());
        assert!(buckets.get(8).is_empty());
    }

    #[test]
    fn words_shortest_first() {
        let buckets = bucket(&words(&["tabs", "tab"]));
        assert_eq!(buckets.words().collect::<Vec<_>>(), vec!["tab", "tabs"]);
    }

    #[test]
    fn iter_pairs() {
        let buckets = bucket(&words(&["tab"]));
        let pairs: Vec<(usize, usize)> = buckets.iter().map(|(len, w)| (len, w.len())).collect();
        assert_eq!(pairs, vec![(3, 1), (4, 0), (5, 0), (6, 0), (7, 0)]);
    }
}

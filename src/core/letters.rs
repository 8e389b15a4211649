//! Letter multiset representation
//!
//! `Letters` holds a lower-cased input in its original order, duplicates included.

use rustc_hash::FxHashMap;
use std::fmt;

/// The letters available to build words from
///
/// Order is preserved and duplicates are kept: `"aab"` holds two `a`s and
/// one `b`, and a word built from it may use `a` at most twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Letters {
    text: String,
    chars: Vec<char>,
}

impl Letters {
    /// Create letters from raw input, lower-casing it
    ///
    /// Any character is accepted. Digits, spaces and punctuation are kept and
    /// take part in arrangements; they simply never appear in a dictionary.
    ///
    /// # Examples
    /// ```
    /// use descrambler::core::Letters;
    ///
    /// let letters = Letters::new("CaT");
    /// assert_eq!(letters.text(), "cat");
    /// assert_eq!(letters.len(), 3);
    /// ```
    #[must_use]
    pub fn new(text: impl AsRef<str>) -> Self {
        let text = text.as_ref().to_lowercase();
        let chars = text.chars().collect();
        Self { text, chars }
    }

    /// Get the letters as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters as a character slice, in input order
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of letters (characters, not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the count of each letter
    #[must_use]
    pub fn char_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }

    /// Check whether `word` can be spelled without using any letter more
    /// often than it appears here
    ///
    /// # Examples
    /// ```
    /// use descrambler::core::Letters;
    ///
    /// let letters = Letters::new("tabs");
    /// assert!(letters.can_spell("stab"));
    /// assert!(letters.can_spell("bat"));
    /// assert!(!letters.can_spell("tat"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.char_counts();
        word.chars().all(|ch| match remaining.get_mut(&ch) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        })
    }
}

impl From<&str> for Letters {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Letters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

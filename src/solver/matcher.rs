//! Dictionary cross-check
//!
//! Keeps only the candidates found in the word bank for their own length.

use crate::core::WORD_LENGTHS;
use crate::wordlists::WordBank;
use rustc_hash::FxHashSet;

/// Filter candidates down to real words
///
/// Intersects the candidates with each length's bank and unions the results.
/// A length with a missing or empty bank contributes nothing.
///
/// # Examples
/// ```
/// use descrambler::solver::{filter, generate};
/// use descrambler::wordlists::WordBank;
///
/// let bank = WordBank::from_lists([(3, vec!["tab", "bat"]), (4, vec!["tabs"])]);
/// let words = filter(&generate("stab"), &bank);
/// assert_eq!(words.len(), 3);
/// ```
#[must_use]
pub fn filter(candidates: &FxHashSet<String>, bank: &WordBank) -> FxHashSet<String> {
    WORD_LENGTHS
        .filter_map(|len| bank.words(len))
        .flat_map(|words| candidates.intersection(words).cloned())
        .collect()
}

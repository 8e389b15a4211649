//! Candidate generation
//!
//! Builds every arrangement of three or more input letters, each letter used
//! at most as often as it appears in the input.

use crate::core::{Letters, MIN_WORD_LEN};
use log::warn;
use rustc_hash::FxHashSet;

/// A way of building the candidate set for a letter multiset
pub trait Generator: Sync {
    /// Every distinct arrangement of at least three of `letters`
    ///
    /// Returns a freshly built set; nothing is shared between calls.
    fn generate(&self, letters: &Letters) -> FxHashSet<String>;
}

/// Enum wrapper for all generator types
///
/// Allows runtime selection of the generator while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneratorType {
    /// Extend by letter position (default)
    #[default]
    Positional,
    /// Extend by distinct letter
    Multiset,
}

impl Generator for GeneratorType {
    fn generate(&self, letters: &Letters) -> FxHashSet<String> {
        match self {
            Self::Positional => PositionalGenerator.generate(letters),
            Self::Multiset => MultisetGenerator.generate(letters),
        }
    }
}

impl GeneratorType {
    /// Create generator from name string
    ///
    /// Supported names: "positional", "multiset" (alias "dedup")
    /// Defaults to positional if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "positional" => Self::Positional,
            "multiset" | "dedup" => Self::Multiset,
            other => {
                warn!("Unknown generator '{other}', using positional");
                Self::Positional
            }
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Positional => "positional",
            Self::Multiset => "multiset",
        }
    }
}

/// Brute-force generator over letter positions
///
/// Every position is treated as its own letter, so `"aab"` reaches `"aba"`
/// twice (once per `a`). The set collapses the repeats.
pub struct PositionalGenerator;

impl Generator for PositionalGenerator {
    fn generate(&self, letters: &Letters) -> FxHashSet<String> {
        let mut found = FxHashSet::default();
        if letters.len() < MIN_WORD_LEN {
            return found;
        }

        let mut used = vec![false; letters.len()];
        let mut prefix = String::with_capacity(letters.text().len());
        extend_positional(letters.chars(), &mut used, &mut prefix, 0, &mut found);
        found
    }
}

fn extend_positional(
    letters: &[char],
    used: &mut [bool],
    prefix: &mut String,
    depth: usize,
    found: &mut FxHashSet<String>,
) {
    if depth >= MIN_WORD_LEN {
        found.insert(prefix.clone());
    }

    for (i, &ch) in letters.iter().enumerate() {
        if used[i] {
            continue;
        }
        used[i] = true;
        prefix.push(ch);
        extend_positional(letters, used, prefix, depth + 1, found);
        prefix.pop();
        used[i] = false;
    }
}

/// Generator over distinct letters
///
/// Tries each distinct letter once per step, so every arrangement is reached
/// exactly once. Produces the same set as [`PositionalGenerator`].
pub struct MultisetGenerator;

impl Generator for MultisetGenerator {
    fn generate(&self, letters: &Letters) -> FxHashSet<String> {
        let mut found = FxHashSet::default();
        if letters.len() < MIN_WORD_LEN {
            return found;
        }

        let mut pool: Vec<(char, usize)> = letters.char_counts().into_iter().collect();
        pool.sort_unstable();

        let mut prefix = String::with_capacity(letters.text().len());
        extend_multiset(&mut pool, &mut prefix, 0, &mut found);
        found
    }
}

fn extend_multiset(
    pool: &mut [(char, usize)],
    prefix: &mut String,
    depth: usize,
    found: &mut FxHashSet<String>,
) {
    if depth >= MIN_WORD_LEN {
        found.insert(prefix.clone());
    }

    for i in 0..pool.len() {
        let (ch, count) = pool[i];
        if count == 0 {
            continue;
        }
        pool[i].1 -= 1;
        prefix.push(ch);
        extend_multiset(pool, prefix, depth + 1, found);
        prefix.pop();
        pool[i].1 += 1;
    }
}

/// Generate the candidate set for raw letters with the default generator
///
/// # Examples
/// ```
/// use descrambler::solver::generate;
///
/// let candidates = generate("cat");
/// assert_eq!(candidates.len(), 6);
/// assert!(candidates.contains("act"));
/// assert!(generate("aa").is_empty());
/// ```
#[must_use]
pub fn generate(letters: &str) -> FxHashSet<String> {
    PositionalGenerator.generate(&Letters::new(letters))
}

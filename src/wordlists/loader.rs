//! Word bank loading utilities
//!
//! Loads a bank from a directory of `<n>-letter.txt` files, one per supported length.

use super::WordBank;
use crate::core::WORD_LENGTHS;
use log::{debug, warn};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for word bank files that cannot be loaded
#[derive(Debug)]
pub enum BankError {
    /// A bank file is missing or unreadable
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read word bank {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for BankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// File name holding the words of length `len`
#[must_use]
pub fn bank_file_name(len: usize) -> String {
    format!("{len}-letter.txt")
}

/// Load a full word bank from a directory
///
/// The directory must hold `3-letter.txt` through `7-letter.txt`. Each line is
/// trimmed and lower-cased; blank lines and words of the wrong length are skipped.
/// An empty file gives an empty bank for its length, which matches nothing.
///
/// # Errors
///
/// Returns `BankError::Io` if any of the five files cannot be read.
///
/// # Examples
/// ```no_run
/// use descrambler::wordlists::loader::load_from_dir;
///
/// let bank = load_from_dir("data").unwrap();
/// println!("Loaded {} words", bank.len());
/// ```
pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<WordBank, BankError> {
    let dir = dir.as_ref();
    let mut bank = WordBank::new();

    for len in WORD_LENGTHS {
        let path = dir.join(bank_file_name(len));
        let content = fs::read_to_string(&path).map_err(|source| BankError::Io {
            path: path.clone(),
            source,
        })?;

        let (accepted, skipped) = load_words(&mut bank, len, &content);
        if skipped > 0 {
            warn!(
                "Skipped {skipped} entries in {} that are not {len} letters long",
                path.display()
            );
        }
        if accepted == 0 {
            warn!("{} holds no {len}-letter words", path.display());
        }
        debug!("Loaded {accepted} words from {}", path.display());
    }

    Ok(bank)
}

/// Insert every line of `content` into the bank for `len`
///
/// Returns `(accepted, skipped)`; blank lines and repeats count as neither.
fn load_words(bank: &mut WordBank, len: usize, content: &str) -> (usize, usize) {
    bank.ensure_length(len);

    let mut accepted = 0;
    let mut skipped = 0;

    for line in content.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if line.chars().count() != len {
            skipped += 1;
        } else if bank.insert(len, line) {
            accepted += 1;
        }
    }

    (accepted, skipped)
}

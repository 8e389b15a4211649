//! Formatting utilities for terminal output

use crate::solver::Buckets;

/// Header line printed above the words of one length
#[must_use]
pub fn length_header(len: usize) -> String {
    format!("LENGTH OF {len} ===============")
}

/// "1 word" / "3 words"
#[must_use]
pub fn word_count(count: usize) -> String {
    if count == 1 {
        "1 word".to_string()
    } else {
        format!("{count} words")
    }
}

/// Compact per-length counts, e.g. `3:2 4:1 5:0 6:0 7:0`
#[must_use]
pub fn count_breakdown(buckets: &Buckets) -> String {
    buckets
        .iter()
        .map(|(len, words)| format!("{len}:{}", words.len()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

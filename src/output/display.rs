//! Display functions for command results

use super::formatters::{count_breakdown, create_progress_bar, length_header, word_count};
use crate::commands::{BatchResult, BenchmarkResult, DescrambleResult};
use crate::solver::Buckets;
use colored::Colorize;
use std::io::{self, Write};

/// Write every length header followed by its words, one per line
///
/// Lengths without matches get only the header.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_buckets<W: Write>(out: &mut W, buckets: &Buckets) -> io::Result<()> {
    for (len, words) in buckets.iter() {
        writeln!(out, "\n{}", length_header(len).bright_cyan().bold())?;
        for word in words {
            writeln!(out, "{word}")?;
        }
    }
    Ok(())
}

/// Write a one-line summary of an input's matches
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_summary<W: Write>(out: &mut W, input: &str, buckets: &Buckets) -> io::Result<()> {
    writeln!(
        out,
        "{}: {} ({})",
        input.bright_yellow(),
        word_count(buckets.total()),
        count_breakdown(buckets).bright_black()
    )
}

/// Write the result of descrambling one input
///
/// Verbose output lists every word under its length header; otherwise only
/// the summary line is written.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_descramble_result<W: Write>(
    out: &mut W,
    result: &DescrambleResult,
    verbose: bool,
) -> io::Result<()> {
    if !verbose {
        return write_summary(out, &result.input, &result.buckets);
    }

    write_buckets(out, &result.buckets)?;
    writeln!(
        out,
        "\n{} found in {:.2?}",
        word_count(result.buckets.total()).green().bold(),
        result.duration
    )
}

/// Print the result of descrambling one input to stdout
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_descramble_result(result: &DescrambleResult, verbose: bool) -> io::Result<()> {
    write_descramble_result(&mut io::stdout().lock(), result, verbose)
}

/// Print the result of a batch run
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_batch_result(result: &BatchResult, verbose: bool) -> io::Result<()> {
    let mut out = io::stdout().lock();

    for entry in &result.entries {
        if verbose {
            writeln!(out, "\n{}", "─".repeat(60).cyan())?;
            writeln!(out, "Descrambling: {}", entry.input.bright_yellow().bold())?;
            writeln!(out, "{}", "─".repeat(60).cyan())?;
            write_buckets(&mut out, &entry.buckets)?;
        } else {
            write_summary(&mut out, &entry.input, &entry.buckets)?;
        }
    }

    for input in &result.skipped {
        writeln!(out, "{}", format!("⚠ Skipped '{input}' (too long)").yellow())?;
    }

    writeln!(
        out,
        "\n{} {} across {} inputs in {:.2?}",
        "✅".green(),
        word_count(result.total_words()).bold(),
        result.entries.len(),
        result.duration
    )
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Recovered:        {}",
        format!("{}/{}", result.recovered, result.total_words)
            .bright_yellow()
            .bold()
    );
    if result.total_words > 0 {
        println!(
            "   Matches/word:     {:.1} (min {}, max {})",
            result.total_matches as f64 / result.total_words as f64,
            result.min_matches,
            result.max_matches
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Word lengths:".bright_cyan().bold());
    let mut lengths: Vec<(&usize, &usize)> = result.by_length.iter().collect();
    lengths.sort_unstable();
    for (len, &count) in lengths {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {len}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.missed.is_empty() {
        println!("\n{}", "❌ Not recovered:".red().bold());
        for word in &result.missed {
            println!("   {word}");
        }
    }
}

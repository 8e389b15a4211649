//! Interactive descramble loop
//!
//! Prompts for input until the `\exit` sentinel or end of input.

use super::descramble::{DescrambleConfig, descramble_word};
use crate::output::display::write_descramble_result;
use crate::solver::{Descrambler, Generator};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Line that ends the interactive loop
pub const EXIT_COMMAND: &str = "\\exit";

/// Run the interactive loop on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub fn run_simple<G: Generator>(
    descrambler: &Descrambler<G>,
    max_input_len: usize,
    verbose: bool,
) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(descrambler, stdin.lock(), stdout.lock(), max_input_len, verbose)?;
    Ok(())
}

/// Run the interactive loop over any reader and writer
///
/// Every line other than the sentinel is descrambled as-is, empty lines
/// included. Lines longer than `max_input_len` letters get a warning and the
/// prompt continues. Returns the number of inputs descrambled.
///
/// # Errors
///
/// Returns an I/O error if reading or writing fails.
pub fn run_session<G, R, W>(
    descrambler: &Descrambler<G>,
    mut reader: R,
    mut writer: W,
    max_input_len: usize,
    verbose: bool,
) -> io::Result<usize>
where
    G: Generator,
    R: BufRead,
    W: Write,
{
    write_banner(&mut writer)?;

    let mut handled = 0;
    let mut line = String::new();

    loop {
        write!(
            writer,
            "\n\nEnter a word to be descrambled (type '{EXIT_COMMAND}' to terminate the program): "
        )?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            // End of input behaves like the sentinel
            writeln!(writer)?;
            break;
        }

        let input = line.trim_end_matches(['\r', '\n']);
        if input == EXIT_COMMAND {
            break;
        }

        let mut config = DescrambleConfig::new(input.to_string());
        config.max_input_len = max_input_len;

        match descramble_word(config, descrambler) {
            Ok(result) => {
                write_descramble_result(&mut writer, &result, verbose)?;
                handled += 1;
            }
            Err(e) => writeln!(writer, "{}", format!("⚠ {e}").yellow())?,
        }
    }

    Ok(handled)
}

fn write_banner<W: Write>(writer: &mut W) -> io::Result<()> {
    let rule = "=".repeat(56);
    writeln!(writer, "{}", rule.cyan())?;
    writeln!(writer, "|             Welcome to the descrambler!!             |")?;
    writeln!(writer, "| Type in an anagram and press enter to descramble it. |")?;
    writeln!(writer, "| At any time, type '{EXIT_COMMAND}' to terminate the program.  |")?;
    writeln!(writer, "{}", rule.cyan())
}

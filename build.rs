//! Build script to generate embedded word banks
//!
//! Reads one word list per supported length and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const NAMES: [(usize, &str); 5] = [
    (3, "THREE_LETTER"),
    (4, "FOUR_LETTER"),
    (5, "FIVE_LETTER"),
    (6, "SIX_LETTER"),
    (7, "SEVEN_LETTER"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for (len, const_name) in NAMES {
        let input_path = format!("data/{len}-letter.txt");
        generate_word_list(
            &input_path,
            &Path::new(&out_dir).join(format!("{len}_letter.rs")),
            const_name,
            &format!("Dictionary words of exactly {len} letters"),
        );

        // Rebuild if word lists change
        println!("cargo:rerun-if-changed={input_path}");
    }
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}

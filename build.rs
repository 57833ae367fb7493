//! Build script to generate embedded word lists
//!
//! Reads the raw word list files, keeps lowercase 5-letter alphabetic entries,
//! and generates Rust source code with const arrays.

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const WORD_LENGTH: usize = 5;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let guesses = read_word_list("data/guesses.txt");

    // Seeds only make sense as start/target words if they can also be typed in
    let seeds: BTreeSet<String> = read_word_list("data/seeds.txt")
        .intersection(&guesses)
        .cloned()
        .collect();

    generate_word_list(
        &guesses,
        &Path::new(&out_dir).join("guesses.rs"),
        "GUESSES",
        "All words accepted as ladder steps",
    );

    generate_word_list(
        &seeds,
        &Path::new(&out_dir).join("seeds.rs"),
        "SEEDS",
        "High-frequency words used to pick puzzle start and target words",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/guesses.txt");
    println!("cargo:rerun-if-changed=data/seeds.txt");
}

fn read_word_list(input_path: &str) -> BTreeSet<String> {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_lowercase()))
        .collect()
}

fn generate_word_list(
    words: &BTreeSet<String>,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) {
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment} ({count} words)").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}

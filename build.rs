//! Build script to generate the embedded word list
//!
//! Reads `data/words.txt` and emits a const slice of uppercase words into
//! `$OUT_DIR/words.rs`.

use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const SOURCE: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let content =
        fs::read_to_string(SOURCE).unwrap_or_else(|e| panic!("cannot read {SOURCE}: {e}"));

    let mut seen = HashSet::new();
    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_ascii_uppercase())
        .filter(|word| !word.is_empty())
        .inspect(|word| {
            assert!(
                word.len() == 5 && word.bytes().all(|b| b.is_ascii_uppercase()),
                "{SOURCE} contains '{word}', which is not a five-letter word"
            );
        })
        .filter(|word| seen.insert(word.clone()))
        .collect();

    let mut source = String::new();
    let count = words.len();
    let _ = writeln!(source, "/// Default five-letter word list ({count} words)");
    let _ = writeln!(source, "pub const DEFAULT_WORDS: &[&str] = &[");
    for word in &words {
        let _ = writeln!(source, "    \"{word}\",");
    }
    let _ = writeln!(source, "];\n");
    let _ = writeln!(source, "/// Number of words in `DEFAULT_WORDS`");
    let _ = writeln!(source, "pub const DEFAULT_WORDS_COUNT: usize = {count};");

    let target = Path::new(&out_dir).join("words.rs");
    fs::write(&target, source)
        .unwrap_or_else(|e| panic!("cannot write {}: {e}", target.display()));

    println!("cargo:rerun-if-changed={SOURCE}");
}

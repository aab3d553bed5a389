//! Building word lists from files and string slices
//!
//! Every entry is normalized to uppercase and validated; duplicates are dropped,
//! keeping first-seen order.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Read one word list file
///
/// One word per line. Anything after a tab is ignored, so frequency lists in
/// `word<TAB>count` form load directly. Blank lines, invalid words and duplicates
/// are skipped.
///
/// # Errors
///
/// Fails with the underlying I/O error when the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_advisor::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// assert!(!words.is_empty());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    load_from_files(&[path])
}

/// Load and merge several word files, deduplicating across all of them
///
/// # Errors
///
/// Returns an I/O error if any file cannot be read or opened.
pub fn load_from_files<P: AsRef<Path>>(paths: &[P]) -> io::Result<Vec<Word>> {
    let mut contents = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        log::debug!("read word file {}", path.display());
        contents.push(content);
    }

    Ok(words_from_lines(contents.iter().flat_map(|c| c.lines())))
}

/// Build a word list from string slices such as `DEFAULT_WORDS`
///
/// # Examples
/// ```
/// use wordle_advisor::wordlists::loader::words_from_slice;
/// use wordle_advisor::wordlists::DEFAULT_WORDS;
///
/// let words = words_from_slice(DEFAULT_WORDS);
/// assert_eq!(words.len(), DEFAULT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();
    let mut skipped = 0usize;

    for line in lines {
        let entry = line.split('\t').next().unwrap_or_default().trim();
        if entry.is_empty() {
            continue;
        }

        match Word::new(entry) {
            Ok(word) => {
                if seen.insert(word.text().to_string()) {
                    words.push(word);
                }
            }
            Err(e) => {
                skipped += 1;
                log::trace!("skipping '{entry}': {e}");
            }
        }
    }

    if skipped > 0 {
        log::debug!("skipped {skipped} entries that are not valid words");
    }
    log::debug!("loaded {} unique words", words.len());

    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wordle_advisor_{}_{name}",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn slice_entries_become_uppercase_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);
        assert_eq!(texts(&words), ["CRANE", "SLATE", "IRATE"]);
    }

    #[test]
    fn slice_skips_invalid_entries() {
        let words = words_from_slice(&["crane", "toolong", "abc", "sl4te", "slate"]);
        assert_eq!(texts(&words), ["CRANE", "SLATE"]);
    }

    #[test]
    fn slice_dedupes_case_insensitively() {
        let words = words_from_slice(&["crane", "SLATE", "Crane", "slate", "trace"]);
        assert_eq!(texts(&words), ["CRANE", "SLATE", "TRACE"]);
    }

    #[test]
    fn empty_slice_gives_empty_list() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_plain_and_tab_separated_files() {
        let plain = temp_file("plain.txt", "crane\n\n  slate \nhello world\n");
        let tabbed = temp_file("tabbed.txt", "TRACE\t0.93\nCRANE\t0.41\nabide\t0.10\n");

        let words = load_from_files(&[&plain, &tabbed]).unwrap();
        assert_eq!(texts(&words), ["CRANE", "SLATE", "TRACE", "ABIDE"]);

        let single = load_from_file(&tabbed).unwrap();
        assert_eq!(texts(&single), ["TRACE", "CRANE", "ABIDE"]);

        fs::remove_file(plain).unwrap();
        fs::remove_file(tabbed).unwrap();
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let missing = std::env::temp_dir().join("wordle_advisor_definitely_missing.txt");
        assert!(load_from_file(missing).is_err());
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::DEFAULT_WORDS;

        let words = words_from_slice(DEFAULT_WORDS);
        assert_eq!(words.len(), DEFAULT_WORDS.len());
    }
}

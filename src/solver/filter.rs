//! Candidate filtering from accumulated feedback
//!
//! Each evaluation is turned into positional constraints; a word is a candidate
//! when it satisfies every constraint of every record.
//!
//! An `Absent` verdict excludes its letter from the whole word, even when the same
//! record marks another copy of that letter `Correct` or `Present`. Such records can
//! therefore reject the true secret. This mirrors the constraints the advisor has
//! always derived and is kept as is.

use crate::core::{Evaluation, History, Verdict, Word};
use std::fmt;

/// A single requirement on a candidate word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// Letter must be at this position
    At(usize, u8),
    /// Letter must not be at this position
    NotAt(usize, u8),
    /// Letter must appear somewhere
    Contains(u8),
    /// Letter must not appear anywhere
    Excludes(u8),
}

impl Constraint {
    /// Check whether `word` satisfies this constraint
    #[inline]
    #[must_use]
    pub fn is_satisfied_by(self, word: &Word) -> bool {
        match self {
            Self::At(position, letter) => word.char_at(position) == letter,
            Self::NotAt(position, letter) => word.char_at(position) != letter,
            Self::Contains(letter) => word.has_letter(letter),
            Self::Excludes(letter) => !word.has_letter(letter),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::At(position, letter) => {
                write!(f, "{} at {}", char::from(letter), position + 1)
            }
            Self::NotAt(position, letter) => {
                write!(f, "{} not at {}", char::from(letter), position + 1)
            }
            Self::Contains(letter) => write!(f, "contains {}", char::from(letter)),
            Self::Excludes(letter) => write!(f, "excludes {}", char::from(letter)),
        }
    }
}

/// Derive the constraints implied by one evaluation, in position order
///
/// # Examples
/// ```
/// use wordle_advisor::core::parse_feedback;
/// use wordle_advisor::solver::filter::{Constraint, constraints_for};
///
/// let record = parse_feedback("t! a? rx e! sx").unwrap();
/// let constraints = constraints_for(&record);
/// assert_eq!(constraints[0], Constraint::At(0, b'T'));
/// assert!(constraints.contains(&Constraint::NotAt(1, b'A')));
/// assert!(constraints.contains(&Constraint::Excludes(b'S')));
/// ```
#[must_use]
pub fn constraints_for(record: &Evaluation) -> Vec<Constraint> {
    let mut constraints = Vec::with_capacity(record.results().len() + 2);

    for (position, result) in record.iter().enumerate() {
        match result.verdict {
            Verdict::Correct => constraints.push(Constraint::At(position, result.letter)),
            Verdict::Present => {
                constraints.push(Constraint::Contains(result.letter));
                constraints.push(Constraint::NotAt(position, result.letter));
            }
            Verdict::Absent => constraints.push(Constraint::Excludes(result.letter)),
        }
    }

    constraints
}

/// Check whether `word` is consistent with a single evaluation
#[must_use]
pub fn matches_record(word: &Word, record: &Evaluation) -> bool {
    constraints_for(record)
        .into_iter()
        .all(|constraint| constraint.is_satisfied_by(word))
}

/// Check whether `word` is consistent with every evaluation in `history`
#[must_use]
pub fn matches_history(word: &Word, history: &History) -> bool {
    history.iter().all(|record| matches_record(word, record))
}

/// Filter `words` down to those consistent with `history`
///
/// Preserves input order. An empty history keeps every word.
#[must_use]
pub fn filter_candidates<'a>(words: &'a [Word], history: &History) -> Vec<&'a Word> {
    if history.is_empty() {
        return words.iter().collect();
    }

    // Derive constraints once per record rather than once per word
    let constraints: Vec<Constraint> = history.iter().flat_map(constraints_for).collect();

    let candidates: Vec<&Word> = words
        .iter()
        .filter(|word| constraints.iter().all(|c| c.is_satisfied_by(word)))
        .collect();

    log::debug!(
        "filtered {} words to {} candidates using {} constraints from {} records",
        words.len(),
        candidates.len(),
        constraints.len(),
        history.len()
    );

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_feedback;
    use crate::wordlists::loader::words_from_slice;

    fn words(list: &[&str]) -> Vec<Word> {
        words_from_slice(list)
    }

    fn history(feedback: &[&str]) -> History {
        feedback.iter().map(|f| parse_feedback(f).unwrap()).collect()
    }

    fn texts(candidates: &[&Word]) -> Vec<String> {
        candidates.iter().map(|w| w.text().to_string()).collect()
    }

    #[test]
    fn constraints_follow_verdicts() {
        let record = parse_feedback("c! r? ax nx e?").unwrap();
        assert_eq!(
            constraints_for(&record),
            vec![
                Constraint::At(0, b'C'),
                Constraint::Contains(b'R'),
                Constraint::NotAt(1, b'R'),
                Constraint::Excludes(b'A'),
                Constraint::Excludes(b'N'),
                Constraint::Contains(b'E'),
                Constraint::NotAt(4, b'E'),
            ]
        );
    }

    #[test]
    fn constraint_checks() {
        let word = Word::new("crane").unwrap();
        assert!(Constraint::At(0, b'C').is_satisfied_by(&word));
        assert!(!Constraint::At(1, b'C').is_satisfied_by(&word));
        assert!(Constraint::NotAt(1, b'C').is_satisfied_by(&word));
        assert!(Constraint::Contains(b'N').is_satisfied_by(&word));
        assert!(!Constraint::Excludes(b'N').is_satisfied_by(&word));
        assert!(Constraint::Excludes(b'Z').is_satisfied_by(&word));
    }

    #[test]
    fn empty_history_keeps_everything_in_order() {
        let list = words(&["slate", "crane", "trace"]);
        let candidates = filter_candidates(&list, &History::new());
        assert_eq!(texts(&candidates), ["SLATE", "CRANE", "TRACE"]);
    }

    #[test]
    fn filters_by_all_records() {
        let list = words(&["crane", "trace", "react", "crate", "slate", "caret"]);
        // Secret CRATE, guessed TRACE: T? R! A! C? E!
        let history = history(&["t? r! a! c? e!"]);
        let candidates = filter_candidates(&list, &history);
        assert_eq!(texts(&candidates), ["CRATE"]);
    }

    #[test]
    fn secret_always_survives_its_own_feedback_without_duplicates() {
        let list = words(&["crane", "trace", "react", "crate", "slate", "caret", "cater"]);
        let secret = Word::new("caret").unwrap();
        for guess in &list {
            let record = Evaluation::evaluate(&secret, guess);
            assert!(
                matches_record(&secret, &record),
                "{secret} rejected by feedback for {guess}"
            );
        }
    }

    #[test]
    fn all_correct_record_leaves_only_that_word() {
        let list = words(&["crane", "trace", "crate", "slate"]);
        let history = history(&["t! r! a! c! e!"]);
        assert_eq!(texts(&filter_candidates(&list, &history)), ["TRACE"]);
    }

    #[test]
    fn contradictory_history_leaves_nothing() {
        let list = words(&["crane", "trace", "crate", "slate"]);
        let history = history(&["z! z! z! z! z!"]);
        assert!(filter_candidates(&list, &history).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let list = words(&["crane", "trace", "react", "crate", "slate", "caret", "cater"]);
        let history = history(&["fx jx ox r? dx"]);

        let once: Vec<Word> = filter_candidates(&list, &history)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_candidates(&once, &history);

        assert_eq!(once.len(), 6);
        assert_eq!(texts(&twice), once.iter().map(|w| w.text()).collect::<Vec<_>>());
    }

    #[test]
    fn absent_duplicate_excludes_letter_everywhere() {
        // Secret ELDER, guess TEPEE: the last E is absent, which excludes every
        // word containing E, the secret included.
        let secret = Word::new("elder").unwrap();
        let guess = Word::new("tepee").unwrap();
        let record = Evaluation::evaluate(&secret, &guess);

        assert!(constraints_for(&record).contains(&Constraint::Excludes(b'E')));
        assert!(!matches_record(&secret, &record));
    }

    #[test]
    fn matches_history_requires_every_record() {
        let word = Word::new("crate").unwrap();
        assert!(!matches_history(&word, &history(&["cx rx ax nx ex"])));
        assert!(matches_history(&word, &history(&["c! r! a! nx e!", "c! r! a! t! e!"])));
    }
}

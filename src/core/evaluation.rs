//! Guess evaluation against a secret word
//!
//! An `Evaluation` holds one verdict per guessed letter, in guess order. Duplicate
//! letters share a single running tally across both passes, so a letter is never
//! reported as correct or present more times than the secret contains it.

use super::verdict::Verdict;
use super::word::{WORD_LENGTH, Word, WordError};
use std::fmt;

/// A guessed letter together with its verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterResult {
    pub letter: u8,
    pub verdict: Verdict,
}

impl LetterResult {
    #[must_use]
    pub const fn new(letter: u8, verdict: Verdict) -> Self {
        Self { letter, verdict }
    }
}

/// Feedback for one guess: exactly one `LetterResult` per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation([LetterResult; WORD_LENGTH]);

impl Evaluation {
    /// Build an evaluation from already-known results (e.g. parsed user feedback)
    #[must_use]
    pub const fn new(results: [LetterResult; WORD_LENGTH]) -> Self {
        Self(results)
    }

    /// Evaluate `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches `Correct` and seed a per-letter
    ///    tally with those matches
    /// 2. Second pass, left to right over the other positions: a letter missing from
    ///    the secret is `Absent`; otherwise it is `Present` while the tally is below
    ///    the secret's count of that letter, `Absent` after that. The tally grows
    ///    every time the letter is seen in this pass.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Evaluation, Verdict, Word};
    ///
    /// let secret = Word::new("elder").unwrap();
    /// let guess = Word::new("tepee").unwrap();
    /// let evaluation = Evaluation::evaluate(&secret, &guess);
    ///
    /// assert_eq!(
    ///     evaluation.verdicts(),
    ///     [Verdict::Absent, Verdict::Present, Verdict::Absent, Verdict::Correct, Verdict::Absent]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        let mut tally = rustc_hash::FxHashMap::<u8, u8>::default();

        // First pass: exact matches
        for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            if g == s {
                verdicts[i] = Verdict::Correct;
                *tally.entry(g).or_insert(0) += 1;
            }
        }

        // Second pass: misplaced letters, limited by the secret's letter counts
        let secret_counts = secret.char_counts();
        for (i, &letter) in guess.chars().iter().enumerate() {
            if verdicts[i] == Verdict::Correct {
                continue;
            }
            let Some(&total) = secret_counts.get(&letter) else {
                continue;
            };
            let used = tally.entry(letter).or_insert(0);
            if *used < total {
                verdicts[i] = Verdict::Present;
            }
            *used += 1;
        }

        let mut results = [LetterResult::new(0, Verdict::Absent); WORD_LENGTH];
        for (slot, (&letter, verdict)) in results
            .iter_mut()
            .zip(guess.chars().iter().zip(verdicts))
        {
            *slot = LetterResult::new(letter, verdict);
        }

        Self(results)
    }

    /// Evaluate two raw strings, validating both first
    ///
    /// # Errors
    /// Returns `WordError` if either string is not a valid five-letter word.
    pub fn evaluate_str(secret: &str, guess: &str) -> Result<Self, WordError> {
        Ok(Self::evaluate(&Word::new(secret)?, &Word::new(guess)?))
    }

    #[inline]
    #[must_use]
    pub const fn results(&self) -> &[LetterResult; WORD_LENGTH] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &LetterResult> {
        self.0.iter()
    }

    /// The verdicts alone, in guess order
    #[must_use]
    pub fn verdicts(&self) -> [Verdict; WORD_LENGTH] {
        self.0.map(|result| result.verdict)
    }

    /// The guessed word, as uppercase text
    #[must_use]
    pub fn guess(&self) -> String {
        self.0.iter().map(|result| char::from(result.letter)).collect()
    }

    /// Number of positions with the given verdict
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|result| result.verdict == verdict).count()
    }

    /// True when every position is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|result| result.verdict == Verdict::Correct)
    }

    /// Render in the feedback input format, e.g. `t! a? rx e! sx`
    #[must_use]
    pub fn to_feedback_string(&self) -> String {
        self.0
            .iter()
            .map(|result| {
                format!(
                    "{}{}",
                    char::from(result.letter.to_ascii_lowercase()),
                    result.verdict.symbol()
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Render as colored squares, e.g. `⬜🟩🟩🟨🟩`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|result| result.verdict.emoji()).collect()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_feedback_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{DEFAULT_WORDS, loader::words_from_slice};
    use crate::core::Verdict::{Absent, Correct, Present};

    fn verdicts(secret: &str, guess: &str) -> [Verdict; WORD_LENGTH] {
        Evaluation::evaluate_str(secret, guess).unwrap().verdicts()
    }

    #[test]
    fn duplicate_letters_follow_guess_order() {
        // ELDER has two E's; the one at position 3 is correct, leaving one for
        // the leftmost misplaced E.
        assert_eq!(
            verdicts("elder", "tepee"),
            [Absent, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn exact_match_is_all_correct() {
        assert_eq!(verdicts("abide", "abide"), [Correct; WORD_LENGTH]);
    }

    #[test]
    fn trace_against_crane() {
        assert_eq!(
            verdicts("crane", "trace"),
            [Absent, Correct, Correct, Present, Correct]
        );
    }

    #[test]
    fn correct_position_claims_letter_before_earlier_duplicate() {
        // The second O is correct, so the first one only gets the remaining O.
        assert_eq!(
            verdicts("floor", "robot"),
            [Present, Present, Absent, Correct, Absent]
        );
        assert_eq!(
            verdicts("abbey", "kebab"),
            [Absent, Present, Correct, Present, Present]
        );
    }

    #[test]
    fn excess_duplicates_are_absent() {
        assert_eq!(
            verdicts("thorn", "geese"),
            [Absent, Absent, Absent, Absent, Absent]
        );
        assert_eq!(
            verdicts("there", "eerie"),
            [Present, Absent, Present, Absent, Correct]
        );
    }

    #[test]
    fn no_common_letters() {
        assert_eq!(verdicts("fjord", "quick"), [Absent; WORD_LENGTH]);
    }

    #[test]
    fn evaluate_str_rejects_bad_length() {
        assert_eq!(
            Evaluation::evaluate_str("crane", "cranes"),
            Err(WordError::InvalidLength(6))
        );
        assert_eq!(
            Evaluation::evaluate_str("cran", "crane"),
            Err(WordError::InvalidLength(4))
        );
        assert_eq!(
            Evaluation::evaluate_str("stars", "ßtar"),
            Err(WordError::NonAscii)
        );
    }

    #[test]
    fn self_evaluation_is_solved() {
        for word in words_from_slice(DEFAULT_WORDS) {
            let evaluation = Evaluation::evaluate(&word, &word);
            assert!(evaluation.is_solved(), "{word} did not match itself");
        }
    }

    #[test]
    fn never_over_counts_duplicates() {
        let words = words_from_slice(&DEFAULT_WORDS[..200]);
        for secret in &words {
            for guess in &words {
                let evaluation = Evaluation::evaluate(secret, guess);
                for letter in b'A'..=b'Z' {
                    let hits = evaluation
                        .iter()
                        .filter(|r| r.letter == letter && r.verdict != Absent)
                        .count();
                    assert!(
                        hits <= usize::from(secret.count_of(letter)),
                        "{guess} vs {secret} over-counts {}",
                        char::from(letter)
                    );
                }
            }
        }
    }

    #[test]
    fn guess_text_and_counts() {
        let evaluation = Evaluation::evaluate_str("crane", "trace").unwrap();
        assert_eq!(evaluation.guess(), "TRACE");
        assert_eq!(evaluation.count(Correct), 3);
        assert_eq!(evaluation.count(Present), 1);
        assert_eq!(evaluation.count(Absent), 1);
        assert!(!evaluation.is_solved());
    }

    #[test]
    fn renders_feedback_and_emoji() {
        let evaluation = Evaluation::evaluate_str("crane", "trace").unwrap();
        assert_eq!(evaluation.to_feedback_string(), "tx r! a! c? e!");
        assert_eq!(evaluation.to_string(), "tx r! a! c? e!");
        assert_eq!(evaluation.to_emoji(), "⬜🟩🟩🟨🟩");
    }
}

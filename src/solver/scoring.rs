//! Weighted hit scoring
//!
//! A record scores `correct` per `Correct` verdict and `present` per `Present`
//! verdict. A word's score against a list is the average record score it earns as a
//! guess against every other word in the list, i.e. the expected weighted hits
//! against a uniformly random secret.

use crate::core::{Evaluation, Verdict, WORD_LENGTH, Word};
use rayon::prelude::*;
use std::fmt;

/// Weights applied to each verdict; `Absent` always weighs nothing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub correct: f64,
    pub present: f64,
}

impl ScoringWeights {
    pub const DEFAULT_CORRECT: f64 = 2.5;
    pub const DEFAULT_PRESENT: f64 = 1.0;

    #[must_use]
    pub const fn new(correct: f64, present: f64) -> Self {
        Self { correct, present }
    }

    /// Build weights that keep scores monotonic: `correct > present > 0`, both finite
    ///
    /// # Errors
    /// Returns `ScoreError::InvalidWeights` for any other combination.
    pub fn checked(correct: f64, present: f64) -> Result<Self, ScoreError> {
        if correct.is_finite() && present.is_finite() && present > 0.0 && correct > present {
            Ok(Self::new(correct, present))
        } else {
            Err(ScoreError::InvalidWeights)
        }
    }

    /// Weight of a single verdict
    #[inline]
    #[must_use]
    pub const fn weight(&self, verdict: Verdict) -> f64 {
        match verdict {
            Verdict::Correct => self.correct,
            Verdict::Present => self.present,
            Verdict::Absent => 0.0,
        }
    }

    /// Score of an all-correct record
    #[must_use]
    pub const fn perfect(&self) -> f64 {
        WORD_LENGTH as f64 * self.correct
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CORRECT, Self::DEFAULT_PRESENT)
    }
}

/// Errors raised while setting up scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    /// Scoring needs at least two words; holds the actual size
    DegenerateWordList(usize),
    /// Weights are not finite or do not satisfy `correct > present > 0`
    InvalidWeights,
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateWordList(len) => write!(
                f,
                "Cannot score against a list of {len} word(s), at least 2 are needed"
            ),
            Self::InvalidWeights => f.write_str(
                "Weights must be finite with the correct weight above the present weight, and the present weight above 0",
            ),
        }
    }
}

impl std::error::Error for ScoreError {}

/// Sum of verdict weights for one record
///
/// # Examples
/// ```
/// use wordle_advisor::core::parse_feedback;
/// use wordle_advisor::solver::scoring::{ScoringWeights, score};
///
/// let record = parse_feedback("t! a? rx e! sx").unwrap();
/// assert!((score(&record, &ScoringWeights::default()) - 6.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn score(record: &Evaluation, weights: &ScoringWeights) -> f64 {
    record
        .iter()
        .map(|result| weights.weight(result.verdict))
        .sum()
}

/// Average score `word` earns as a guess against every other word in `words`
///
/// `words` is expected to contain `word`; the self-match contributes a perfect
/// score which is subtracted before averaging over the other `n - 1` words.
///
/// # Errors
/// Returns `ScoreError::DegenerateWordList` when `words` has fewer than 2 entries.
pub fn score_against(
    word: &Word,
    words: &[Word],
    weights: &ScoringWeights,
) -> Result<f64, ScoreError> {
    if words.len() <= 1 {
        return Err(ScoreError::DegenerateWordList(words.len()));
    }
    Ok(average_score(word, words, weights))
}

/// Unchecked body of `score_against`; callers guarantee `words.len() >= 2`
pub(crate) fn average_score(word: &Word, words: &[Word], weights: &ScoringWeights) -> f64 {
    let total: f64 = words
        .iter()
        .map(|secret| score(&Evaluation::evaluate(secret, word), weights))
        .sum();

    (total - weights.perfect()) / (words.len() - 1) as f64
}

/// Score every word against the whole list, in parallel
///
/// Results keep the input order.
///
/// # Errors
/// Returns `ScoreError::DegenerateWordList` when `words` has fewer than 2 entries.
pub fn rank_words<'a>(
    words: &'a [Word],
    weights: &ScoringWeights,
) -> Result<Vec<(&'a Word, f64)>, ScoreError> {
    rank_words_with(words, weights, || {})
}

/// Like `rank_words`, calling `on_scored` after each word (used for progress display)
///
/// # Errors
/// Returns `ScoreError::DegenerateWordList` when `words` has fewer than 2 entries.
pub fn rank_words_with<'a, F>(
    words: &'a [Word],
    weights: &ScoringWeights,
    on_scored: F,
) -> Result<Vec<(&'a Word, f64)>, ScoreError>
where
    F: Fn() + Sync,
{
    if words.len() <= 1 {
        return Err(ScoreError::DegenerateWordList(words.len()));
    }

    Ok(words
        .par_iter()
        .map(|word| {
            let value = average_score(word, words, weights);
            on_scored();
            (word, value)
        })
        .collect())
}

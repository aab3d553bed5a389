//! Guess recommendation

use super::filter::filter_candidates;
use super::scoring::{ScoringWeights, average_score};
use crate::core::{History, Word};
use rayon::prelude::*;

/// Default opening guess used by the interactive shells
pub const DEFAULT_OPENER: &str = "TARES";

/// Recommends the next guess from a fixed word list
///
/// Candidates are the words consistent with the history; each candidate is scored
/// against the FULL word list so that its global discriminating power is kept.
pub struct Recommender<'a> {
    words: &'a [Word],
    weights: ScoringWeights,
    opener: Option<&'a Word>,
}

impl<'a> Recommender<'a> {
    /// Create a recommender over `words`
    #[must_use]
    pub const fn new(words: &'a [Word], weights: ScoringWeights) -> Self {
        Self {
            words,
            weights,
            opener: None,
        }
    }

    /// Use `opener` as the first suggestion when it is part of the word list
    ///
    /// The first recommendation is the most expensive one (every word scored against
    /// every word), so the shells start from a precomputed opener instead.
    #[must_use]
    pub fn with_opener(mut self, opener: &Word) -> Self {
        self.opener = self.words.iter().find(|w| *w == opener);
        if self.opener.is_none() {
            log::warn!("opener {opener} is not in the word list, it will be computed instead");
        }
        self
    }

    #[must_use]
    pub const fn words(&self) -> &'a [Word] {
        self.words
    }

    #[must_use]
    pub const fn opener(&self) -> Option<&'a Word> {
        self.opener
    }

    /// Best guess for the given history, or `None` when no word is consistent with it
    ///
    /// Ties go to the candidate that comes first in word-list order.
    #[must_use]
    pub fn recommend(&self, history: &History) -> Option<&'a Word> {
        self.recommend_scored(history).map(|(word, _)| word)
    }

    /// Like `recommend`, also returning the winning score
    ///
    /// The score is `None` when scoring was skipped because a single candidate was left.
    #[must_use]
    pub fn recommend_scored(&self, history: &History) -> Option<(&'a Word, Option<f64>)> {
        let candidates = filter_candidates(self.words, history);

        match candidates.as_slice() {
            [] => {
                log::debug!("no candidates left after {} records", history.len());
                None
            }
            // A lone candidate needs no scoring; this also covers one-word lists,
            // which cannot be scored at all.
            [only] => Some((*only, None)),
            _ => {
                // Parallel scoring, collected in candidate order
                let scores: Vec<f64> = candidates
                    .par_iter()
                    .map(|candidate| average_score(candidate, self.words, &self.weights))
                    .collect();

                let (best, best_score) = first_maximum(&candidates, &scores)?;
                log::debug!(
                    "recommending {best} (score {best_score:.3}) out of {} candidates",
                    candidates.len()
                );
                Some((best, Some(best_score)))
            }
        }
    }

    /// Opener for an empty history, otherwise `recommend`
    #[must_use]
    pub fn suggest(&self, history: &History) -> Option<&'a Word> {
        match self.opener {
            Some(opener) if history.is_empty() => Some(opener),
            _ => self.recommend(history),
        }
    }

    /// Words consistent with the history, in word-list order
    #[must_use]
    pub fn candidates(&self, history: &History) -> Vec<&'a Word> {
        filter_candidates(self.words, history)
    }

    /// Count how many words are consistent with the history
    #[must_use]
    pub fn count_candidates(&self, history: &History) -> usize {
        self.candidates(history).len()
    }
}

/// Highest score, keeping the earliest entry on ties
fn first_maximum<'a>(candidates: &[&'a Word], scores: &[f64]) -> Option<(&'a Word, f64)> {
    candidates
        .iter()
        .zip(scores)
        .fold(None, |best, (&word, &value)| match best {
            Some((_, best_value)) if value <= best_value => best,
            _ => Some((word, value)),
        })
}

//! Rank every word in the list by its score against the whole list

use crate::core::Word;
use crate::solver::scoring::rank_words_with;
use crate::solver::{ScoreError, ScoringWeights};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Scores for the whole list, best first
#[derive(Debug, Clone)]
pub struct RankResult {
    /// Ties keep word-list order
    pub ranking: Vec<(Word, f64)>,
    pub duration: Duration,
}

impl RankResult {
    /// The `n` best words
    #[must_use]
    pub fn top(&self, n: usize) -> &[(Word, f64)] {
        &self.ranking[..n.min(self.ranking.len())]
    }

    /// The `n` worst words, still ordered best first
    #[must_use]
    pub fn bottom(&self, n: usize) -> &[(Word, f64)] {
        let start = self.ranking.len().saturating_sub(n);
        &self.ranking[start..]
    }

    /// All scores, best first
    #[must_use]
    pub fn scores(&self) -> Vec<f64> {
        self.ranking.iter().map(|(_, score)| *score).collect()
    }
}

/// Score every word against the whole list
///
/// A progress bar is drawn on stderr when `show_progress` is set.
///
/// # Errors
///
/// Returns `ScoreError::DegenerateWordList` when the list has fewer than 2 words.
pub fn rank_all(
    words: &[Word],
    weights: &ScoringWeights,
    show_progress: bool,
) -> Result<RankResult, ScoreError> {
    let pb = if show_progress {
        ProgressBar::new(words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("scoring");

    let start = Instant::now();
    let scored = rank_words_with(words, weights, || pb.inc(1));
    pb.finish_and_clear();
    let scored = scored?;

    let mut ranking: Vec<(Word, f64)> = scored
        .into_iter()
        .map(|(word, score)| (word.clone(), score))
        .collect();
    // Stable sort, so equal scores stay in word-list order
    ranking.sort_by(|a, b| b.1.total_cmp(&a.1));

    let duration = start.elapsed();
    log::info!("ranked {} words in {duration:.2?}", ranking.len());

    Ok(RankResult { ranking, duration })
}

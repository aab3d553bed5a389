//! One-shot recommendation from a list of feedback strings

use crate::core::{FeedbackError, History, Word, parse_feedback};
use crate::solver::Recommender;

/// Number of remaining candidates included in the result
const SAMPLE_SIZE: usize = 10;

/// Result of a one-shot recommendation
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendResult {
    pub history: History,
    /// `None` when no word is consistent with the feedback
    pub recommendation: Option<Word>,
    /// `None` when a single candidate was left and scoring was skipped
    pub score: Option<f64>,
    pub candidate_count: usize,
    /// The first few remaining candidates, in word-list order
    pub sample: Vec<Word>,
}

/// Parse every feedback string, in order, into a history
///
/// # Errors
///
/// Returns the first `FeedbackError` encountered.
pub fn history_from_feedback<S: AsRef<str>>(feedback: &[S]) -> Result<History, FeedbackError> {
    feedback.iter().map(|f| parse_feedback(f.as_ref())).collect()
}

/// Recommend the next guess given the feedback received so far
///
/// With no feedback the recommender's opener is returned when it has one.
///
/// # Errors
///
/// Returns `FeedbackError` if any feedback string is malformed.
pub fn recommend_next<S: AsRef<str>>(
    recommender: &Recommender<'_>,
    feedback: &[S],
) -> Result<RecommendResult, FeedbackError> {
    let history = history_from_feedback(feedback)?;
    let candidates = recommender.candidates(&history);

    let (recommendation, score) = match recommender.opener() {
        Some(opener) if history.is_empty() => (Some(opener), None),
        _ => recommender
            .recommend_scored(&history)
            .map_or((None, None), |(word, score)| (Some(word), score)),
    };

    log::info!(
        "{} feedback records leave {} candidates",
        history.len(),
        candidates.len()
    );

    Ok(RecommendResult {
        recommendation: recommendation.cloned(),
        score,
        candidate_count: candidates.len(),
        sample: candidates.into_iter().take(SAMPLE_SIZE).cloned().collect(),
        history,
    })
}

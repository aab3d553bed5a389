//! One-shot evaluation of a guess against a known secret

use crate::core::{Evaluation, WordError};
use crate::solver::{ScoringWeights, score};

/// Result of evaluating a guess
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluateResult {
    pub secret: String,
    pub evaluation: Evaluation,
    pub score: f64,
}

/// Evaluate `guess` against `secret` and score the outcome
///
/// # Errors
///
/// Returns `WordError` if either word is not a valid five-letter word.
pub fn evaluate_guess(
    secret: &str,
    guess: &str,
    weights: &ScoringWeights,
) -> Result<EvaluateResult, WordError> {
    let evaluation = Evaluation::evaluate_str(secret, guess)?;

    Ok(EvaluateResult {
        secret: secret.to_uppercase(),
        evaluation,
        score: score(&evaluation, weights),
    })
}

//! Parsing typed feedback into an `Evaluation`
//!
//! The accepted format is one letter followed by one indicator per position:
//! `!` correct, `?` present, `x` absent. Whitespace is ignored, so
//! `t! a? rx e! sx` and `t!a?rxe!sx` are equivalent.

use super::evaluation::{Evaluation, LetterResult};
use super::verdict::Verdict;
use super::word::WORD_LENGTH;
use std::fmt;
use std::str::FromStr;

/// Error type for malformed feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    /// Number of letter/indicator pairs is not exactly 5
    InvalidLength(usize),
    /// A letter slot held something other than A-Z
    InvalidLetter(char),
    /// An indicator slot held something other than `!`, `?` or `x`
    InvalidVerdictSymbol(char),
    /// Input ended right after a letter
    MissingVerdict(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(pairs) => write!(
                f,
                "Feedback must describe exactly {WORD_LENGTH} letters, got {pairs}"
            ),
            Self::InvalidLetter(ch) => write!(f, "'{ch}' is not a letter"),
            Self::InvalidVerdictSymbol(ch) => write!(
                f,
                "'{ch}' is not a valid indicator (use ! for correct, ? for wrong spot, x for absent)"
            ),
            Self::MissingVerdict(ch) => write!(f, "Letter '{ch}' has no indicator"),
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Parse feedback such as `t! a? rx e! sx`
///
/// # Errors
/// Returns `FeedbackError` describing the first problem found.
///
/// # Examples
/// ```
/// use wordle_advisor::core::{Verdict, parse_feedback};
///
/// let evaluation = parse_feedback("t! a? rx e! sx").unwrap();
/// assert_eq!(evaluation.guess(), "TARES");
/// assert_eq!(evaluation.results()[1].verdict, Verdict::Present);
/// ```
pub fn parse_feedback(input: &str) -> Result<Evaluation, FeedbackError> {
    let mut chars = input.chars().filter(|c| !c.is_whitespace());
    let mut results = Vec::with_capacity(WORD_LENGTH);

    while let Some(letter) = chars.next() {
        if !letter.is_ascii_alphabetic() {
            return Err(FeedbackError::InvalidLetter(letter));
        }
        let symbol = chars.next().ok_or(FeedbackError::MissingVerdict(letter))?;
        let verdict =
            Verdict::from_symbol(symbol).ok_or(FeedbackError::InvalidVerdictSymbol(symbol))?;
        results.push(LetterResult::new(letter.to_ascii_uppercase() as u8, verdict));
    }

    let pairs = results.len();
    let results: [LetterResult; WORD_LENGTH] = results
        .try_into()
        .map_err(|_| FeedbackError::InvalidLength(pairs))?;

    Ok(Evaluation::new(results))
}

impl FromStr for Evaluation {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_feedback(s)
    }
}

//! Core domain types for the word game
//!
//! Words, verdicts, evaluations and the session history. Everything here is pure
//! and performs no I/O.

mod evaluation;
mod feedback;
mod history;
mod verdict;
mod word;

pub use evaluation::{Evaluation, LetterResult};
pub use feedback::{FeedbackError, parse_feedback};
pub use history::History;
pub use verdict::Verdict;
pub use word::{WORD_LENGTH, Word, WordError};

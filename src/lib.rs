//! Wordle Advisor
//!
//! A five-letter word game engine: evaluates guesses with correct duplicate-letter
//! handling, filters candidates from accumulated feedback and recommends the next
//! guess by scoring every candidate against the whole word list.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_advisor::core::{Evaluation, History, Word};
//! use wordle_advisor::solver::{Recommender, ScoringWeights};
//! use wordle_advisor::wordlists::loader::words_from_slice;
//!
//! let words = words_from_slice(&["crane", "slate", "trace", "fjord"]);
//! let secret = Word::new("trace").unwrap();
//!
//! let mut history = History::new();
//! history.push(Evaluation::evaluate(&secret, &Word::new("crane").unwrap()));
//! assert_eq!(history.last().unwrap().to_feedback_string(), "c? r! a! nx e!");
//!
//! let recommender = Recommender::new(&words, ScoringWeights::default());
//! assert_eq!(recommender.recommend(&history), Some(&words[2]));
//! ```

// Core domain types
pub mod core;

// Filtering, scoring and recommendation
pub mod solver;

// Word lists
pub mod wordlists;

// Runtime settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

//! Candidate filtering, scoring and guess recommendation

pub mod filter;
mod recommender;
pub mod scoring;

pub use filter::{Constraint, filter_candidates};
pub use recommender::{DEFAULT_OPENER, Recommender};
pub use scoring::{ScoreError, ScoringWeights, rank_words, score, score_against};

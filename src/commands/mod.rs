//! Command implementations

pub mod assist;
pub mod evaluate;
pub mod play;
pub mod rank;
pub mod recommend;

pub use assist::run_assist;
pub use evaluate::{EvaluateResult, evaluate_guess};
pub use play::{Game, run_play};
pub use rank::{RankResult, rank_all};
pub use recommend::{RecommendResult, history_from_feedback, recommend_next};

//! Word lists
//!
//! Provides the default list compiled into the binary, plus file loading.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};

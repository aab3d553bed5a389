//! Runtime configuration shared by the commands

use crate::core::{Word, WordError};
use crate::solver::{DEFAULT_OPENER, ScoringWeights};

/// Settings for the interactive and one-shot commands
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// First suggestion when no feedback has been given yet
    pub opener: Word,
    pub weights: ScoringWeights,
    /// Maximum number of guesses in a played game; `None` means unlimited
    pub max_guesses: Option<usize>,
    /// Emit ANSI colors
    pub color: bool,
}

impl AdvisorConfig {
    /// Build a configuration, validating the opener
    ///
    /// # Errors
    /// Returns `WordError` if `opener` is not a valid five-letter word.
    pub fn new(opener: &str, weights: ScoringWeights) -> Result<Self, WordError> {
        Ok(Self {
            opener: Word::new(opener)?,
            weights,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn with_max_guesses(mut self, max_guesses: Option<usize>) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            opener: Word::new(DEFAULT_OPENER).expect("default opener is a valid word"),
            weights: ScoringWeights::default(),
            max_guesses: None,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AdvisorConfig::default();
        assert_eq!(config.opener.text(), "TARES");
        assert_eq!(config.weights, ScoringWeights::default());
        assert_eq!(config.max_guesses, None);
        assert!(config.color);
    }

    #[test]
    fn custom_opener_is_normalized() {
        let config = AdvisorConfig::new("crane", ScoringWeights::new(3.0, 1.0)).unwrap();
        assert_eq!(config.opener.text(), "CRANE");
        assert!((config.weights.correct - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_opener_rejected() {
        assert_eq!(
            AdvisorConfig::new("cranes", ScoringWeights::default()).unwrap_err(),
            WordError::InvalidLength(6)
        );
    }

    #[test]
    fn builder_setters() {
        let config = AdvisorConfig::default()
            .with_max_guesses(Some(6))
            .with_color(false);
        assert_eq!(config.max_guesses, Some(6));
        assert!(!config.color);
    }
}

//! Per-letter verdicts

use std::fmt;

/// Outcome for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Same letter at the same position as the secret
    Correct,
    /// Letter occurs in the secret, but not at this position
    Present,
    /// Letter does not occur in the secret beyond occurrences already accounted for
    Absent,
}

impl Verdict {
    /// All verdicts, best first
    pub const ALL: [Self; 3] = [Self::Correct, Self::Present, Self::Absent];

    /// Decode a feedback indicator: `!` correct, `?` present, `x`/`X` absent
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '!' => Some(Self::Correct),
            '?' => Some(Self::Present),
            'x' | 'X' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Feedback indicator for this verdict
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => '!',
            Self::Present => '?',
            Self::Absent => 'x',
        }
    }

    /// Square emoji, as shared on social media
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for verdict in Verdict::ALL {
            assert_eq!(Verdict::from_symbol(verdict.symbol()), Some(verdict));
        }
    }

    #[test]
    fn uppercase_x_is_absent() {
        assert_eq!(Verdict::from_symbol('X'), Some(Verdict::Absent));
    }

    #[test]
    fn unknown_symbols_rejected() {
        for symbol in ['.', 'g', 'y', '-', ' '] {
            assert_eq!(Verdict::from_symbol(symbol), None);
        }
    }
}

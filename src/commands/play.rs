//! Play mode
//!
//! A secret is drawn from the word list and the player guesses until they find it.
//! An empty line asks the advisor for a recommendation based on the feedback so far.

use crate::config::AdvisorConfig;
use crate::core::{Evaluation, History, WORD_LENGTH, Word, WordError};
use crate::output::formatters::colorize_evaluation;
use crate::solver::Recommender;
use anyhow::{Context, Result};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::io::{BufRead, Write};

/// State of a single game
#[derive(Debug, Clone)]
pub struct Game {
    secret: Word,
    history: History,
}

impl Game {
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self {
            secret,
            history: History::new(),
        }
    }

    /// Start a game with a secret drawn from `words` using `rng`
    ///
    /// Returns `None` when `words` is empty.
    pub fn random<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Option<Self> {
        words.choose(rng).cloned().map(Self::new)
    }

    /// Evaluate a guess against the secret and record it
    ///
    /// # Errors
    /// Returns `WordError` if `guess` is not a valid five-letter word; the history is
    /// left untouched in that case.
    pub fn guess(&mut self, guess: &str) -> Result<Evaluation, WordError> {
        let guess = Word::new(guess)?;
        let evaluation = Evaluation::evaluate(&self.secret, &guess);
        self.history.push(evaluation);
        Ok(evaluation)
    }

    /// Take back the most recent guess
    pub fn undo(&mut self) -> Option<Evaluation> {
        self.history.undo()
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.history.last().is_some_and(Evaluation::is_solved)
    }

    #[must_use]
    pub fn guesses_made(&self) -> usize {
        self.history.len()
    }
}

/// Run play mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the word list is
/// empty.
pub fn run_play<R: Rng + ?Sized>(
    recommender: &Recommender<'_>,
    config: &AdvisorConfig,
    rng: &mut R,
) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_play_with(recommender, config, rng, stdin.lock(), stdout.lock())
}

/// Run play mode over arbitrary input and output streams
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the word list is
/// empty.
pub fn run_play_with<R, I, O>(
    recommender: &Recommender<'_>,
    config: &AdvisorConfig,
    rng: &mut R,
    mut input: I,
    mut out: O,
) -> Result<()>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    let mut game =
        Game::random(recommender.words(), rng).context("cannot play with an empty word list")?;
    log::info!("new game with {} possible secrets", recommender.words().len());

    writeln!(
        out,
        "Guess the {WORD_LENGTH}-letter word. Empty line for a recommendation, 'undo' to take back a guess, 'quit' to give up."
    )?;

    loop {
        write!(out, "guess: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let line = line.trim();

        match line.to_lowercase().as_str() {
            "" => {
                let recommendation = recommender.recommend(game.history());
                match recommendation {
                    Some(word) => writeln!(out, "\trecommendation: {word}")?,
                    None => writeln!(out, "\trecommendation: none, no word matches the feedback")?,
                }
                continue;
            }
            "quit" | "q" | "exit" => {
                writeln!(out, "The word was {}", game.secret())?;
                break;
            }
            "undo" | "u" | "back" => {
                if game.undo().is_none() {
                    writeln!(out, "Nothing to undo!")?;
                }
            }
            _ => {
                if let Err(e) = game.guess(line) {
                    match e {
                        WordError::InvalidLength(_) => writeln!(out, "learn to count: {e}")?,
                        WordError::NonAscii | WordError::InvalidCharacters => {
                            writeln!(out, "{e}")?;
                        }
                    }
                    continue;
                }
            }
        }

        for record in game.history() {
            writeln!(out, "{}", colorize_evaluation(record))?;
        }

        if game.is_won() {
            let turns = game.guesses_made();
            log::info!("solved {} in {turns} guesses", game.secret());
            writeln!(
                out,
                "Solved in {turns} {}!",
                if turns == 1 { "guess" } else { "guesses" }
            )?;
            break;
        }

        if config
            .max_guesses
            .is_some_and(|limit| game.guesses_made() >= limit)
        {
            writeln!(out, "Out of guesses! The word was {}", game.secret())?;
            break;
        }
    }

    Ok(())
}

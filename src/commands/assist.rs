//! Assist mode
//!
//! The advisor suggests a guess, the user plays it in a real game and types back
//! the feedback they received (`t! a? rx e! sx`). Repeats until solved.

use crate::core::{History, parse_feedback};
use crate::output::formatters::colorize_evaluation;
use crate::solver::Recommender;
use anyhow::Result;
use std::io::{BufRead, Write};

/// Candidate lists up to this size are printed in full
const SHOW_CANDIDATES_UP_TO: usize = 10;

/// Run assist mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_assist(recommender: &Recommender<'_>) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_assist_with(recommender, stdin.lock(), stdout.lock())
}

/// Run assist mode over arbitrary input and output streams
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_assist_with<I, O>(recommender: &Recommender<'_>, mut input: I, mut out: O) -> Result<()>
where
    I: BufRead,
    O: Write,
{
    writeln!(out, "Enter feedback as letter/verdict pairs: ! correct, ? present, x absent.")?;
    writeln!(out, "Example: t! a? rx e! sx")?;
    writeln!(out, "Commands: 'undo' to take back feedback, 'new' to start over, 'quit' to exit")?;

    let mut history = History::new();

    loop {
        let candidates = recommender.candidates(&history);
        if candidates.is_empty() {
            writeln!(out, "no matches, 'undo' the last feedback or start a 'new' game")?;
        } else {
            match recommender.suggest(&history) {
                Some(word) => writeln!(out, "suggestion: {word}")?,
                None => writeln!(out, "no matches")?,
            }
            let remaining = candidates.len();
            writeln!(
                out,
                "{remaining} {} remaining",
                if remaining == 1 { "candidate" } else { "candidates" }
            )?;
            if candidates.len() <= SHOW_CANDIDATES_UP_TO {
                let listed: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
                writeln!(out, "  {}", listed.join(" "))?;
            }
        }

        let line = loop {
            write!(out, "feedback: ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(());
            }
            let line = line.trim().to_string();
            if !line.is_empty() {
                break line;
            }
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(()),
            "back" | "undo" | "u" => {
                if history.undo().is_none() {
                    writeln!(out, "Nothing to undo!")?;
                }
            }
            "new" | "n" => {
                history.clear();
                writeln!(out, "New game started")?;
            }
            _ => match parse_feedback(&line) {
                Ok(record) => {
                    history.push(record);
                    for entry in &history {
                        writeln!(out, "{}", colorize_evaluation(entry))?;
                    }
                    if record.is_solved() {
                        let turns = history.len();
                        log::info!("assisted solve of {} in {turns} guesses", record.guess());
                        writeln!(
                            out,
                            "Solved in {turns} {}! Starting a new game.",
                            if turns == 1 { "guess" } else { "guesses" }
                        )?;
                        history.clear();
                    }
                }
                Err(e) => writeln!(out, "invalid feedback: {e}")?,
            },
        }
    }
}

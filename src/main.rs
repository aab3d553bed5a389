//! Wordle Advisor - CLI
//!
//! Play against a random secret, get advice for a game played elsewhere, or query
//! the scoring engine directly.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use wordle_advisor::{
    commands::{evaluate_guess, rank_all, recommend_next, run_assist, run_play},
    config::AdvisorConfig,
    core::Word,
    output::{print_evaluate_result, print_rank_result, print_recommend_result},
    solver::{DEFAULT_OPENER, Recommender, ScoringWeights},
    wordlists::{
        DEFAULT_WORDS,
        loader::{load_from_files, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Five-letter word game with a guess advisor",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (one word per line, optional tab-separated trailing field);
    /// repeat to merge several lists. Defaults to the embedded list
    #[arg(short = 'w', long, global = true)]
    wordlist: Vec<PathBuf>,

    /// First guess suggested when no feedback has been given
    #[arg(long, global = true, default_value = DEFAULT_OPENER)]
    opener: String,

    /// Weight of a letter in the right spot
    #[arg(long, global = true, default_value_t = ScoringWeights::DEFAULT_CORRECT)]
    correct_weight: f64,

    /// Weight of a letter in the word but in the wrong spot
    #[arg(long, global = true, default_value_t = ScoringWeights::DEFAULT_PRESENT)]
    present_weight: f64,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess a random secret word (default)
    Play {
        /// Seed for choosing the secret, for reproducible games
        #[arg(long)]
        seed: Option<u64>,

        /// Give up after this many guesses
        #[arg(short, long)]
        max_guesses: Option<usize>,
    },

    /// Get suggestions for a game played elsewhere by typing back its feedback
    Assist,

    /// Evaluate a guess against a known secret
    Evaluate {
        /// The secret word
        secret: String,

        /// The guessed word
        guess: String,
    },

    /// Recommend the next guess from feedback received so far
    Recommend {
        /// Feedback for one guess, e.g. "t! a? rx e! sx"; repeat in guess order
        #[arg(short, long)]
        feedback: Vec<String>,
    },

    /// Score every word against the whole list
    Rank {
        /// Number of best and worst words to show
        #[arg(short, long, default_value = "10")]
        top: usize,

        /// Number of histogram bins
        #[arg(short, long, default_value = "20")]
        bins: usize,
    },
}

/// Load the word list selected by `-w`, or the embedded one
fn load_words(paths: &[PathBuf]) -> Result<Vec<Word>> {
    let words = if paths.is_empty() {
        words_from_slice(DEFAULT_WORDS)
    } else {
        load_from_files(paths).context("failed to read word list")?
    };

    if words.is_empty() {
        anyhow::bail!("word list contains no valid five-letter words");
    }
    log::info!("using {} words", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let weights = ScoringWeights::checked(cli.correct_weight, cli.present_weight)
        .context("invalid scoring weights")?;
    let config = AdvisorConfig::new(&cli.opener, weights)
        .with_context(|| format!("invalid opener '{}'", cli.opener))?
        .with_color(!cli.no_color);
    if !config.color {
        colored::control::set_override(false);
    }

    let words = load_words(&cli.wordlist)?;
    let recommender = Recommender::new(&words, config.weights).with_opener(&config.opener);

    // Default to play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        seed: None,
        max_guesses: None,
    });

    match command {
        Commands::Play { seed, max_guesses } => {
            let config = config.with_max_guesses(max_guesses);
            match seed {
                Some(seed) => run_play(&recommender, &config, &mut StdRng::seed_from_u64(seed)),
                None => run_play(&recommender, &config, &mut rand::rng()),
            }
        }
        Commands::Assist => run_assist(&recommender),
        Commands::Evaluate { secret, guess } => {
            let result = evaluate_guess(&secret, &guess, &config.weights)
                .context("cannot evaluate guess")?;
            print_evaluate_result(&result);
            Ok(())
        }
        Commands::Recommend { feedback } => {
            let result =
                recommend_next(&recommender, &feedback).context("cannot parse feedback")?;
            print_recommend_result(&result);
            Ok(())
        }
        Commands::Rank { top, bins } => {
            let result = rank_all(&words, &config.weights, true)
                .context("cannot rank this word list")?;
            print_rank_result(&result, top, bins);
            Ok(())
        }
    }
}

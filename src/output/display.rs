//! Display functions for command results

use super::formatters::{colorize_evaluation, create_progress_bar, histogram};
use crate::commands::{EvaluateResult, RankResult, RecommendResult};
use colored::Colorize;

/// Print the result of evaluating a guess
pub fn print_evaluate_result(result: &EvaluateResult) {
    println!("\nSecret: {}", result.secret.bright_yellow().bold());
    println!("  {}", colorize_evaluation(&result.evaluation));
    println!("  {}", result.evaluation.to_emoji());
    println!("  Feedback: {}", result.evaluation.to_feedback_string());
    println!(
        "  Score:    {}",
        format!("{:.2}", result.score).bright_cyan()
    );
    if result.evaluation.is_solved() {
        println!("{}", "✅ Solved!".green().bold());
    }
}

/// Print the result of a one-shot recommendation
pub fn print_recommend_result(result: &RecommendResult) {
    if !result.history.is_empty() {
        println!();
        for (i, record) in result.history.iter().enumerate() {
            println!(
                "  {}. {}",
                (i + 1).to_string().bright_black(),
                colorize_evaluation(record)
            );
        }
    }

    println!("\n{} candidates remaining", result.candidate_count);

    match &result.recommendation {
        Some(word) => {
            print!(
                "📊 Recommended guess: {}",
                word.text().bright_yellow().bold()
            );
            match result.score {
                Some(score) => println!(" (score {score:.3})"),
                None => println!(),
            }
        }
        None => println!("{}", "❌ no matches, check the feedback".red().bold()),
    }

    if !result.sample.is_empty() && result.candidate_count <= result.sample.len() {
        println!("\nRemaining candidates:");
        for word in &result.sample {
            println!("  • {word}");
        }
    } else if !result.sample.is_empty() {
        let listed: Vec<&str> = result.sample.iter().map(|w| w.text()).collect();
        println!("\nFirst candidates: {} …", listed.join(" "));
    }
}

/// Print the top and bottom of a ranking plus a score histogram
pub fn print_rank_result(result: &RankResult, top: usize, bins: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD RANKING".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\nScored {} words in {:.2}s",
        result.ranking.len(),
        result.duration.as_secs_f64()
    );

    let max_score = result.ranking.first().map_or(0.0, |(_, score)| *score);

    println!("\n🏆 {}", format!("Top {top}:").bright_cyan().bold());
    for (i, (word, score)) in result.top(top).iter().enumerate() {
        println!(
            "  {:>4}. {} {} {score:.4}",
            i + 1,
            word.text().bright_white().bold(),
            create_progress_bar(*score, max_score, 30).green()
        );
    }

    let bottom = result.bottom(top);
    let offset = result.ranking.len() - bottom.len();
    println!("\n🐢 {}", format!("Bottom {top}:").bright_cyan().bold());
    for (i, (word, score)) in bottom.iter().enumerate() {
        println!(
            "  {:>4}. {} {} {score:.4}",
            offset + i + 1,
            word.text(),
            create_progress_bar(*score, max_score, 30).yellow()
        );
    }

    let buckets = histogram(&result.scores(), bins);
    let tallest = buckets.iter().map(|b| b.count).max().unwrap_or(0);

    println!("\n📈 {}", "Score distribution:".bright_cyan().bold());
    for bucket in &buckets {
        println!(
            "  {:7.3} – {:7.3} {} {:5}",
            bucket.start,
            bucket.end,
            create_progress_bar(bucket.count as f64, tallest as f64, 40).green(),
            bucket.count
        );
    }
}

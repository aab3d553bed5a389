//! String builders for terminal output

use crate::core::{Evaluation, Verdict};
use colored::Colorize;

/// Render an evaluation as spaced letters colored by verdict, e.g. `T E P E E`
///
/// Colors are dropped automatically when `colored` is told not to emit them.
#[must_use]
pub fn colorize_evaluation(evaluation: &Evaluation) -> String {
    evaluation
        .iter()
        .map(|result| {
            let letter = char::from(result.letter).to_string();
            match result.verdict {
                Verdict::Correct => letter.green().bold().to_string(),
                Verdict::Present => letter.yellow().bold().to_string(),
                Verdict::Absent => letter.bright_black().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fixed-width bar filled in proportion to `value / max`
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let empty = width.saturating_sub(filled);

    format!("{}{}", "█".repeat(width - empty), "░".repeat(empty))
}

/// One equal-width bucket of a histogram
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Split `values` into `bins` equal-width buckets spanning their min and max
///
/// The maximum lands in the last bucket. Identical values collapse into a single
/// bucket; no values or zero bins produce no buckets.
#[must_use]
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if (max - min).abs() < f64::EPSILON {
        return vec![HistogramBin {
            start: min,
            end: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut result: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            start: (i as f64).mul_add(width, min),
            end: ((i + 1) as f64).mul_add(width, min),
            count: 0,
        })
        .collect();

    for &value in values {
        let index = (((value - min) / width) as usize).min(bins - 1);
        result[index].count += 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorize_evaluation_keeps_letters_in_order() {
        colored::control::set_override(false);
        let evaluation = Evaluation::evaluate_str("elder", "tepee").unwrap();
        assert_eq!(colorize_evaluation(&evaluation), "T E P E E");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
        // overflow is clamped
        assert_eq!(create_progress_bar(250.0, 100.0, 4), "████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn histogram_counts_every_value() {
        let values = [0.0, 0.5, 1.0, 1.5, 2.0, 4.0];
        let bins = histogram(&values, 4);

        assert_eq!(bins.len(), 4);
        assert_eq!(
            bins.iter().map(|b| b.count).collect::<Vec<_>>(),
            [2, 2, 1, 1]
        );
        assert!((bins[0].start - 0.0).abs() < f64::EPSILON);
        assert!((bins[3].end - 4.0).abs() < 1e-9);
    }

    #[test]
    fn histogram_degenerate_inputs() {
        assert!(histogram(&[], 5).is_empty());
        assert!(histogram(&[1.0, 2.0], 0).is_empty());

        let flat = histogram(&[2.0, 2.0, 2.0], 5);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].count, 3);
    }
}

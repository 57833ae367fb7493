//! Formatting utilities for terminal output

use crate::game::MAX_ROWS;
use std::time::Duration;

/// Hearts for the attempts left, full first
#[must_use]
pub fn hearts(remaining: usize) -> String {
    let remaining = remaining.min(MAX_ROWS);
    format!("{}{}", "❤️".repeat(remaining), "🤍".repeat(MAX_ROWS - remaining))
}

/// Upper-case a word with spaces between letters, padding blanks with `_`
#[must_use]
pub fn spaced_letters(text: &str, width: usize) -> String {
    let mut letters: Vec<String> = text
        .chars()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect();
    while letters.len() < width {
        letters.push("_".to_string());
    }
    letters.join(" ")
}

/// Seconds with one decimal, as shown on the result card
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    format!("{:.1}s", duration.as_secs_f64())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

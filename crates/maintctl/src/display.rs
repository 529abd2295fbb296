//! Styled terminal output helpers.
//!
//! Centralized so command modules never scatter raw styling.

use console::style;

pub fn bold(text: &str) -> String {
    style(text).bold().to_string()
}

pub fn dimmed(text: &str) -> String {
    style(text).dim().to_string()
}

pub fn success(text: &str) -> String {
    format!("{} {}", style("✓").green(), text)
}

pub fn error(text: &str) -> String {
    format!("{} {}", style("✗").red(), text)
}

pub fn warning(text: &str) -> String {
    format!("{} {}", style("⚠").yellow(), text)
}

/// Fixed-width text bar for one-shot output (watch uses indicatif instead).
pub fn progress_bar_line(percent: f64, width: usize) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!(
        "[{}{}] {:>5.1}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        clamped
    )
}

//! Console output for the CLI. Diagnostics go through `tracing` instead.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub fn print_success(message: &str) {
    println!("✓ {}", message);
}

pub fn print_error(message: &str) {
    eprintln!("✗ {}", message);
}

pub fn print_info(message: &str) {
    println!("ℹ {}", message);
}

pub fn print_warning(message: &str) {
    eprintln!("⚠ {}", message);
}

/// Band label shown next to a trust score.
pub fn trust_band(score: u32) -> &'static str {
    match score {
        90.. => "excellent",
        70..=89 => "good",
        _ => "needs improvement",
    }
}

pub fn format_trust_score(score: u32) -> String {
    format!("{}/100 ({})", score, trust_band(score))
}

/// Steady-tick spinner on stderr. Hidden when stderr is not a terminal.
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.into());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

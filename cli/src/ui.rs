//! Shared terminal output helpers.
//!
//! Status lines go to stderr; stdout carries only command results.

use colored::Colorize;

pub mod symbols {
    /// Arrow for action/progress indicators
    pub const ARROW: &str = "→";
    /// Checkmark for success
    pub const SUCCESS: &str = "✓";
    /// Bullet point
    pub const BULLET: &str = "•";
}

/// Print a step header with the action arrow.
pub fn print_step(message: &str) {
    eprintln!("{} {}", symbols::ARROW.blue().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    eprintln!("{} {}", symbols::SUCCESS.green().bold(), message);
}

/// Print a dimmed, bulleted detail line.
pub fn print_detail(label: &str, value: &str) {
    eprintln!("  {} {}: {}", symbols::BULLET.dimmed(), label, value.cyan());
}

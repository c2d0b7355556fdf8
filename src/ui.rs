//! Styled status lines for the check log
//!
//! One tagged line per check: INFO when an apply action starts, DONE on
//! success, SKIP when the desired state already holds, FAIL on a recorded
//! failure. Styling degrades to plain text off-terminal.

use console::Style;

pub fn info(message: &str) {
    println!("{} {}", Style::new().cyan().bold().apply_to("INFO"), message);
}

pub fn done(message: &str) {
    println!("{} {}", Style::new().green().bold().apply_to("DONE"), message);
}

pub fn skip(message: &str) {
    println!("{} {}", Style::new().dim().bold().apply_to("SKIP"), message);
}

pub fn fail(message: &str) {
    println!("{} {}", Style::new().red().bold().apply_to("FAIL"), message);
}

/// Dimmed detail line, shown under a check in verbose mode
pub fn detail(message: &str) {
    println!("     {}", Style::new().dim().apply_to(message));
}

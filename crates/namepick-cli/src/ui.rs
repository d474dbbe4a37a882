//! Styling helpers for plain-terminal output.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Format a group heading.
#[must_use]
pub fn heading(text: &str, color: bool) -> String {
    if color {
        style(format!("== {text} ==")).bold().cyan().to_string()
    } else {
        format!("== {text} ==")
    }
}

/// Format a drawn name.
#[must_use]
pub fn picked(name: &str, color: bool) -> String {
    if color {
        style(name).green().bold().to_string()
    } else {
        name.to_string()
    }
}

/// Format a name that has already been drawn.
#[must_use]
pub fn chosen(name: &str, color: bool) -> String {
    if color {
        style(format!("{name} (picked)")).dim().to_string()
    } else {
        format!("{name} (picked)")
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

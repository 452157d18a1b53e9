//! Status messages for CLI output.

use crossterm::style::Stylize;

use super::quiet;

/// Print a success status to stderr (green) - suppressed in quiet mode
pub fn success(msg: &str) {
    if quiet::enabled() {
        return;
    }
    if quiet::is_interactive() {
        eprintln!("{}", msg.green());
    } else {
        eprintln!("{msg}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    if quiet::is_interactive() {
        eprintln!("{}", msg.red());
    } else {
        eprintln!("{msg}");
    }
}

pub fn generated(count: usize) {
    if count == 1 {
        success("Password generated.");
    } else {
        success(&format!("{count} passwords generated."));
    }
}

//! Centralized UI formatting and color utilities
//!
//! This module provides the colors and icons used by the appdocs CLI.

use colored::{ColoredString, Colorize};

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var("APPDOCS_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Icon for a passing check
pub fn pass_icon() -> ColoredString {
    "✓".green()
}

/// Icon for a failing check
pub fn fail_icon() -> ColoredString {
    "✗".red()
}

/// Color scheme for text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Red for errors/failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (app names, paths)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

/// Colors the lines of a mismatch report: `-` lines red, `+` lines green.
pub fn colorize_details(details: &str) -> String {
    details
        .lines()
        .map(|line| {
            let trimmed = line.trim_start();
            if trimmed.starts_with("- ") {
                colors::error(line).to_string()
            } else if trimmed.starts_with("+ ") {
                colors::success(line).to_string()
            } else if line.ends_with(':') && !line.starts_with(' ') {
                colors::heading(line).to_string()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

//! Centralized UI formatting and color utilities
//!
//! This module provides a unified interface for status colors, icons, and
//! formatting patterns used throughout the relcheck CLI.

use colored::{ColoredString, Colorize};

use crate::environment::EnvironmentStatus;
use crate::issue::Severity;
use crate::report::OverallStatus;

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var("RELCHECK_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Returns a colored icon for the given finding severity.
///
/// Icons:
/// - Critical/Error: ✗ (red)
/// - Warning: ⚠ (yellow)
/// - Info: ℹ (blue)
pub fn severity_icon(severity: Severity) -> ColoredString {
    match severity {
        Severity::Critical | Severity::Error => "✗".red(),
        Severity::Warning => "⚠".yellow(),
        Severity::Info => "ℹ".blue(),
    }
}

/// Returns a colored verdict label for the overall report status.
pub fn overall_label(status: OverallStatus) -> ColoredString {
    match status {
        OverallStatus::Ok => "READY".green().bold(),
        OverallStatus::Warnings => "READY (with warnings)".yellow().bold(),
        OverallStatus::Errors => "NOT READY".red().bold(),
        OverallStatus::CriticalErrors => "NOT READY (critical)".red().bold(),
    }
}

/// Returns a colored label for the environment phase status.
pub fn environment_label(status: EnvironmentStatus) -> ColoredString {
    match status {
        EnvironmentStatus::Ready => "ready".green(),
        EnvironmentStatus::HasIssues => "has issues".yellow(),
        EnvironmentStatus::NeedsSetup => "needs setup".red(),
    }
}

/// Color scheme for status-related text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success/completion
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for warnings
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Red for errors/failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (variable names, etc.)
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

/// Common text formatting patterns
pub mod format {
    /// Format a separator line for sections
    pub fn separator(width: usize) -> String {
        "─".repeat(width)
    }
}

//! Shared validation finding types: severity ladder, machine codes, issues.

use serde::Serialize;

/// Severity of a validation finding, in ascending blocking priority.
///
/// Variant order matters: deriving `Ord` lets "worst severity wins"
/// computations use `max` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARN"),
            Severity::Error => write!(f, "ERROR"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Machine-readable code identifying what kind of finding an [`Issue`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCode {
    /// A required variable has no value.
    MissingRequired,
    /// An optional variable has no value.
    MissingOptional,
    /// A value looks like an unmodified example placeholder.
    PlaceholderValue,
    /// A value failed its format check.
    ValidationFailed,
    /// A configuration file exists but could not be opened.
    ConfigReadError,
    /// A configuration file failed mid-scan.
    ConfigScanError,
    /// Referenced variables are not documented in the example file.
    MissingInEnvExample,
    /// Documented variables are never referenced by any config.
    UnusedInEnvExample,
    /// The example file itself could not be read.
    EnvExampleReadError,
}

/// A single validation finding.
///
/// `value` only ever holds a masked rendering of a variable's value; raw
/// secrets never leave the evaluation boundary.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub field: String,
    pub message: String,
    pub user_message: String,
    pub severity: Severity,
    pub code: IssueCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Issue {
    pub fn new(
        severity: Severity,
        code: IssueCode,
        field: impl Into<String>,
        message: impl Into<String>,
        user_message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            user_message: user_message.into(),
            severity,
            code,
            value: None,
        }
    }

    pub fn critical(
        code: IssueCode,
        field: impl Into<String>,
        message: impl Into<String>,
        user_message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Critical, code, field, message, user_message)
    }

    pub fn error(
        code: IssueCode,
        field: impl Into<String>,
        message: impl Into<String>,
        user_message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Error, code, field, message, user_message)
    }

    pub fn warning(
        code: IssueCode,
        field: impl Into<String>,
        message: impl Into<String>,
        user_message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Warning, code, field, message, user_message)
    }

    /// Attach a masked value to the finding.
    pub fn with_value(mut self, masked: impl Into<String>) -> Self {
        self.value = Some(masked.into());
        self
    }

    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

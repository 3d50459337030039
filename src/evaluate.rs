//! Per-variable rule evaluation: emptiness, placeholder detection, format
//! checks. Produces at most one issue per variable.

use crate::catalog::VarDef;
use crate::issue::{Issue, IssueCode, Severity};

/// Prefixes that mark a value as an unmodified example placeholder.
/// Matched case-insensitively against the start of the value.
const PLACEHOLDER_PREFIXES: [&str; 6] = ["your-", "xxxx", "example", "changeme", "todo", "replace"];

/// Mask a value for display. Values of 4 characters or fewer collapse to
/// `***`; longer values keep the first and last two characters. Operates on
/// characters, not bytes, so multibyte values never split a code point.
pub fn mask(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 4 {
        return "***".to_string();
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}

/// True when a non-empty value looks like an unmodified placeholder.
/// Anything under 3 characters is treated as one too.
fn is_placeholder(value: &str) -> bool {
    let lowered = value.to_lowercase();
    PLACEHOLDER_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
        || value.chars().count() < 3
}

/// Evaluate one variable's live value against its catalog definition.
///
/// Rules apply in order: emptiness, placeholder heuristic, then the
/// definition's format check. `None` means the value is accepted. Any
/// attached value is masked before the issue is built.
pub fn evaluate(def: &VarDef, value: &str) -> Option<Issue> {
    if value.is_empty() {
        return Some(if def.required {
            Issue::critical(
                IssueCode::MissingRequired,
                def.name,
                format!("{} is not set", def.name),
                format!("Set {}: {}", def.name, def.description),
            )
        } else {
            Issue::warning(
                IssueCode::MissingOptional,
                def.name,
                format!("{} is not set", def.name),
                format!("Set {} if needed: {}", def.name, def.description),
            )
        });
    }

    if is_placeholder(value) {
        return Some(
            Issue::warning(
                IssueCode::PlaceholderValue,
                def.name,
                format!("{} appears to contain a placeholder value", def.name),
                format!("Replace the placeholder in {} with a real value", def.name),
            )
            .with_value(mask(value)),
        );
    }

    if let Some(check) = def.check {
        if let Err(failure) = check.run(value) {
            let severity = if def.required {
                Severity::Critical
            } else {
                Severity::Error
            };
            return Some(
                Issue::new(
                    severity,
                    IssueCode::ValidationFailed,
                    def.name,
                    format!("{} failed its {} check: {}", def.name, check.name(), failure.message),
                    failure.user_message,
                )
                .with_value(mask(value)),
            );
        }
    }

    None
}

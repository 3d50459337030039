//! Reconciliation between variables referenced in configs and variables
//! documented in the example file.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::issue::{Issue, IssueCode};
use crate::scan::{extract_variables, ConfigAnalysis};

/// Matches documented `NAME=...` lines. Capture 1 is the variable name.
static EXAMPLE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z_][A-Z0-9_]*)=").expect("Invalid regex pattern"));

/// Collect the variable names documented in example-file content, skipping
/// blank lines and `#` comments.
fn documented_names(content: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(capture) = EXAMPLE_LINE.captures(line) {
            names.insert(capture[1].to_string());
        }
    }
    names
}

/// Scan the configs, then reconcile the referenced names against the
/// documented example file.
///
/// A missing or unreadable example file yields one error issue and empty
/// diff sets. Otherwise each non-empty diff yields exactly one aggregated
/// finding: an error for undocumented references, a warning for documented
/// names nothing references.
pub fn check_sync(example_file: &Path, config_files: &[PathBuf]) -> ConfigAnalysis {
    let mut analysis = extract_variables(config_files);

    let content = match fs::read_to_string(example_file) {
        Ok(content) => content,
        Err(e) => {
            analysis.issues.push(Issue::error(
                IssueCode::EnvExampleReadError,
                example_file.display().to_string(),
                format!("cannot read {}: {}", example_file.display(), e),
                format!(
                    "Create {} documenting the variables your release needs \
                     (relcheck example writes a starter)",
                    example_file.display()
                ),
            ));
            return analysis;
        }
    };

    let documented = documented_names(&content);

    analysis.missing_in_example = analysis
        .extracted_variables
        .iter()
        .filter(|name| !documented.contains(*name))
        .cloned()
        .collect();

    analysis.unused_in_example = documented
        .iter()
        .filter(|name| !analysis.extracted_variables.contains(name))
        .cloned()
        .collect();

    if !analysis.missing_in_example.is_empty() {
        let list = analysis.missing_in_example.join(", ");
        analysis.issues.push(Issue::error(
            IssueCode::MissingInEnvExample,
            example_file.display().to_string(),
            format!(
                "variables referenced in config but not documented: {}",
                list
            ),
            format!("Add {} to {}", list, example_file.display()),
        ));
    }

    if !analysis.unused_in_example.is_empty() {
        let list = analysis.unused_in_example.join(", ");
        analysis.warnings.push(Issue::warning(
            IssueCode::UnusedInEnvExample,
            example_file.display().to_string(),
            format!("variables documented but never referenced: {}", list),
            format!(
                "Remove {} from {} or reference them in your config",
                list,
                example_file.display()
            ),
        ));
    }

    analysis
}

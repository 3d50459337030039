//! Variable reference extraction from GoReleaser configuration files.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::defaults;
use crate::issue::{Issue, IssueCode};

/// Matches `{{ .Env.NAME }}` template lookups, tolerating interior
/// whitespace. Capture 1 is the variable name.
static ENV_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*\.Env\.([A-Z_][A-Z0-9_]*)\s*\}\}").expect("Invalid regex pattern")
});

/// What a scan (and the sync check that extends it) found.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigAnalysis {
    /// Files actually read, in scan order.
    pub config_files: Vec<String>,
    /// Referenced variable names, deduplicated and sorted.
    pub extracted_variables: Vec<String>,
    /// Referenced but not documented in the example file.
    pub missing_in_example: Vec<String>,
    /// Documented but never referenced by any scanned config.
    pub unused_in_example: Vec<String>,
    pub issues: Vec<Issue>,
    pub warnings: Vec<Issue>,
}

impl ConfigAnalysis {
    fn new() -> Self {
        Self {
            config_files: Vec::new(),
            extracted_variables: Vec::new(),
            missing_in_example: Vec::new(),
            unused_in_example: Vec::new(),
            issues: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// The conventional GoReleaser config filenames, used when the caller
/// names no files.
pub fn default_config_files() -> Vec<PathBuf> {
    defaults::CONFIG_FILES.iter().map(PathBuf::from).collect()
}

/// Extract `{{ .Env.* }}` references from the given files, or from the
/// default pair when `files` is empty.
///
/// An absent file is skipped silently. A file that cannot be opened or
/// fails mid-read becomes an issue, never an error. The extracted set is
/// deduplicated and sorted, so scan results do not depend on file order.
pub fn extract_variables(files: &[PathBuf]) -> ConfigAnalysis {
    let files = if files.is_empty() {
        default_config_files()
    } else {
        files.to_vec()
    };

    let mut analysis = ConfigAnalysis::new();
    let mut seen = BTreeSet::new();

    for path in &files {
        if !path.exists() {
            continue;
        }

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                analysis.issues.push(Issue::error(
                    IssueCode::ConfigReadError,
                    path.display().to_string(),
                    format!("cannot open {}: {}", path.display(), e),
                    format!("Fix permissions on {} or remove it", path.display()),
                ));
                continue;
            }
        };

        analysis.config_files.push(path.display().to_string());

        for line in BufReader::new(file).lines() {
            match line {
                Ok(line) => {
                    for capture in ENV_REF.captures_iter(&line) {
                        seen.insert(capture[1].to_string());
                    }
                }
                Err(e) => {
                    analysis.issues.push(Issue::error(
                        IssueCode::ConfigScanError,
                        path.display().to_string(),
                        format!("read failed while scanning {}: {}", path.display(), e),
                        format!("Check that {} is a readable text file", path.display()),
                    ));
                    break;
                }
            }
        }
    }

    analysis.extracted_variables = seen.into_iter().collect();
    analysis
}

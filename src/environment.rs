//! Environment validation walk: every catalog entry checked against the
//! live process environment, accumulated into a single result.
//!
//! # Doc Audit
//! - audited: 2026-08-12
//! - docs: reference/report.md
//! - ignore: false

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::{self, VarDef};
use crate::evaluate::{evaluate, mask};
use crate::issue::{Issue, IssueCode, Severity};

/// Readiness of the environment as a whole.
///
/// Variant order gives a promote-only ladder: `Ready` can move to
/// `HasIssues`, anything can move to `NeedsSetup`, nothing moves back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentStatus {
    Ready,
    HasIssues,
    NeedsSetup,
}

/// Per-variable entry in the validated-variables map.
#[derive(Debug, Clone, Serialize)]
pub struct VariableStatus {
    pub present: bool,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masked_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
}

/// Outcome of validating the whole catalog against the environment.
#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentResult {
    /// False once any critical-severity finding exists.
    pub valid: bool,
    pub critical_missing: Vec<String>,
    pub optional_missing: Vec<String>,
    /// Critical and error findings.
    pub issues: Vec<Issue>,
    /// Warning and info findings.
    pub warnings: Vec<Issue>,
    /// One entry per catalog variable, keyed by name. BTreeMap keeps JSON
    /// output stable across runs.
    pub validated_variables: BTreeMap<String, VariableStatus>,
    pub validation_status: EnvironmentStatus,
}

impl EnvironmentResult {
    fn new() -> Self {
        Self {
            valid: true,
            critical_missing: Vec::new(),
            optional_missing: Vec::new(),
            issues: Vec::new(),
            warnings: Vec::new(),
            validated_variables: BTreeMap::new(),
            validation_status: EnvironmentStatus::Ready,
        }
    }
}

/// Validate the process environment against the full catalog.
pub fn validate_environment() -> EnvironmentResult {
    validate_environment_with(|name| std::env::var(name).ok())
}

/// Validation walk with an injectable lookup, so callers and tests can run
/// without touching the process environment. An unset variable and an empty
/// one are treated the same.
pub fn validate_environment_with<F>(lookup: F) -> EnvironmentResult
where
    F: Fn(&str) -> Option<String>,
{
    let mut result = EnvironmentResult::new();

    for def in catalog::critical() {
        record(&mut result, def, &lookup(def.name).unwrap_or_default());
    }
    for def in catalog::optional() {
        record(&mut result, def, &lookup(def.name).unwrap_or_default());
    }

    result
}

/// Evaluate one variable and fold the outcome into the result.
fn record(result: &mut EnvironmentResult, def: &VarDef, value: &str) {
    let issue = match evaluate(def, value) {
        None => {
            result.validated_variables.insert(
                def.name.to_string(),
                VariableStatus {
                    present: true,
                    valid: true,
                    masked_value: Some(mask(value)),
                    issue: None,
                },
            );
            return;
        }
        Some(issue) => issue,
    };

    result.validated_variables.insert(
        def.name.to_string(),
        VariableStatus {
            present: !value.is_empty(),
            valid: false,
            masked_value: (!value.is_empty()).then(|| mask(value)),
            issue: Some(issue.user_message.clone()),
        },
    );

    match issue.code {
        IssueCode::MissingRequired => result.critical_missing.push(def.name.to_string()),
        IssueCode::MissingOptional => result.optional_missing.push(def.name.to_string()),
        _ => {}
    }

    let promoted = if issue.is_critical() {
        result.valid = false;
        EnvironmentStatus::NeedsSetup
    } else {
        EnvironmentStatus::HasIssues
    };
    result.validation_status = result.validation_status.max(promoted);

    if issue.severity >= Severity::Error {
        result.issues.push(issue);
    } else {
        result.warnings.push(issue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::ValueCheck;
    use crate::issue::Severity;

    /// A value that passes the definition's check (or any value when it has
    /// none).
    fn valid_value(def: &VarDef) -> String {
        match def.check {
            Some(ValueCheck::GithubToken) => format!("ghp_{}", "a".repeat(36)),
            Some(ValueCheck::DockerToken) => format!("dckr_pat_{}", "a".repeat(30)),
            Some(ValueCheck::Email) => "releases@example.com".to_string(),
            Some(ValueCheck::Url) => "https://hooks.example.com/x".to_string(),
            Some(ValueCheck::AwsBucket) | Some(ValueCheck::GcsBucket) => {
                "my-valid-bucket".to_string()
            }
            Some(ValueCheck::AzureStorageAccount) => "releasestore".to_string(),
            Some(ValueCheck::Hostname) => "registry.example.com".to_string(),
            Some(ValueCheck::FilePath) => std::env::temp_dir().to_string_lossy().into_owned(),
            None => "real-value".to_string(),
        }
    }

    fn full_env() -> Vec<(String, String)> {
        catalog::all()
            .iter()
            .map(|def| (def.name.to_string(), valid_value(def)))
            .collect()
    }

    fn lookup_in(pairs: Vec<(String, String)>) -> impl Fn(&str) -> Option<String> {
        move |name| {
            pairs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.clone())
        }
    }

    #[test]
    fn test_fully_configured_environment_is_ready() {
        let result = validate_environment_with(lookup_in(full_env()));

        assert!(result.valid);
        assert_eq!(result.validation_status, EnvironmentStatus::Ready);
        assert!(result.issues.is_empty());
        assert!(result.warnings.is_empty());
        assert!(result.critical_missing.is_empty());
        assert!(result.optional_missing.is_empty());
        assert!(result
            .validated_variables
            .values()
            .all(|status| status.present && status.valid));
    }

    #[test]
    fn test_every_catalog_entry_gets_a_status() {
        let result = validate_environment_with(|_| None);
        assert_eq!(result.validated_variables.len(), catalog::all().len());
    }

    #[test]
    fn test_missing_critical_forces_needs_setup() {
        let mut env = full_env();
        env.retain(|(name, _)| name != "GITHUB_TOKEN");
        let result = validate_environment_with(lookup_in(env));

        assert!(!result.valid);
        assert_eq!(result.validation_status, EnvironmentStatus::NeedsSetup);
        assert_eq!(result.critical_missing, vec!["GITHUB_TOKEN"]);

        let status = &result.validated_variables["GITHUB_TOKEN"];
        assert!(!status.present);
        assert!(!status.valid);
        assert_eq!(status.masked_value, None);
        assert!(status.issue.is_some());
    }

    #[test]
    fn test_unset_and_needing_setup_scenario() {
        // GITHUB_TOKEN unset, GITHUB_OWNER left as a placeholder,
        // DOCKER_TOKEN (optional) unset, everything else configured.
        let mut env = full_env();
        env.retain(|(name, _)| name != "GITHUB_TOKEN" && name != "DOCKER_TOKEN");
        for (name, value) in &mut env {
            if name == "GITHUB_OWNER" {
                *value = "your-org".to_string();
            }
        }
        let result = validate_environment_with(lookup_in(env));

        assert!(!result.valid);
        assert_eq!(result.critical_missing, vec!["GITHUB_TOKEN"]);
        assert_eq!(result.validation_status, EnvironmentStatus::NeedsSetup);
        assert!(result.optional_missing.contains(&"DOCKER_TOKEN".to_string()));
        assert!(result.warnings.iter().any(|issue| {
            issue.field == "GITHUB_OWNER" && issue.code == IssueCode::PlaceholderValue
        }));
        assert!(result.warnings.iter().any(|issue| {
            issue.field == "DOCKER_TOKEN" && issue.code == IssueCode::MissingOptional
        }));
    }

    #[test]
    fn test_optional_format_failure_is_error_not_invalid() {
        let mut env = full_env();
        for (name, value) in &mut env {
            if name == "DOCKER_TOKEN" {
                *value = "not-a-docker-token-at-all".to_string();
            }
        }
        let result = validate_environment_with(lookup_in(env));

        assert!(result.valid);
        assert_eq!(result.validation_status, EnvironmentStatus::HasIssues);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].severity, Severity::Error);
        assert_eq!(result.issues[0].code, IssueCode::ValidationFailed);

        let status = &result.validated_variables["DOCKER_TOKEN"];
        assert!(status.present);
        assert!(!status.valid);
    }

    #[test]
    fn test_required_format_failure_is_critical() {
        let mut env = full_env();
        for (name, value) in &mut env {
            if name == "GITHUB_TOKEN" {
                *value = "not-a-github-token-shape".to_string();
            }
        }
        let result = validate_environment_with(lookup_in(env));

        assert!(!result.valid);
        assert_eq!(result.validation_status, EnvironmentStatus::NeedsSetup);
        assert!(result
            .issues
            .iter()
            .any(|issue| issue.field == "GITHUB_TOKEN" && issue.is_critical()));
        // A format failure on a present variable is not a missing one.
        assert!(result.critical_missing.is_empty());
    }

    #[test]
    fn test_optional_missing_never_demotes_needs_setup() {
        let result = validate_environment_with(|_| None);
        assert_eq!(result.validation_status, EnvironmentStatus::NeedsSetup);
        assert!(!result.optional_missing.is_empty());
    }

    #[test]
    fn test_map_holds_masked_values_only() {
        let token = format!("ghp_{}", "a".repeat(36));
        let expected = mask(&token);
        let result = validate_environment_with(lookup_in(full_env()));

        let status = &result.validated_variables["GITHUB_TOKEN"];
        assert_eq!(status.masked_value.as_deref(), Some(expected.as_str()));
        assert_ne!(status.masked_value.as_deref(), Some(token.as_str()));
    }

    #[test]
    fn test_status_ladder_is_ordered() {
        assert!(EnvironmentStatus::Ready < EnvironmentStatus::HasIssues);
        assert!(EnvironmentStatus::HasIssues < EnvironmentStatus::NeedsSetup);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_value(EnvironmentStatus::NeedsSetup).unwrap();
        assert_eq!(json, serde_json::json!("needs_setup"));
    }
}

//! Report aggregation.
//!
//! Merges the environment result and the config-sync analysis into one
//! serializable [`ValidationReport`] carrying an overall verdict, summary
//! counts, and an ordered list of recommended actions.
//!
//! # Doc Audit
//! - audited: 2026-08-12
//! - docs: reference/report.md
//! - ignore: false

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::catalog;
use crate::environment::{validate_environment_with, EnvironmentResult};
use crate::issue::{Issue, IssueCode, Severity};
use crate::scan::ConfigAnalysis;
use crate::sync::check_sync;

/// Overall release-readiness verdict, in ascending blocking priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    Ok,
    Warnings,
    Errors,
    CriticalErrors,
}

impl OverallStatus {
    /// The process exit code the CLI maps this verdict to. Warnings do
    /// not block a release.
    pub fn exit_code(&self) -> i32 {
        match self {
            OverallStatus::Ok | OverallStatus::Warnings => 0,
            OverallStatus::Errors => 1,
            OverallStatus::CriticalErrors => 2,
        }
    }
}

/// Aggregate counts across both validation phases.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_checks: usize,
    pub critical_issues: usize,
    pub errors: usize,
    pub warnings: usize,
    pub missing_critical: usize,
    pub missing_optional: usize,
}

/// Everything one validation run produced.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub environment: EnvironmentResult,
    pub config_analysis: ConfigAnalysis,
    pub overall_status: OverallStatus,
    pub summary: Summary,
    pub recommended_actions: Vec<String>,
}

/// Run both validation phases against the live process environment.
///
/// Never fails: I/O and format problems all land in the report's issue
/// lists, leaving exit-code and HTTP-status decisions to the caller.
pub fn generate_report(example_file: &Path, config_files: &[PathBuf]) -> ValidationReport {
    generate_report_with(|name| std::env::var(name).ok(), example_file, config_files)
}

/// Variant taking a variable lookup, for callers that substitute their
/// own environment.
pub fn generate_report_with<F>(
    lookup: F,
    example_file: &Path,
    config_files: &[PathBuf],
) -> ValidationReport
where
    F: Fn(&str) -> Option<String>,
{
    let environment = validate_environment_with(lookup);
    let config_analysis = check_sync(example_file, config_files);

    let overall_status = overall_status(&environment, &config_analysis);
    let summary = summarize(&environment, &config_analysis);
    let recommended_actions = recommend(&environment, &config_analysis);

    ValidationReport {
        environment,
        config_analysis,
        overall_status,
        summary,
        recommended_actions,
    }
}

fn all_issues<'a>(
    env: &'a EnvironmentResult,
    config: &'a ConfigAnalysis,
) -> impl Iterator<Item = &'a Issue> {
    env.issues.iter().chain(config.issues.iter())
}

fn overall_status(env: &EnvironmentResult, config: &ConfigAnalysis) -> OverallStatus {
    if all_issues(env, config).any(Issue::is_critical) {
        OverallStatus::CriticalErrors
    } else if !env.issues.is_empty() || !config.issues.is_empty() {
        OverallStatus::Errors
    } else if !env.warnings.is_empty()
        || !config.warnings.is_empty()
        || !env.optional_missing.is_empty()
    {
        OverallStatus::Warnings
    } else {
        OverallStatus::Ok
    }
}

fn summarize(env: &EnvironmentResult, config: &ConfigAnalysis) -> Summary {
    Summary {
        total_checks: catalog::all().len(),
        critical_issues: all_issues(env, config)
            .filter(|issue| issue.severity == Severity::Critical)
            .count(),
        errors: all_issues(env, config)
            .filter(|issue| issue.severity == Severity::Error)
            .count(),
        warnings: env.warnings.len() + config.warnings.len(),
        missing_critical: env.critical_missing.len(),
        missing_optional: env.optional_missing.len(),
    }
}

/// Build the action list. Triggers are checked in a fixed order so the
/// most blocking advice always comes first.
fn recommend(env: &EnvironmentResult, config: &ConfigAnalysis) -> Vec<String> {
    let mut actions = Vec::new();

    if !env.critical_missing.is_empty() {
        actions.push(format!(
            "Set the required variables: {}",
            env.critical_missing.join(", ")
        ));
    }

    if !config.missing_in_example.is_empty() {
        actions.push(format!(
            "Document {} in your example file",
            config.missing_in_example.join(", ")
        ));
    }

    if !env.optional_missing.is_empty() {
        if env.optional_missing.len() <= 5 {
            actions.push(format!(
                "Optionally set: {}",
                env.optional_missing.join(", ")
            ));
        } else {
            actions.push(format!(
                "{} optional variables are unset; run `relcheck vars` to review them",
                env.optional_missing.len()
            ));
        }
    }

    if env
        .issues
        .iter()
        .any(|issue| issue.code == IssueCode::ValidationFailed)
    {
        actions.push("Fix the values that failed their format checks".to_string());
    }

    if env
        .warnings
        .iter()
        .any(|issue| issue.code == IssueCode::PlaceholderValue)
    {
        actions.push("Replace placeholder values with real credentials".to_string());
    }

    if actions.is_empty() {
        actions.push("Environment is ready for a release".to_string());
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    /// A value each catalog entry's format check accepts.
    fn valid_value(def: &catalog::VarDef) -> String {
        use crate::checks::ValueCheck;
        match def.check {
            Some(ValueCheck::GithubToken) => format!("ghp_{}", "a1B2".repeat(9)),
            Some(ValueCheck::DockerToken) => format!("dckr_pat_{}", "a1B2".repeat(8)),
            Some(ValueCheck::Email) => "release@example.com".to_string(),
            Some(ValueCheck::Url) => "https://hooks.example.com/notify".to_string(),
            Some(ValueCheck::AwsBucket) => "my-valid-bucket".to_string(),
            Some(ValueCheck::GcsBucket) => "my_release_bucket".to_string(),
            Some(ValueCheck::AzureStorageAccount) => "releasestore01".to_string(),
            Some(ValueCheck::Hostname) => "registry.example.com".to_string(),
            Some(ValueCheck::FilePath) => std::env::temp_dir().display().to_string(),
            None => "configured-value".to_string(),
        }
    }

    fn full_env() -> HashMap<String, String> {
        catalog::all()
            .iter()
            .map(|def| (def.name.to_string(), valid_value(def)))
            .collect()
    }

    fn lookup_in(env: HashMap<String, String>) -> impl Fn(&str) -> Option<String> {
        move |name| env.get(name).cloned()
    }

    /// In-sync example + config pair referencing only documented names.
    fn synced_files(dir: &TempDir) -> (std::path::PathBuf, Vec<PathBuf>) {
        let config = dir.path().join(".goreleaser.yml");
        fs::write(&config, "t: {{ .Env.GITHUB_TOKEN }}\n").unwrap();
        let example = dir.path().join(".env.example");
        fs::write(&example, "GITHUB_TOKEN=ghp_your-token-here\n").unwrap();
        (example, vec![config])
    }

    #[test]
    fn test_fully_configured_environment_is_ok() {
        let dir = TempDir::new().unwrap();
        let (example, configs) = synced_files(&dir);

        let report = generate_report_with(lookup_in(full_env()), &example, &configs);

        assert_eq!(report.overall_status, OverallStatus::Ok);
        assert_eq!(report.overall_status.exit_code(), 0);
        assert_eq!(report.summary.critical_issues, 0);
        assert_eq!(report.summary.errors, 0);
        assert_eq!(report.summary.warnings, 0);
        assert_eq!(report.summary.total_checks, catalog::all().len());
        assert_eq!(
            report.recommended_actions,
            vec!["Environment is ready for a release".to_string()]
        );
    }

    #[test]
    fn test_critical_issue_outranks_everything_else() {
        let dir = TempDir::new().unwrap();
        let (example, configs) = synced_files(&dir);

        // Missing critical, a placeholder warning, and an optional format
        // failure all at once: critical still wins.
        let mut env = full_env();
        env.remove("GITHUB_TOKEN");
        env.insert("GITHUB_OWNER".to_string(), "your-org".to_string());
        env.insert("NOTIFICATION_EMAIL".to_string(), "not-an-email".to_string());

        let report = generate_report_with(lookup_in(env), &example, &configs);

        assert_eq!(report.overall_status, OverallStatus::CriticalErrors);
        assert_eq!(report.overall_status.exit_code(), 2);
        assert!(report.summary.critical_issues >= 1);
        assert!(report.summary.errors >= 1);
        assert!(report.summary.warnings >= 1);
    }

    #[test]
    fn test_error_without_critical_maps_to_errors() {
        let dir = TempDir::new().unwrap();
        let (example, configs) = synced_files(&dir);

        let mut env = full_env();
        env.insert("NOTIFICATION_EMAIL".to_string(), "not-an-email".to_string());

        let report = generate_report_with(lookup_in(env), &example, &configs);

        assert_eq!(report.overall_status, OverallStatus::Errors);
        assert_eq!(report.overall_status.exit_code(), 1);
        // An optional variable failing its format check never invalidates
        // the environment by itself.
        assert!(report.environment.valid);
        assert_eq!(report.summary.critical_issues, 0);
    }

    #[test]
    fn test_optional_missing_alone_maps_to_warnings() {
        let dir = TempDir::new().unwrap();
        let (example, configs) = synced_files(&dir);

        let mut env = full_env();
        env.remove("DOCKER_TOKEN");

        let report = generate_report_with(lookup_in(env), &example, &configs);

        assert_eq!(report.overall_status, OverallStatus::Warnings);
        assert_eq!(report.overall_status.exit_code(), 0);
        assert_eq!(report.summary.missing_optional, 1);
    }

    #[test]
    fn test_undocumented_reference_maps_to_errors() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join(".goreleaser.yml");
        fs::write(&config, "k: {{ .Env.API_KEY }}\n").unwrap();
        let example = dir.path().join(".env.example");
        fs::write(&example, "GITHUB_TOKEN=x\n").unwrap();

        let report = generate_report_with(lookup_in(full_env()), &example, &[config]);

        assert_eq!(report.overall_status, OverallStatus::Errors);
        assert!(report
            .config_analysis
            .missing_in_example
            .contains(&"API_KEY".to_string()));
    }

    #[test]
    fn test_actions_come_in_trigger_order() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join(".goreleaser.yml");
        fs::write(&config, "k: {{ .Env.UNDOCUMENTED }}\n").unwrap();
        let example = dir.path().join(".env.example");
        fs::write(&example, "# nothing documented\n").unwrap();

        let mut env = full_env();
        env.remove("GITHUB_TOKEN");
        env.remove("DOCKER_TOKEN");
        env.insert("GITHUB_OWNER".to_string(), "your-org".to_string());

        let report = generate_report_with(lookup_in(env), &example, &[config]);
        let actions = &report.recommended_actions;

        assert!(actions[0].contains("GITHUB_TOKEN"));
        assert!(actions[1].contains("UNDOCUMENTED"));
        assert!(actions[2].contains("DOCKER_TOKEN"));
        assert!(actions
            .iter()
            .any(|action| action.contains("placeholder")));
        // Nothing failed a format check, so no format-fix advice.
        assert!(!actions.iter().any(|action| action.contains("format")));
    }

    #[test]
    fn test_many_optional_missing_collapses_to_count() {
        let dir = TempDir::new().unwrap();
        let (example, configs) = synced_files(&dir);

        // Keep only the criticals configured.
        let env: HashMap<String, String> = catalog::critical()
            .map(|def| (def.name.to_string(), valid_value(def)))
            .collect();

        let report = generate_report_with(lookup_in(env), &example, &configs);

        let optional_total = catalog::optional().count();
        assert!(optional_total > 5);
        assert!(report
            .recommended_actions
            .iter()
            .any(|action| action.contains(&format!("{} optional variables", optional_total))));
    }

    #[test]
    fn test_report_serializes_with_expected_shape() {
        let dir = TempDir::new().unwrap();
        let (example, configs) = synced_files(&dir);

        let report = generate_report_with(lookup_in(full_env()), &example, &configs);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["overall_status"], "ok");
        assert!(json["environment"]["validated_variables"].is_object());
        assert!(json["config_analysis"]["extracted_variables"].is_array());
        assert!(json["summary"]["total_checks"].as_u64().unwrap() > 0);
        assert!(json["recommended_actions"].is_array());
    }
}

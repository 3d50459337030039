//! # Relcheck - Release Preflight Validation
//!
//! Relcheck validates the environment and configuration a GoReleaser
//! release pipeline depends on, before the pipeline runs.
//!
//! ## Overview
//!
//! A static catalog describes every environment variable a release can
//! use: credentials, bucket names, webhook URLs, signing material. One
//! validation pass evaluates the live environment against that catalog,
//! scans GoReleaser configs for `{{ .Env.* }}` references, reconciles
//! them against the documented `.env.example`, and folds everything into
//! a single report with a release-readiness verdict.
//!
//! ## Core Concepts
//!
//! - **Catalog**: the immutable table of known variables, built once
//! - **Evaluation**: ordered rules turning one (definition, value) pair
//!   into at most one finding
//! - **Report**: environment result + config analysis + verdict,
//!   serializable for both terminal and HTTP consumers
//!
//! ## Modules
//!
//! - [`catalog`] - The static variable catalog and its lookups
//! - [`checks`] - Named format checks for variable values
//! - [`issue`] - Findings: severity, machine code, messages
//! - [`evaluate`] - Per-variable rule application and masking
//! - [`environment`] - Whole-environment validation
//! - [`scan`] - `{{ .Env.* }}` extraction from GoReleaser configs
//! - [`sync`] - Reconciliation against the documented example file
//! - [`report`] - Aggregation into a [`report::ValidationReport`]
//! - [`config`] - Optional `.relcheck.yml` project settings
//! - [`tools`] - PATH probes for goreleaser, git, and docker
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use relcheck::report::generate_report;
//!
//! let report = generate_report(Path::new(".env.example"), &[]);
//! if report.environment.valid {
//!     println!("environment is ready");
//! }
//! std::process::exit(report.overall_status.exit_code());
//! ```

// Re-export all public modules
pub mod catalog;
pub mod checks;
pub mod config;
pub mod environment;
pub mod evaluate;
pub mod issue;
pub mod report;
pub mod scan;
pub mod sync;
pub mod tools;
pub mod ui;

/// Default filename constants for the files relcheck reads.
pub mod defaults {
    /// The conventional GoReleaser config filenames, checked in order.
    pub const CONFIG_FILES: [&str; 2] = [".goreleaser.yml", ".goreleaser.yaml"];
    /// The documented-example dotfile: `.env.example`
    pub const EXAMPLE_FILE: &str = ".env.example";
    /// Optional per-project settings: `.relcheck.yml`
    pub const SETTINGS_FILE: &str = ".relcheck.yml";
}

/// Generate a UTC timestamp in ISO 8601 format: `YYYY-MM-DDTHH:MM:SSZ`
///
/// This function uses `chrono::Utc::now()` to ensure the timestamp is truly in UTC,
/// not local time with a misleading `Z` suffix.
pub fn utc_now_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

//! Project settings loaded from `.relcheck.yml`.
//!
//! # Doc Audit
//! - audited: 2026-08-12
//! - docs: reference/config.md
//! - ignore: false

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::defaults;

/// Per-project settings, all optional. An absent settings file means the
/// conventional defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Example file documenting expected variables.
    #[serde(default)]
    pub example_file: Option<String>,
    /// Config files to scan instead of the conventional pair.
    #[serde(default)]
    pub config_files: Vec<String>,
    #[serde(default)]
    pub license: LicenseConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LicenseConfig {
    /// Copyright holder written into generated license files.
    #[serde(default)]
    pub owner: Option<String>,
}

impl Config {
    /// Load settings from `.relcheck.yml` in the working directory. An
    /// absent file is not an error.
    pub fn load() -> Result<Self> {
        let path = Path::new(defaults::SETTINGS_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse settings")
    }

    /// The example file to reconcile against, resolved to a path.
    pub fn example_path(&self) -> PathBuf {
        self.example_file
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(defaults::EXAMPLE_FILE))
    }

    /// The config files to scan. Empty means the scanner falls back to
    /// the conventional pair.
    pub fn config_paths(&self) -> Vec<PathBuf> {
        self.config_files.iter().map(PathBuf::from).collect()
    }
}

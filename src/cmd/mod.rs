//! Command module structure for relcheck CLI

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

use relcheck::config::Config;

pub mod check;
pub mod example;
pub mod license;
pub mod serve;
pub mod tools;
pub mod vars;

/// Resolve the example file and config files one validation run should
/// use: CLI flags win, then `.relcheck.yml` settings, then convention.
///
/// An empty config list is returned as-is; the scanner substitutes the
/// conventional pair itself.
pub fn resolve_inputs(
    config_flags: &[PathBuf],
    example_flag: Option<&Path>,
) -> Result<(PathBuf, Vec<PathBuf>)> {
    let settings = Config::load()?;

    let example = example_flag
        .map(Path::to_path_buf)
        .unwrap_or_else(|| settings.example_path());

    let configs = if config_flags.is_empty() {
        settings.config_paths()
    } else {
        config_flags.to_vec()
    };

    Ok((example, configs))
}

/// Ask before clobbering an existing file, honoring `--force` and falling
/// back to a refusal when stdin is not a terminal.
pub fn confirm_overwrite(path: &Path, force: bool) -> Result<bool> {
    if !path.exists() || force {
        return Ok(true);
    }

    if atty::is(atty::Stream::Stdin) {
        let should_overwrite = dialoguer::Confirm::new()
            .with_prompt(format!("{} already exists. Overwrite?", path.display()))
            .default(false)
            .interact()?;
        Ok(should_overwrite)
    } else {
        eprintln!(
            "{} {} already exists. Use {} to overwrite.",
            "•".yellow(),
            path.display(),
            "--force".cyan()
        );
        Ok(false)
    }
}

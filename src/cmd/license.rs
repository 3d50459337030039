//! License command: write a license file from an embedded template.

use anyhow::{Context, Result};
use chrono::Datelike;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tera::Tera;

use relcheck::config::Config;

/// Embedded license templates
pub mod embedded {
    pub const MIT: &str = include_str!("../../templates/license/mit.tmpl");
    pub const APACHE_2_0: &str = include_str!("../../templates/license/apache-2.0.tmpl");
}

fn template_for(license: &str) -> Result<(&'static str, &'static str)> {
    match license.to_lowercase().as_str() {
        "mit" => Ok(("mit", embedded::MIT)),
        "apache-2.0" | "apache" => Ok(("apache-2.0", embedded::APACHE_2_0)),
        other => anyhow::bail!(
            "Unknown license type: {} (expected mit or apache-2.0)",
            other
        ),
    }
}

fn render_license(
    template_name: &str,
    template: &'static str,
    year: i32,
    owner: &str,
) -> Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template)?;

    let mut context = tera::Context::new();
    context.insert("year", &year);
    context.insert("owner", &owner);

    Ok(tera.render(template_name, &context)?)
}

/// Copyright holder: flag, then settings, then git user.name.
fn resolve_owner(flag: Option<&str>, settings: &Config) -> Option<String> {
    if let Some(owner) = flag {
        return Some(owner.to_string());
    }
    if let Some(owner) = settings.license.owner.clone() {
        return Some(owner);
    }
    git_user_name()
}

fn git_user_name() -> Option<String> {
    let output = Command::new("git")
        .args(["config", "user.name"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!name.is_empty()).then_some(name)
}

pub fn cmd_license(
    license: &str,
    owner: Option<&str>,
    year: Option<i32>,
    output: Option<&Path>,
    force: bool,
) -> Result<()> {
    let (name, template) = template_for(license)?;
    let settings = Config::load()?;

    let owner = resolve_owner(owner, &settings).ok_or_else(|| {
        anyhow::anyhow!(
            "No copyright owner found. Pass --owner or set license.owner in .relcheck.yml"
        )
    })?;
    let year = year.unwrap_or_else(|| chrono::Utc::now().year());

    let rendered = render_license(name, template, year, &owner)?;

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("LICENSE"));

    if !super::confirm_overwrite(&path, force)? {
        return Ok(());
    }

    fs::write(&path, rendered)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{} Wrote {} license to {}", "✓".green(), name, path.display());
    Ok(())
}

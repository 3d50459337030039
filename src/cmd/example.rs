//! Example command: write a starter .env.example from the catalog.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use relcheck::catalog::{self, Category};
use relcheck::defaults;

/// Render the example file: every known variable documented with its
/// example value, grouped by category. Every entry stays uncommented so
/// the sync check counts it as documented.
fn render_example() -> String {
    let mut out = String::new();
    out.push_str("# Release environment for GoReleaser.\n");
    out.push_str("# Fill in values locally or copy the names into CI secrets.\n");

    for category in Category::ALL {
        let defs: Vec<_> = catalog::by_category(category).collect();
        if defs.is_empty() {
            continue;
        }

        out.push_str(&format!("\n# --- {} ---\n", category.as_str()));
        for def in defs {
            let required = if def.required { " (required)" } else { "" };
            out.push_str(&format!("# {}{}\n", def.description, required));
            out.push_str(&format!("{}={}\n", def.name, def.example.unwrap_or("")));
        }
    }

    out
}

pub fn cmd_example(output: Option<&Path>, stdout: bool, force: bool) -> Result<()> {
    let content = render_example();

    if stdout {
        print!("{}", content);
        return Ok(());
    }

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(defaults::EXAMPLE_FILE));

    if !super::confirm_overwrite(&path, force)? {
        return Ok(());
    }

    fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{} Wrote {}", "✓".green(), path.display());
    println!(
        "  {}",
        "Run `relcheck check` once your values are in place.".dimmed()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalog_entry_is_documented() {
        let content = render_example();
        for def in catalog::all() {
            assert!(
                content.contains(&format!("\n{}=", def.name)),
                "missing documented line for {}",
                def.name
            );
        }
    }

    #[test]
    fn test_required_entries_are_marked() {
        let content = render_example();
        let token_comment = content
            .lines()
            .zip(content.lines().skip(1))
            .find(|(_, assignment)| assignment.starts_with("GITHUB_TOKEN="))
            .map(|(comment, _)| comment)
            .unwrap();
        assert!(token_comment.contains("(required)"));
    }

    #[test]
    fn test_sections_follow_catalog_categories() {
        let content = render_example();
        let github = content.find("# --- github ---").unwrap();
        let docker = content.find("# --- docker ---").unwrap();
        assert!(github < docker);
    }
}

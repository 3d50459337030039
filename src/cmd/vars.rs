//! Vars command: list the known release variables.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use relcheck::catalog::{self, Category, VarDef};

/// Presentation shape for one catalog entry.
#[derive(Serialize)]
struct VarRow {
    name: &'static str,
    description: &'static str,
    required: bool,
    category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    check: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    example: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'static str>,
}

impl From<&'static VarDef> for VarRow {
    fn from(def: &'static VarDef) -> Self {
        Self {
            name: def.name,
            description: def.description,
            required: def.required,
            category: def.category,
            check: def.check.map(|check| check.name()),
            example: def.example,
            format: def.format,
        }
    }
}

pub fn cmd_vars(category: Option<&str>, required_only: bool, json: bool) -> Result<()> {
    let category = match category {
        Some(name) => Some(
            Category::parse(name).ok_or_else(|| anyhow::anyhow!("Unknown category: {}", name))?,
        ),
        None => None,
    };

    let selected: Vec<&'static VarDef> = catalog::all()
        .iter()
        .filter(|def| category.map_or(true, |wanted| def.category == wanted))
        .filter(|def| !required_only || def.required)
        .collect();

    if json {
        let rows: Vec<VarRow> = selected.into_iter().map(VarRow::from).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let total = selected.len();
    for group in Category::ALL {
        let defs: Vec<_> = selected
            .iter()
            .filter(|def| def.category == group)
            .collect();
        if defs.is_empty() {
            continue;
        }

        println!("{}", group.as_str().bold());
        for def in defs {
            let marker = if def.required {
                "required".red()
            } else {
                "optional".dimmed()
            };
            println!("  {} ({})", def.name.cyan(), marker);
            println!("      {}", def.description.dimmed());
            if let Some(format) = def.format {
                println!("      format: {}", format.dimmed());
            }
        }
        println!();
    }

    println!("{} variable(s)", total);
    Ok(())
}

//! Tools command: check release tools are on PATH.

use anyhow::Result;
use colored::Colorize;

use relcheck::tools::check_tools;

pub fn cmd_tools(json: bool) -> Result<()> {
    let statuses = check_tools();

    if json {
        println!("{}", serde_json::to_string_pretty(&statuses)?);
        return Ok(());
    }

    println!("{}", "Checking release tools...".dimmed());

    let mut missing = 0;
    for status in &statuses {
        if status.found {
            let version = status.version.as_deref().unwrap_or("version unknown");
            println!("  {} {} {}", "✓".green(), status.name, version.dimmed());
        } else {
            println!("  {} {} - not found in PATH", "✗".red(), status.name);
            missing += 1;
        }
    }

    println!();
    if missing == 0 {
        println!("{} All release tools available", "✓".green());
    } else {
        // Informational only: docker is legitimately absent on pipelines
        // that publish no images.
        println!("{} {} tool(s) missing", "⚠".yellow(), missing);
    }
    Ok(())
}

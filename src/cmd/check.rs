//! Check command: run both validation phases and render the report.

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

use relcheck::report::{generate_report, ValidationReport};
use relcheck::ui;

/// Run the full preflight and print a report. Exits nonzero when the
/// verdict blocks a release.
pub fn cmd_check(json: bool, config_flags: &[PathBuf], example_flag: Option<&Path>) -> Result<()> {
    let (example, configs) = super::resolve_inputs(config_flags, example_flag)?;
    let report = generate_report(&example, &configs);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&report);
    }

    let code = report.overall_status.exit_code();
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn render_report(report: &ValidationReport) {
    if !ui::is_quiet() {
        println!("{}", "Release preflight".bold());
        println!("{}", relcheck::utc_now_iso().dimmed());
        println!();
    }

    render_environment(report);
    render_config_sync(report);
    render_actions(report);
    render_summary(report);
}

fn render_environment(report: &ValidationReport) {
    println!("{}", "Checking environment...".dimmed());

    let env = &report.environment;
    for (name, status) in &env.validated_variables {
        // The status map carries the user message; severity lives on the
        // finding itself.
        let severity = env
            .issues
            .iter()
            .chain(env.warnings.iter())
            .filter(|issue| issue.field == *name)
            .map(|issue| issue.severity)
            .max();

        match severity {
            None => {
                let shown = status.masked_value.as_deref().unwrap_or("");
                println!("  {} {} {}", "✓".green(), name, shown.dimmed());
            }
            Some(severity) => {
                let note = status.issue.as_deref().unwrap_or("");
                println!("  {} {} - {}", ui::severity_icon(severity), name, note);
            }
        }
    }

    println!(
        "  {} {}",
        "environment:".dimmed(),
        ui::environment_label(env.validation_status)
    );
    println!();
}

fn render_config_sync(report: &ValidationReport) {
    println!("{}", "Checking config sync...".dimmed());

    let config = &report.config_analysis;
    if config.config_files.is_empty() {
        println!("  {} no config files found", "•".yellow());
    } else {
        for file in &config.config_files {
            println!("  {} scanned {}", "✓".green(), file.dimmed());
        }
    }

    for issue in config.issues.iter().chain(config.warnings.iter()) {
        println!(
            "  {} {}",
            ui::severity_icon(issue.severity),
            issue.user_message
        );
    }
    println!();
}

fn render_actions(report: &ValidationReport) {
    println!("{}", "Recommended actions:".dimmed());
    for action in &report.recommended_actions {
        println!("  {} {}", "•".cyan(), action);
    }
    println!();
}

fn render_summary(report: &ValidationReport) {
    let summary = &report.summary;
    println!(
        "{} checks, {} critical, {} errors, {} warnings",
        summary.total_checks, summary.critical_issues, summary.errors, summary.warnings
    );
    println!("{}", ui::overall_label(report.overall_status));
}

//! CLI entry point and command handlers for relcheck.
//!
//! # Doc Audit
//! - audited: 2026-08-12
//! - docs: reference/cli.md
//! - ignore: false

mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "relcheck")]
#[command(version)]
#[command(about = "Preflight checks for GoReleaser release environments", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    relcheck check              Validate your environment and configs\n    relcheck example            Write a starter .env.example\n    relcheck vars               List every variable relcheck knows about\n\n    Exit codes: 0 ready (warnings allowed), 1 errors, 2 critical errors."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the environment and configs, print a report
    Check {
        /// Emit the full report as JSON instead of the summary
        #[arg(long)]
        json: bool,
        /// Config file to scan (can be specified multiple times)
        #[arg(long, value_name = "FILE")]
        config: Vec<PathBuf>,
        /// Example file to reconcile against
        #[arg(long, value_name = "FILE")]
        example: Option<PathBuf>,
    },
    /// List the known release variables
    Vars {
        /// Filter by category (github, docker, cloud, signing, notification, general, artifacts)
        #[arg(long)]
        category: Option<String>,
        /// Show only required variables
        #[arg(long)]
        required: bool,
        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a starter .env.example from the catalog
    Example {
        /// Output path (default: .env.example)
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
        /// Overwrite an existing file without prompting
        #[arg(long)]
        force: bool,
    },
    /// Write a license file for the release (mit or apache-2.0)
    License {
        /// License to generate
        #[arg(value_name = "TYPE")]
        license: String,
        /// Copyright holder (default: settings, then git user.name)
        #[arg(long)]
        owner: Option<String>,
        /// Copyright year (default: current year)
        #[arg(long)]
        year: Option<i32>,
        /// Output path (default: LICENSE)
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Overwrite an existing file without prompting
        #[arg(long)]
        force: bool,
    },
    /// Check that release tools (goreleaser, git, docker) are on PATH
    Tools {
        /// Emit tool statuses as JSON
        #[arg(long)]
        json: bool,
    },
    /// Serve validation reports as JSON over HTTP
    Serve {
        /// Port to listen on
        #[arg(long, short, default_value = "3000")]
        port: u16,
        /// Config file to scan (can be specified multiple times)
        #[arg(long, value_name = "FILE")]
        config: Vec<PathBuf>,
        /// Example file to reconcile against
        #[arg(long, value_name = "FILE")]
        example: Option<PathBuf>,
    },
    /// Show version information
    Version {
        /// Show build metadata
        #[arg(long)]
        verbose: bool,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Generate man page
    #[command(hide = true)]
    Man {
        /// Output directory
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            json,
            config,
            example,
        } => cmd::check::cmd_check(json, &config, example.as_deref()),
        Commands::Vars {
            category,
            required,
            json,
        } => cmd::vars::cmd_vars(category.as_deref(), required, json),
        Commands::Example {
            output,
            stdout,
            force,
        } => cmd::example::cmd_example(output.as_deref(), stdout, force),
        Commands::License {
            license,
            owner,
            year,
            output,
            force,
        } => cmd::license::cmd_license(
            &license,
            owner.as_deref(),
            year,
            output.as_deref(),
            force,
        ),
        Commands::Tools { json } => cmd::tools::cmd_tools(json),
        Commands::Serve {
            port,
            config,
            example,
        } => cmd::serve::cmd_serve(port, &config, example.as_deref()),
        Commands::Version { verbose } => cmd_version(verbose),
        Commands::Completion { shell } => cmd_completion(shell),
        Commands::Man { output } => cmd_man(output.as_ref()),
    }
}

/// Show version information
fn cmd_version(verbose: bool) -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    println!("relcheck {}", VERSION);

    if verbose {
        const GIT_SHA: &str = env!("GIT_SHA");
        const BUILD_DATE: &str = env!("BUILD_DATE");
        println!("commit: {}", GIT_SHA);
        println!("built: {}", BUILD_DATE);
    }

    Ok(())
}

/// Generate shell completion script
fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "relcheck", &mut io::stdout());
    Ok(())
}

/// Generate man page
fn cmd_man(out_dir: Option<&PathBuf>) -> Result<()> {
    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    let output_dir = out_dir
        .map(|p| p.to_owned())
        .unwrap_or_else(|| PathBuf::from("."));

    std::fs::create_dir_all(&output_dir)?;
    let man_path = output_dir.join("relcheck.1");
    std::fs::write(&man_path, buffer)?;

    println!("Man page written to: {}", man_path.display());
    Ok(())
}

//! Release-tool availability probes.
//!
//! A release pipeline needs more than environment variables: goreleaser
//! itself, git, and (when images are published) docker must be on PATH.

use std::process::Command;

use serde::Serialize;

/// Binaries a GoReleaser pipeline commonly shells out to.
pub const RELEASE_TOOLS: [&str; 3] = ["goreleaser", "git", "docker"];

/// Whether one binary was found, and its reported version if it was.
#[derive(Debug, Clone, Serialize)]
pub struct ToolStatus {
    pub name: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Check if a command exists in PATH
pub fn command_exists(cmd: &str) -> bool {
    Command::new("which")
        .arg(cmd)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// First line of `cmd --version`, if the command runs and prints one.
fn command_version(cmd: &str) -> Option<String> {
    let output = Command::new(cmd).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
}

/// Probe every release tool once.
pub fn check_tools() -> Vec<ToolStatus> {
    RELEASE_TOOLS
        .iter()
        .map(|name| {
            let found = command_exists(name);
            ToolStatus {
                name: name.to_string(),
                found,
                version: if found { command_version(name) } else { None },
            }
        })
        .collect()
}

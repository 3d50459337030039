use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// TestHarness provides an isolated project directory for CLI runs.
/// Each harness creates a temporary directory the binary runs in, and
/// scrubs every cataloged variable from the child environment so test
/// outcomes do not depend on the developer's shell.
pub struct TestHarness {
    pub dir: TempDir,
    pub relcheck_binary: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        TestHarness {
            dir,
            relcheck_binary: PathBuf::from(env!("CARGO_BIN_EXE_relcheck")),
        }
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a file relative to the harness directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Runs relcheck with a scrubbed catalog environment.
    pub fn run(&self, args: &[&str]) -> std::io::Result<std::process::Output> {
        self.run_with_env(args, &[])
    }

    /// Runs relcheck with a scrubbed catalog environment plus the given
    /// variables.
    pub fn run_with_env(
        &self,
        args: &[&str],
        vars: &[(&str, &str)],
    ) -> std::io::Result<std::process::Output> {
        let mut command = Command::new(&self.relcheck_binary);
        command.args(args).current_dir(self.path());

        for def in relcheck::catalog::all() {
            command.env_remove(def.name);
        }
        for (key, value) in vars {
            command.env(key, value);
        }

        command.output()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

//! CLI command execution helpers
//!
//! Wraps the `datefix` binary built for this test run and provides
//! convenient assertion methods on its output.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// CLI command builder
pub struct DatefixCommand {
    binary_path: PathBuf,
    working_dir: PathBuf,
    args: Vec<String>,
}

impl DatefixCommand {
    /// Create a new command in the given working directory
    pub fn new(working_dir: impl AsRef<Path>) -> Self {
        Self {
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_datefix")),
            working_dir: working_dir.as_ref().to_path_buf(),
            args: Vec::new(),
        }
    }

    /// Add command arguments
    pub fn args(&mut self, args: &[&str]) -> &mut Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Execute command and return its output
    pub fn execute(&self) -> Result<CommandResult> {
        let output = Command::new(&self.binary_path)
            .args(&self.args)
            .current_dir(&self.working_dir)
            .output()
            .context("Failed to execute command")?;

        Ok(CommandResult {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
        })
    }

    /// Execute and assert success
    pub fn assert_success(&self) -> Result<CommandResult> {
        let result = self.execute()?;

        if !result.success() {
            anyhow::bail!(
                "Command failed (exit code: {}):\nArgs: {:?}\nStdout: {}\nStderr: {}",
                result.exit_code,
                self.args,
                result.stdout,
                result.stderr
            );
        }

        Ok(result)
    }

    /// Execute and expect failure
    pub fn assert_failure(&self) -> Result<CommandResult> {
        let result = self.execute()?;

        if result.success() {
            anyhow::bail!(
                "Command should have failed but succeeded:\nArgs: {:?}\nStdout: {}",
                self.args,
                result.stdout
            );
        }

        Ok(result)
    }
}

/// Command execution result
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandResult {
    /// Check if command succeeded
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Check if stdout contains text
    pub fn contains_stdout(&self, text: &str) -> bool {
        self.stdout.contains(text)
    }

    /// Check if stderr contains text
    pub fn contains_stderr(&self, text: &str) -> bool {
        self.stderr.contains(text)
    }

    /// Paths named on `index / total | path` progress lines, in order
    pub fn progress_paths(&self) -> Vec<String> {
        self.stdout
            .lines()
            .filter_map(parse_progress_line)
            .map(|(_, _, path)| path)
            .collect()
    }
}

/// Split a progress line into index, total and path
pub fn parse_progress_line(line: &str) -> Option<(usize, usize, String)> {
    let (counts, path) = line.split_once(" | ")?;
    let (index, total) = counts.split_once(" / ")?;
    Some((
        index.trim().parse().ok()?,
        total.trim().parse().ok()?,
        path.to_string(),
    ))
}

/// Macro for convenient command construction
///
/// Usage:
/// ```
/// datefix!(dir, "some/root").assert_success()?;
/// datefix!(dir, "--pattern", "*.so", "lib").assert_success()?;
/// ```
#[macro_export]
macro_rules! datefix {
    ($dir:expr, $($arg:expr),*) => {{
        let mut cmd = $crate::common::cli::DatefixCommand::new($dir);
        cmd.args(&[$($arg),*]);
        cmd
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_line_parsing() {
        assert_eq!(
            parse_progress_line("3 / 10 | /data/x.dll"),
            Some((3, 10, "/data/x.dll".to_string()))
        );
        assert_eq!(parse_progress_line("Completed."), None);
        assert_eq!(parse_progress_line("a / b | /x"), None);
    }
}

//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `qnote` binary.
///
/// Provides a builder-style API for constructing and executing CLI
/// commands against an isolated application directory.
pub struct QnoteCommand {
    args: Vec<String>,
    stdin: Option<String>,
    envs: Vec<(String, String)>,
}

impl QnoteCommand {
    /// Creates a new command for the `qnote` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            stdin: None,
            envs: Vec::new(),
        }
    }

    /// Sets the `--config-dir` option for an isolated environment.
    pub fn config_dir(mut self, path: &Path) -> Self {
        self.args.push("--config-dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Pipes the given text into the command's stdin.
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Sets an environment variable for the command.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("qnote").expect("Failed to find qnote binary");
        cmd.args(&self.args);
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        if let Some(input) = &self.stdin {
            cmd.write_stdin(input.clone());
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `add` command with inline content.
    pub fn add(self, content: &str) -> Self {
        self.args(["add", "-c", content])
    }

    /// Configures for the `list` command.
    pub fn list(self) -> Self {
        self.args(["list"])
    }

    /// Configures for the `open` command with an identifier.
    pub fn open(self, uuid: &str) -> Self {
        self.args(["open", uuid])
    }

    /// Configures for a `notebook` subcommand.
    pub fn notebook(self, args: &[&str]) -> Self {
        self.args(["notebook"]).args(args.iter().copied())
    }

    /// Configures for a `search` subcommand.
    pub fn search(self, kind: &str, pattern: &str) -> Self {
        self.args(["search", kind, pattern])
    }

    /// Configures for a `tag` subcommand.
    pub fn tag(self, args: &[&str]) -> Self {
        self.args(["tag"]).args(args.iter().copied())
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for QnoteCommand {
    fn default() -> Self {
        Self::new()
    }
}

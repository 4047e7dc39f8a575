//! Editor subprocess wrapper.
//!
//! Content is round-tripped through a temp file: write the initial text,
//! launch the configured editor on it, read the result back.

use anyhow::{Context, Result, bail};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// Template shown when composing a new note in the editor.
pub const NOTE_TEMPLATE: &str = "# Note content (this line can be removed)\n\n";

/// Launches an editor on a piece of text (allows mocking in tests).
pub trait EditorLauncher {
    /// Opens the editor with `initial` text and returns the edited text.
    fn edit(&self, initial: &str) -> Result<String>;
}

/// Editor launched as a subprocess, e.g. `vi` or `code --wait`.
pub struct CommandEditor {
    command: String,
}

impl CommandEditor {
    /// Creates an editor wrapper around a shell-style command string.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Returns the configured command string.
    pub fn command(&self) -> &str {
        &self.command
    }
}

impl EditorLauncher for CommandEditor {
    fn edit(&self, initial: &str) -> Result<String> {
        let mut file = tempfile::Builder::new()
            .prefix("qnote-")
            .suffix(".md")
            .tempfile()
            .context("failed to create temp file for editing")?;
        file.write_all(initial.as_bytes())
            .context("failed to write temp file for editing")?;
        file.flush().context("failed to flush temp file")?;

        run_editor(&self.command, file.path())?;

        fs::read_to_string(file.path()).context("failed to read edited temp file")
    }
}

/// Opens a file in the given editor command and waits for it to exit.
fn run_editor(editor: &str, path: &Path) -> Result<()> {
    // The command string may include args, e.g. "code --wait".
    let parts: Vec<&str> = editor.split_whitespace().collect();
    if parts.is_empty() {
        bail!("editor command is empty");
    }

    let (cmd, args) = parts.split_first().unwrap();

    let status = Command::new(cmd)
        .args(args)
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch editor '{}'", editor))?;

    if !status.success() {
        bail!("editor '{}' exited with non-zero status", editor);
    }

    Ok(())
}

/// Removes the note template header from edited content.
pub fn strip_template(content: &str) -> String {
    content
        .replacen(NOTE_TEMPLATE.trim_end(), "", 1)
        .trim()
        .to_string()
}

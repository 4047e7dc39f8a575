//! Flat status files: the `HEAD` notebook pointer and the cached
//! selection of note UUIDs.

use crate::domain::NoteId;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The `HEAD` file naming the currently open notebook.
pub struct HeadFile {
    path: PathBuf,
}

impl HeadFile {
    /// Creates a handle for the HEAD file at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the open notebook name.
    ///
    /// If the file does not exist yet it is initialized with `default`.
    pub fn get(&self, default: &str) -> Result<String> {
        if !self.path.exists() {
            self.set(default)?;
            return Ok(default.to_string());
        }
        let name = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read HEAD file: {}", self.path.display()))?;
        let name = name.trim();
        if name.is_empty() {
            self.set(default)?;
            return Ok(default.to_string());
        }
        Ok(name.to_string())
    }

    /// Points HEAD at the given notebook.
    pub fn set(&self, name: &str) -> Result<()> {
        write_state_file(&self.path, name)
    }
}

/// The file caching note UUIDs picked by `select`.
pub struct SelectionFile {
    path: PathBuf,
}

impl SelectionFile {
    /// Creates a handle for the selection file at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the cached selection, oldest first.
    ///
    /// A missing file is an empty selection. Lines that no longer parse
    /// as UUIDs are skipped.
    pub fn get(&self) -> Result<Vec<NoteId>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read selection file: {}", self.path.display()))?;
        Ok(content
            .lines()
            .filter_map(|line| line.trim().parse().ok())
            .collect())
    }

    /// Replaces the cached selection.
    pub fn set(&self, ids: &[NoteId]) -> Result<()> {
        let content = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        write_state_file(&self.path, &content)
    }

    /// Empties the cached selection.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).with_context(|| {
                format!("failed to remove selection file: {}", self.path.display())
            })?;
        }
        Ok(())
    }
}

fn write_state_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    // ===========================================
    // HEAD file
    // ===========================================

    #[test]
    fn head_initializes_with_default() {
        let dir = TempDir::new().unwrap();
        let head = HeadFile::new(dir.path().join("HEAD"));

        assert_eq!(head.get("inbox").unwrap(), "inbox");
        assert!(dir.path().join("HEAD").exists(), "file is written on first read");
    }

    #[test]
    fn head_set_then_get() {
        let dir = TempDir::new().unwrap();
        let head = HeadFile::new(dir.path().join("HEAD"));

        head.set("work").unwrap();
        assert_eq!(head.get("inbox").unwrap(), "work");
    }

    #[test]
    fn head_trims_whitespace() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("HEAD");
        fs::write(&path, "work\n").unwrap();

        let head = HeadFile::new(path);
        assert_eq!(head.get("inbox").unwrap(), "work");
    }

    #[test]
    fn head_empty_file_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("HEAD");
        fs::write(&path, "  \n").unwrap();

        let head = HeadFile::new(path);
        assert_eq!(head.get("inbox").unwrap(), "inbox");
    }

    #[test]
    fn head_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let head = HeadFile::new(dir.path().join("nested").join("HEAD"));
        assert_eq!(head.get("inbox").unwrap(), "inbox");
    }

    // ===========================================
    // Selection file
    // ===========================================

    #[test]
    fn selection_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let selection = SelectionFile::new(dir.path().join("selected"));
        assert!(selection.get().unwrap().is_empty());
    }

    #[test]
    fn selection_roundtrip() {
        let dir = TempDir::new().unwrap();
        let selection = SelectionFile::new(dir.path().join("selected"));

        let ids = vec![NoteId::new(), NoteId::new()];
        selection.set(&ids).unwrap();

        assert_eq!(selection.get().unwrap(), ids);
    }

    #[test]
    fn selection_skips_unparseable_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("selected");
        let id = NoteId::new();
        fs::write(&path, format!("garbage\n{}\n", id)).unwrap();

        let selection = SelectionFile::new(path);
        assert_eq!(selection.get().unwrap(), vec![id]);
    }

    #[test]
    fn selection_clear_removes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("selected");
        let selection = SelectionFile::new(&path);

        selection.set(&[NoteId::new()]).unwrap();
        selection.clear().unwrap();

        assert!(!path.exists());
        assert!(selection.get().unwrap().is_empty());
        // Clearing twice is fine.
        selection.clear().unwrap();
    }
}

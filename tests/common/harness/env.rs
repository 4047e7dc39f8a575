//! Isolated test environment with a temp application directory.

use super::QnoteCommand;
use qnote::domain::{Note, parse_tag_list};
use qnote::store::{NoteStore, SqliteStore};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary `~/.qnote`-style directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Config, database, HEAD, and selection files all live inside it.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path used as the application directory
    config_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_dir = temp_dir.path().join("qnote");
        Self {
            _temp_dir: temp_dir,
            config_dir,
        }
    }

    /// Returns the application directory.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the path where the SQLite database is stored.
    pub fn db_path(&self) -> PathBuf {
        self.config_dir.join("storage").join("qnote.db")
    }

    /// Returns the cached-selection file path.
    pub fn selection_path(&self) -> PathBuf {
        self.config_dir.join("selected")
    }

    /// Opens the store directly, with the reserved notebooks in place.
    pub fn open_store(&self) -> SqliteStore {
        let mut store = SqliteStore::open(&self.db_path()).expect("Failed to open store");
        store.ensure_notebook("inbox").expect("ensure inbox");
        store.ensure_notebook("trash").expect("ensure trash");
        store
    }

    /// Adds a note to the default notebook via the library. Returns
    /// its UUID.
    pub fn add_note(&self, content: &str, tags: &str) -> String {
        self.add_note_in(content, tags, "inbox")
    }

    /// Adds a note to the named notebook via the library. Returns
    /// its UUID.
    pub fn add_note_in(&self, content: &str, tags: &str, notebook: &str) -> String {
        let mut store = self.open_store();
        store.ensure_notebook(notebook).expect("ensure notebook");
        let note = Note::create(content, parse_tag_list(tags).expect("valid tags"), 64)
            .expect("valid note");
        store.create_note(&note, notebook).expect("create note");
        note.id().to_string()
    }

    /// Creates a QnoteCommand configured for this test environment.
    pub fn cmd(&self) -> QnoteCommand {
        QnoteCommand::new().config_dir(&self.config_dir)
    }

    /// Writes a config file into the environment.
    pub fn write_config(&self, json: &str) {
        std::fs::create_dir_all(&self.config_dir).expect("Failed to create config dir");
        std::fs::write(self.config_dir.join("config.json"), json)
            .expect("Failed to write config");
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

//! Storage layer: the `NoteStore` trait, its error taxonomy, and the
//! SQLite implementation.

mod schema;
mod sqlite;

pub use schema::{create_schema, get_schema_version};
pub use sqlite::SqliteStore;

use crate::domain::{Note, NoteId, Tag};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur during store operations.
///
/// `Check` failures are precondition violations (missing notebook,
/// duplicate name, reserved-notebook mutation) and are reported to the
/// user verbatim. `Execution` wraps the underlying database error.
/// `Runtime` covers everything else, e.g. rows that no longer parse.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A precondition check failed; the message is user-facing.
    #[error("{0}")]
    Check(String),

    /// The underlying database operation failed.
    #[error("storage execution failed: {0}")]
    Execution(#[from] rusqlite::Error),

    /// A failure that fits neither category, e.g. corrupt stored data.
    #[error("storage error: {0}")]
    Runtime(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A notebook as stored, with its note count.
#[derive(Debug, Clone, PartialEq)]
pub struct NotebookRecord {
    name: String,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
    note_count: usize,
}

impl NotebookRecord {
    /// Creates a new NotebookRecord.
    pub fn new(
        name: impl Into<String>,
        created: DateTime<Utc>,
        modified: DateTime<Utc>,
        note_count: usize,
    ) -> Self {
        Self {
            name: name.into(),
            created,
            modified,
            note_count,
        }
    }

    /// Returns the notebook's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns when the notebook was created.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns when the notebook was last modified.
    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    /// Returns how many notes the notebook holds.
    pub fn note_count(&self) -> usize {
        self.note_count
    }
}

/// A tag paired with the number of notes carrying it.
#[derive(Debug, Clone, PartialEq)]
pub struct TagWithCount {
    tag: Tag,
    count: u32,
}

impl TagWithCount {
    /// Creates a new TagWithCount.
    pub fn new(tag: Tag, count: u32) -> Self {
        Self { tag, count }
    }

    /// Returns the tag.
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Returns the note count.
    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Interface to the note store.
///
/// The CLI only talks to this trait, keeping the SQLite implementation
/// swappable. Multi-row operations are transactional: on failure the
/// store is left unchanged.
pub trait NoteStore {
    // ===========================================
    // Notes
    // ===========================================

    /// Inserts a note into the named notebook.
    fn create_note(&mut self, note: &Note, notebook: &str) -> StoreResult<()>;

    /// Fetches a note by its full UUID.
    fn get_note(&self, id: &NoteId) -> StoreResult<Option<Note>>;

    /// Updates a note's title, content, tags, and modified timestamp.
    fn update_note(&mut self, note: &Note) -> StoreResult<()>;

    /// Permanently deletes a note.
    fn delete_note(&mut self, id: &NoteId) -> StoreResult<()>;

    /// Moves a note to another notebook.
    fn move_note(&mut self, id: &NoteId, notebook: &str) -> StoreResult<()>;

    /// Returns the name of the notebook holding the note.
    fn notebook_of(&self, id: &NoteId) -> StoreResult<Option<String>>;

    /// Lists notes in a notebook, most recently modified first.
    fn notes_in_notebook(&self, notebook: &str, limit: Option<usize>) -> StoreResult<Vec<Note>>;

    // ===========================================
    // Notebooks
    // ===========================================

    /// Creates a notebook; fails if the name is taken.
    fn create_notebook(&mut self, name: &str) -> StoreResult<()>;

    /// Creates a notebook if it does not exist. Returns true if created.
    fn ensure_notebook(&mut self, name: &str) -> StoreResult<bool>;

    /// Fetches a notebook with its note count.
    fn get_notebook(&self, name: &str) -> StoreResult<Option<NotebookRecord>>;

    /// Lists all notebooks, sorted by name.
    fn list_notebooks(&self) -> StoreResult<Vec<NotebookRecord>>;

    /// Renames a notebook; fails if the new name is taken.
    fn rename_notebook(&mut self, old: &str, new: &str) -> StoreResult<()>;

    /// Deletes an empty notebook; fails if it still holds notes.
    fn delete_notebook(&mut self, name: &str) -> StoreResult<()>;

    /// Moves every note from one notebook to another. Returns how many
    /// notes were moved.
    fn move_all_notes(&mut self, from: &str, to: &str) -> StoreResult<usize>;

    /// Permanently deletes every note in a notebook. Returns how many
    /// notes were deleted.
    fn clear_notebook(&mut self, name: &str) -> StoreResult<usize>;

    /// Finds notebooks whose name contains the pattern.
    fn find_notebooks(&self, pattern: &str) -> StoreResult<Vec<NotebookRecord>>;

    // ===========================================
    // Tags
    // ===========================================

    /// Lists all tags with their note counts, including zero counts.
    fn all_tags_with_count(&self) -> StoreResult<Vec<TagWithCount>>;

    /// Deletes the named tags. Returns how many were deleted.
    fn delete_tags(&mut self, tags: &[Tag]) -> StoreResult<usize>;

    /// Renames a tag; fails if the new name is taken.
    fn rename_tag(&mut self, old: &Tag, new: &Tag) -> StoreResult<()>;

    // ===========================================
    // Search
    // ===========================================

    /// Finds notes whose hyphen-less UUID contains the fragment.
    fn find_by_id_fragment(&self, fragment: &str) -> StoreResult<Vec<Note>>;

    /// Finds notes whose title contains the pattern.
    fn find_by_title(&self, pattern: &str) -> StoreResult<Vec<Note>>;

    /// Finds notes whose content contains the pattern.
    fn find_by_content(&self, pattern: &str) -> StoreResult<Vec<Note>>;

    /// Finds notes carrying every one of the given tags.
    fn find_by_tags(&self, tags: &[Tag]) -> StoreResult<Vec<Note>>;
}

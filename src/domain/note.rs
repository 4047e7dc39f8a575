//! Note struct: identity, title, content, timestamps, tags.

use crate::domain::{NoteId, Tag, content};
use chrono::{DateTime, Utc};
use std::fmt;

/// The kind of error that occurred when constructing a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseNoteErrorKind {
    EmptyTitle,
}

/// Error returned when constructing an invalid note.
#[derive(Debug, Clone)]
pub struct ParseNoteError {
    kind: ParseNoteErrorKind,
}

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseNoteErrorKind::EmptyTitle => write!(f, "invalid note: title cannot be empty"),
        }
    }
}

impl std::error::Error for ParseNoteError {}

/// A single note.
///
/// Notes carry a UUID identity, a derived title, free-text content,
/// creation/modification timestamps, and a set of tags. Which notebook a
/// note belongs to is tracked by the store, not by the note itself.
///
/// # Examples
///
/// ```
/// use qnote::domain::Note;
///
/// let note = Note::create("Shopping list\nmilk, eggs", Vec::new(), 64).unwrap();
/// assert_eq!(note.title(), "Shopping list");
/// ```
#[derive(Clone, PartialEq)]
pub struct Note {
    id: NoteId,
    title: String,
    content: String,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
    tags: Vec<Tag>,
}

impl Note {
    /// Reconstructs a Note from stored parts.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the title is empty or whitespace-only.
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        created: DateTime<Utc>,
        modified: DateTime<Utc>,
        tags: Vec<Tag>,
    ) -> Result<Self, ParseNoteError> {
        let title = title.into();
        let trimmed = title.trim();

        if trimmed.is_empty() {
            return Err(ParseNoteError {
                kind: ParseNoteErrorKind::EmptyTitle,
            });
        }

        Ok(Self {
            id,
            title: trimmed.to_string(),
            content: content.into(),
            created,
            modified,
            tags: deduplicate_tags(tags),
        })
    }

    /// Creates a fresh note from content, deriving the title.
    ///
    /// The title is the first non-empty content line truncated on a word
    /// boundary at `title_width`. Timestamps are set to now.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the content yields an empty title.
    pub fn create(
        content: impl Into<String>,
        tags: Vec<Tag>,
        title_width: usize,
    ) -> Result<Self, ParseNoteError> {
        let content = content.into();
        let title = content::extract_title(&content, title_width);
        let now = Utc::now();
        Self::new(NoteId::new(), title, content, now, now, tags)
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the note was created.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns when the note was last modified.
    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    /// Returns the note's tags.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Replaces the content, re-deriving the title and bumping the
    /// modified timestamp.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the new content yields an empty title.
    pub fn update_content(
        &mut self,
        content: impl Into<String>,
        title_width: usize,
    ) -> Result<(), ParseNoteError> {
        let content = content.into();
        let title = content::extract_title(&content, title_width);
        if title.is_empty() {
            return Err(ParseNoteError {
                kind: ParseNoteErrorKind::EmptyTitle,
            });
        }
        self.title = title;
        self.content = content;
        self.modified = Utc::now();
        Ok(())
    }

    /// Replaces the tag set, bumping the modified timestamp.
    ///
    /// Duplicates are removed (first occurrence kept).
    pub fn set_tags(&mut self, tags: Vec<Tag>) {
        self.tags = deduplicate_tags(tags);
        self.modified = Utc::now();
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id.fragment())
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("created", &self.created)
            .field("modified", &self.modified)
            .field("tags", &self.tags)
            .finish()
    }
}

/// Removes duplicate tags (first occurrence kept).
fn deduplicate_tags(tags: Vec<Tag>) -> Vec<Tag> {
    let mut seen = Vec::new();
    for tag in tags {
        if !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_note_id() -> NoteId {
        "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap()
    }

    fn test_datetime() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn test_tags() -> Vec<Tag> {
        vec![Tag::new("#rust").unwrap(), Tag::new("#cli").unwrap()]
    }

    // ===========================================
    // Construction
    // ===========================================

    #[test]
    fn new_stores_all_fields() {
        let note = Note::new(
            test_note_id(),
            "A title",
            "A title\nand content",
            test_datetime(),
            test_datetime(),
            test_tags(),
        )
        .unwrap();

        assert_eq!(note.id(), &test_note_id());
        assert_eq!(note.title(), "A title");
        assert_eq!(note.content(), "A title\nand content");
        assert_eq!(note.created(), test_datetime());
        assert_eq!(note.modified(), test_datetime());
        assert_eq!(note.tags().len(), 2);
    }

    #[test]
    fn new_rejects_empty_title() {
        let result = Note::new(
            test_note_id(),
            "",
            "content",
            test_datetime(),
            test_datetime(),
            Vec::new(),
        );
        assert!(result.is_err());

        let result = Note::new(
            test_note_id(),
            "   ",
            "content",
            test_datetime(),
            test_datetime(),
            Vec::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_trims_title() {
        let note = Note::new(
            test_note_id(),
            "  padded  ",
            "",
            test_datetime(),
            test_datetime(),
            Vec::new(),
        )
        .unwrap();
        assert_eq!(note.title(), "padded");
    }

    #[test]
    fn new_deduplicates_tags() {
        let tags = vec![
            Tag::new("#dup").unwrap(),
            Tag::new("#dup").unwrap(),
            Tag::new("#other").unwrap(),
        ];
        let note = Note::new(
            test_note_id(),
            "title",
            "",
            test_datetime(),
            test_datetime(),
            tags,
        )
        .unwrap();
        assert_eq!(note.tags().len(), 2);
    }

    #[test]
    fn create_derives_title_from_content() {
        let note = Note::create("First line here\nsecond line", Vec::new(), 64).unwrap();
        assert_eq!(note.title(), "First line here");
        assert_eq!(note.created(), note.modified());
    }

    #[test]
    fn create_truncates_title_on_word_boundary() {
        let note = Note::create("one two three four", Vec::new(), 13).unwrap();
        assert_eq!(note.title(), "one two three");
    }

    #[test]
    fn create_rejects_empty_content() {
        assert!(Note::create("", Vec::new(), 64).is_err());
        assert!(Note::create("\n\n  \n", Vec::new(), 64).is_err());
    }

    // ===========================================
    // Mutation
    // ===========================================

    #[test]
    fn update_content_rederives_title_and_bumps_modified() {
        let mut note = Note::new(
            test_note_id(),
            "Old title",
            "Old title",
            test_datetime(),
            test_datetime(),
            Vec::new(),
        )
        .unwrap();

        note.update_content("New title\nmore text", 64).unwrap();

        assert_eq!(note.title(), "New title");
        assert_eq!(note.content(), "New title\nmore text");
        assert_eq!(note.created(), test_datetime());
        assert!(note.modified() > test_datetime());
    }

    #[test]
    fn update_content_rejects_empty() {
        let mut note = Note::create("keep me", Vec::new(), 64).unwrap();
        assert!(note.update_content("  \n ", 64).is_err());
        assert_eq!(note.title(), "keep me", "failed update leaves note intact");
    }

    #[test]
    fn set_tags_replaces_and_bumps_modified() {
        let mut note = Note::new(
            test_note_id(),
            "title",
            "title",
            test_datetime(),
            test_datetime(),
            test_tags(),
        )
        .unwrap();

        note.set_tags(vec![Tag::new("#only").unwrap()]);

        assert_eq!(note.tags().len(), 1);
        assert_eq!(note.tags()[0].as_str(), "#only");
        assert!(note.modified() > test_datetime());
    }

    // ===========================================
    // Display & Debug
    // ===========================================

    #[test]
    fn display_shows_title_and_fragment() {
        let note = Note::new(
            test_note_id(),
            "Shopping list",
            "",
            test_datetime(),
            test_datetime(),
            Vec::new(),
        )
        .unwrap();
        assert_eq!(format!("{}", note), "Shopping list [67e55044]");
    }

    #[test]
    fn debug_omits_content_blob() {
        let note = Note::create("secret content body", Vec::new(), 5).unwrap();
        let debug = format!("{:?}", note);
        assert!(debug.contains("Note"));
        assert!(debug.contains("title"));
        assert!(!debug.contains("content body"));
    }
}

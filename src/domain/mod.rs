//! Core types: Note, NoteId (UUID), Tag, NotebookName, content parsing

pub mod content;
mod note;
mod note_id;
mod notebook;
mod tag;

pub use note::{Note, ParseNoteError};
pub use note_id::{NoteId, ParseNoteIdError};
pub use notebook::{NotebookName, ParseNotebookNameError};
pub use tag::{ParseTagError, Tag, format_tag_list, parse_tag_list};

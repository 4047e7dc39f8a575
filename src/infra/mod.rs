//! Editor subprocess, terminal prompts, flat status files

pub mod editor;
pub mod prompt;
mod state;

pub use editor::{CommandEditor, EditorLauncher, NOTE_TEMPLATE, strip_template};
pub use state::{HeadFile, SelectionFile};

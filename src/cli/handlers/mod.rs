//! Command handlers for the CLI.

mod add;
mod clear;
mod edit;
mod list;
mod mv;
mod notebook;
mod open;
mod remove;
mod search;
mod select;
mod status;
mod tag;

pub use add::handle_add;
pub use clear::handle_clear;
pub use edit::handle_edit;
pub use list::handle_list;
pub use mv::handle_move;
pub use notebook::handle_notebook;
pub use open::handle_open;
pub use remove::handle_remove;
pub use search::handle_search;
pub use select::handle_select;
pub use status::handle_status;
pub use tag::handle_tag;

use anyhow::{Context, Result, bail};
use clap::CommandFactory;

use crate::cli::config::Config;
use crate::cli::output::summary_line;
use crate::cli::{Cli, CompletionsArgs};
use crate::domain::Note;
use crate::infra::{HeadFile, SelectionFile, prompt};
use crate::store::{NoteStore, SqliteStore};

// ===========================================
// Shared Utilities
// ===========================================

/// Opens the store and makes sure the reserved notebooks exist.
pub(crate) fn open_store(config: &Config) -> Result<SqliteStore> {
    let db_path = config.db_path();
    let mut store = SqliteStore::open(&db_path)
        .with_context(|| format!("failed to open note store at {}", db_path.display()))?;
    store.ensure_notebook(&config.notebook.name_default)?;
    store.ensure_notebook(&config.notebook.name_trash)?;
    Ok(store)
}

/// Returns the name of the notebook HEAD points at.
pub(crate) fn head_notebook(config: &Config) -> Result<String> {
    HeadFile::new(config.head_path()).get(&config.notebook.name_default)
}

/// Result of resolving a note identifier.
#[derive(Debug)]
pub(crate) enum ResolveResult {
    /// Exactly one note matched.
    Unique(Note),
    /// Multiple notes matched (ambiguous).
    Ambiguous(Vec<Note>),
    /// No notes matched.
    NotFound,
}

/// Resolves a note identifier: a full UUID, or a UUID fragment with
/// hyphens ignored.
pub(crate) fn resolve_note(store: &SqliteStore, identifier: &str) -> Result<ResolveResult> {
    let identifier = identifier.trim();

    // A full UUID is looked up directly.
    if let Ok(id) = identifier.parse::<crate::domain::NoteId>() {
        return Ok(match store.get_note(&id)? {
            Some(note) => ResolveResult::Unique(note),
            None => ResolveResult::NotFound,
        });
    }

    let matches = store
        .find_by_id_fragment(identifier)
        .with_context(|| "failed to search by UUID fragment")?;

    Ok(match matches.len() {
        0 => ResolveResult::NotFound,
        1 => ResolveResult::Unique(matches.into_iter().next().unwrap()),
        _ => ResolveResult::Ambiguous(matches),
    })
}

/// Prints detailed information about ambiguous notes to help
/// distinguish them.
pub(crate) fn print_ambiguous_notes(identifier: &str, notes: &[Note]) {
    eprintln!("Ambiguous: '{}' matches {} notes:", identifier, notes.len());
    for note in notes {
        eprintln!("  {} - {}", note.id(), note.title());
    }
    eprintln!();
    eprintln!("Use a longer UUID fragment to specify which note you mean.");
}

/// Resolves an identifier to exactly one note or fails with a
/// user-facing message.
pub(crate) fn resolve_unique(store: &SqliteStore, identifier: &str) -> Result<Note> {
    match resolve_note(store, identifier)? {
        ResolveResult::Unique(note) => Ok(note),
        ResolveResult::Ambiguous(notes) => {
            print_ambiguous_notes(identifier, &notes);
            bail!("ambiguous note identifier");
        }
        ResolveResult::NotFound => bail!("note not found: '{}'", identifier),
    }
}

/// Returns the notes cached by `select`, skipping any that have been
/// deleted since.
pub(crate) fn selected_notes(store: &SqliteStore, config: &Config) -> Result<Vec<Note>> {
    let ids = SelectionFile::new(config.selection_path()).get()?;
    if ids.is_empty() {
        bail!("no cached selection (run `qnote select` first)");
    }

    let mut notes = Vec::new();
    for id in &ids {
        match store.get_note(id)? {
            Some(note) => notes.push(note),
            None => eprintln!("warning: selected note `{}` no longer exists", id),
        }
    }
    if notes.is_empty() {
        bail!("none of the selected notes exist anymore");
    }
    Ok(notes)
}

/// Resolves the target notes for a note-verb: an explicit identifier,
/// the cached selection, or an interactive pick from the open notebook.
///
/// Returns `None` when the user cancels the interactive pick.
pub(crate) fn gather_targets(
    store: &SqliteStore,
    config: &Config,
    uuid: Option<&str>,
    selected: bool,
    multiple: bool,
) -> Result<Option<Vec<Note>>> {
    if let Some(identifier) = uuid {
        return Ok(Some(vec![resolve_unique(store, identifier)?]));
    }
    if selected {
        return Ok(Some(selected_notes(store, config)?));
    }
    pick_from_notebook(store, config, multiple)
}

/// Interactively picks note(s) from the open notebook.
pub(crate) fn pick_from_notebook(
    store: &SqliteStore,
    config: &Config,
    multiple: bool,
) -> Result<Option<Vec<Note>>> {
    let head = head_notebook(config)?;
    let notes = store.notes_in_notebook(&head, None)?;

    if notes.is_empty() {
        println!("No notes in notebook `{}`.", head);
        return Ok(None);
    }

    println!("Notes in `{}`:", head);
    for (i, note) in notes.iter().enumerate() {
        println!(
            "  {}. {}",
            i + 1,
            summary_line(
                note,
                config.display.show_uuid,
                config.display.show_date,
                config.display.width,
            )
        );
    }

    let Some(indices) = prompt::select_indices(notes.len(), multiple)? else {
        println!("Cancelled.");
        return Ok(None);
    };

    let mut picked = Vec::with_capacity(indices.len());
    for index in indices {
        picked.push(notes[index].clone());
    }
    Ok(Some(picked))
}

/// Prints one summary line per note.
pub(crate) fn print_note_lines(notes: &[Note], show_uuid: bool, show_date: bool, width: usize) {
    for note in notes {
        println!("{}", summary_line(note, show_uuid, show_date, width));
    }
}

pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "qnote", &mut std::io::stdout());
    Ok(())
}

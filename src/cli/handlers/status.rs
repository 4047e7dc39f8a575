//! Status command handler.

use anyhow::{Result, bail};

use super::{head_notebook, open_store};
use crate::cli::StatusArgs;
use crate::cli::config::Config;
use crate::cli::output::summary_line;
use crate::store::{NoteStore, SqliteStore};

pub fn handle_status(args: &StatusArgs, config: &Config) -> Result<()> {
    let store = open_store(config)?;
    show_notebook_status(&store, config, args.name.as_deref())
}

/// Shows a notebook's metadata and its most recently updated notes.
///
/// Shared by `status` and `notebook status`.
pub(crate) fn show_notebook_status(
    store: &SqliteStore,
    config: &Config,
    name: Option<&str>,
) -> Result<()> {
    let name = match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => head_notebook(config)?,
    };

    let Some(record) = store.get_notebook(&name)? else {
        bail!("notebook `{}` does not exist", name);
    };

    let time_format = "%Y-%m-%d %H:%M:%S";
    println!("Notebook: {}", record.name());
    println!(
        "Created: {}  Updated: {}",
        record.created().format(time_format),
        record.modified().format(time_format)
    );
    println!("Notes: {}", record.note_count());

    let recent = store.notes_in_notebook(&name, Some(config.notebook.status_limit))?;
    if !recent.is_empty() {
        println!("Recently updated:");
        for note in &recent {
            println!(
                "  {}",
                summary_line(note, config.display.show_uuid, true, config.display.width)
            );
        }
    }
    Ok(())
}

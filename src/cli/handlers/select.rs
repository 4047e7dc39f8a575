//! Select command handler.

use anyhow::Result;

use super::{open_store, pick_from_notebook, print_note_lines};
use crate::cli::SelectArgs;
use crate::cli::config::Config;
use crate::domain::NoteId;
use crate::infra::SelectionFile;

pub fn handle_select(args: &SelectArgs, config: &Config) -> Result<()> {
    let store = open_store(config)?;

    let Some(notes) = pick_from_notebook(&store, config, args.multiple)? else {
        return Ok(());
    };

    let ids: Vec<NoteId> = notes.iter().map(|n| n.id().clone()).collect();
    SelectionFile::new(config.selection_path()).set(&ids)?;

    println!();
    println!("Selected:");
    print_note_lines(
        &notes,
        args.uuid || config.display.show_uuid,
        args.date || config.display.show_date,
        config.display.width,
    );
    Ok(())
}

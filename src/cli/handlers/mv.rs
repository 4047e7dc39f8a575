//! Move command handler.

use anyhow::{Result, bail};

use super::{gather_targets, open_store};
use crate::cli::MoveArgs;
use crate::cli::config::Config;
use crate::store::NoteStore;

pub fn handle_move(args: &MoveArgs, config: &Config) -> Result<()> {
    let mut store = open_store(config)?;

    // Check the destination up front so an interactive pick is not
    // wasted on a doomed move.
    if store.get_notebook(&args.notebook)?.is_none() {
        bail!("notebook `{}` does not exist", args.notebook);
    }

    let Some(notes) =
        gather_targets(&store, config, args.uuid.as_deref(), args.selected, true)?
    else {
        return Ok(());
    };

    for note in &notes {
        store.move_note(note.id(), &args.notebook)?;
        println!("Moved: {} -> {}", note, args.notebook);
    }

    if notes.len() > 1 {
        println!();
        println!("{} note(s) moved to `{}`", notes.len(), args.notebook);
    }
    Ok(())
}

//! Remove command handler (soft delete into the trash notebook).

use anyhow::Result;

use super::{gather_targets, open_store};
use crate::cli::RemoveArgs;
use crate::cli::config::Config;
use crate::infra::prompt;
use crate::store::NoteStore;

pub fn handle_remove(args: &RemoveArgs, config: &Config) -> Result<()> {
    let mut store = open_store(config)?;
    let trash = &config.notebook.name_trash;

    let Some(notes) =
        gather_targets(&store, config, args.uuid.as_deref(), args.selected, true)?
    else {
        return Ok(());
    };

    let mut trashed = 0;
    let mut deleted = 0;

    for note in notes {
        let in_trash = store.notebook_of(note.id())?.as_deref() == Some(trash.as_str());

        if in_trash {
            // Removing from the trash deletes for good.
            let question = format!("Permanently delete `{}`?", note);
            if args.yes || prompt::confirm(&question, false)? {
                store.delete_note(note.id())?;
                deleted += 1;
                println!("Deleted: {}", note);
            } else {
                println!("Kept: {}", note);
            }
        } else {
            store.move_note(note.id(), trash)?;
            trashed += 1;
            println!("Moved to trash: {}", note);
        }
    }

    if trashed + deleted > 1 {
        println!();
        println!(
            "{} note(s) moved to trash, {} permanently deleted",
            trashed, deleted
        );
    }
    Ok(())
}

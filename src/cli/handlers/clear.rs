//! Clear command handler (empty the trash notebook).

use anyhow::Result;

use super::open_store;
use crate::cli::ClearArgs;
use crate::cli::config::Config;
use crate::infra::prompt;
use crate::store::NoteStore;

pub fn handle_clear(args: &ClearArgs, config: &Config) -> Result<()> {
    let mut store = open_store(config)?;
    let trash = &config.notebook.name_trash;

    let count = store
        .get_notebook(trash)?
        .map(|record| record.note_count())
        .unwrap_or(0);

    if count == 0 {
        println!("Trash is empty.");
        return Ok(());
    }

    let question = format!("Permanently delete {} note(s) from trash?", count);
    if !args.yes && !prompt::confirm(&question, false)? {
        println!("Cancelled.");
        return Ok(());
    }

    let deleted = store.clear_notebook(trash)?;
    println!("Deleted {} note(s) from trash", deleted);
    Ok(())
}

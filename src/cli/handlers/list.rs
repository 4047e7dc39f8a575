//! List command handler.

use anyhow::Result;

use super::{head_notebook, open_store, print_note_lines};
use crate::cli::ListArgs;
use crate::cli::config::Config;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::store::NoteStore;

pub fn handle_list(args: &ListArgs, config: &Config) -> Result<()> {
    let store = open_store(config)?;
    let notebook = head_notebook(config)?;

    let notes = store.notes_in_notebook(&notebook, None)?;

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes in notebook `{}`.", notebook);
            } else {
                let show_uuid = args.uuid || config.display.show_uuid;
                let show_date = args.date || config.display.show_date;
                print_note_lines(&notes, show_uuid, show_date, config.display.width);
                println!();
                println!("{} note(s) in `{}`", notes.len(), notebook);
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.iter().map(NoteListing::from_note).collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

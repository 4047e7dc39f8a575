//! Open command handler (read-only note view).

use anyhow::Result;

use super::{gather_targets, open_store};
use crate::cli::OpenArgs;
use crate::cli::config::Config;
use crate::cli::output::render_note;

pub fn handle_open(args: &OpenArgs, config: &Config) -> Result<()> {
    let store = open_store(config)?;

    let Some(notes) =
        gather_targets(&store, config, args.uuid.as_deref(), args.selected, false)?
    else {
        return Ok(());
    };

    for (i, note) in notes.iter().enumerate() {
        if i > 0 {
            println!();
            println!("---");
            println!();
        }
        println!("{}", render_note(note, config.display.width));
    }
    Ok(())
}

//! Search command handlers.

use anyhow::{Context, Result};

use super::open_store;
use crate::cli::config::Config;
use crate::cli::output::{NoteListing, Output, OutputFormat, summary_line};
use crate::cli::{SearchArgs, SearchCommand};
use crate::domain::{Note, parse_tag_list};
use crate::store::NoteStore;

pub fn handle_search(args: &SearchArgs, config: &Config) -> Result<()> {
    let store = open_store(config)?;

    let notes = match &args.command {
        SearchCommand::Uuid { pattern } => store.find_by_id_fragment(pattern)?,
        SearchCommand::Title { pattern } => store.find_by_title(pattern)?,
        SearchCommand::Content { pattern } => store.find_by_content(pattern)?,
        SearchCommand::Tags { tags } => {
            let tags =
                parse_tag_list(tags).with_context(|| format!("invalid tag list '{}'", tags))?;
            store.find_by_tags(&tags)?
        }
    };

    print_results(&notes, args.format, config)
}

fn print_results(notes: &[Note], format: OutputFormat, config: &Config) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No matching notes.");
            } else {
                // Search results always show UUIDs so they can feed
                // the uuid-taking verbs.
                for note in notes {
                    println!("{}", summary_line(note, true, true, config.display.width));
                }
                println!();
                println!("{} matching note(s)", notes.len());
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

//! Tag command handlers.

use anyhow::{Context, Result};

use super::open_store;
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat, TagListing};
use crate::cli::{TagArgs, TagCommand};
use crate::domain::Tag;
use crate::infra::prompt;
use crate::store::NoteStore;

pub fn handle_tag(args: &TagArgs, config: &Config) -> Result<()> {
    match &args.command {
        TagCommand::List { format } => list(config, *format),
        TagCommand::ClearEmpty { yes } => clear_empty(config, *yes),
        TagCommand::Rename { old_name, new_name } => rename(config, old_name, new_name),
    }
}

fn list(config: &Config, format: OutputFormat) -> Result<()> {
    let store = open_store(config)?;
    let tags = store.all_tags_with_count()?;

    match format {
        OutputFormat::Human => {
            if tags.is_empty() {
                println!("No tags.");
            } else {
                for twc in &tags {
                    println!("{:>4}  {}", twc.count(), twc.tag());
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<TagListing> = tags.iter().map(TagListing::from_count).collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

/// Deletes tags that no note carries.
fn clear_empty(config: &Config, yes: bool) -> Result<()> {
    let mut store = open_store(config)?;

    let empty: Vec<Tag> = store
        .all_tags_with_count()?
        .into_iter()
        .filter(|twc| twc.count() == 0)
        .map(|twc| twc.tag().clone())
        .collect();

    if empty.is_empty() {
        println!("No empty tags.");
        return Ok(());
    }

    println!("Empty tags:");
    for tag in &empty {
        println!("  {}", tag);
    }
    let question = format!("Delete {} tag(s)?", empty.len());
    if !yes && !prompt::confirm(&question, false)? {
        println!("Cancelled.");
        return Ok(());
    }

    let deleted = store.delete_tags(&empty)?;
    println!("Deleted {} tag(s)", deleted);
    Ok(())
}

fn rename(config: &Config, old_name: &str, new_name: &str) -> Result<()> {
    let old = Tag::new(old_name).with_context(|| format!("invalid tag '{}'", old_name))?;
    let new = Tag::new(new_name).with_context(|| format!("invalid tag '{}'", new_name))?;

    let mut store = open_store(config)?;
    store.rename_tag(&old, &new)?;

    println!("Renamed tag {} -> {}", old, new);
    Ok(())
}

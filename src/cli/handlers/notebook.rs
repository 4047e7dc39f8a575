//! Notebook command handlers.

use anyhow::{Result, bail};

use super::status::show_notebook_status;
use super::{head_notebook, open_store};
use crate::cli::config::Config;
use crate::cli::output::{NotebookListing, Output, OutputFormat};
use crate::cli::{NotebookArgs, NotebookCommand};
use crate::domain::NotebookName;
use crate::infra::{HeadFile, prompt};
use crate::store::NoteStore;

pub fn handle_notebook(args: &NotebookArgs, config: &Config) -> Result<()> {
    match &args.command {
        NotebookCommand::Create { name } => create(config, name),
        NotebookCommand::Open { name } => open(config, name),
        NotebookCommand::Delete { name, force, yes } => delete(config, name, *force, *yes),
        NotebookCommand::List { format } => list(config, *format),
        NotebookCommand::Rename { old_name, new_name } => rename(config, old_name, new_name),
        NotebookCommand::Search { pattern } => search(config, pattern),
        NotebookCommand::Status { name } => {
            let store = open_store(config)?;
            show_notebook_status(&store, config, name.as_deref())
        }
    }
}

/// Fails when `name` is one of the reserved notebooks.
fn reject_reserved(config: &Config, name: &str, action: &str) -> Result<()> {
    if name == config.notebook.name_default || name == config.notebook.name_trash {
        bail!("cannot {} reserved notebook `{}`", action, name);
    }
    Ok(())
}

fn create(config: &Config, name: &str) -> Result<()> {
    let name = NotebookName::new(name)?;
    let mut store = open_store(config)?;
    store.create_notebook(name.as_str())?;
    println!("Created notebook `{}`", name);
    Ok(())
}

fn open(config: &Config, name: &str) -> Result<()> {
    let store = open_store(config)?;
    if store.get_notebook(name)?.is_none() {
        bail!("notebook `{}` does not exist", name);
    }
    HeadFile::new(config.head_path()).set(name)?;
    println!("Opened notebook `{}`", name);
    Ok(())
}

fn delete(config: &Config, name: &str, force: bool, yes: bool) -> Result<()> {
    reject_reserved(config, name, "delete")?;

    let mut store = open_store(config)?;
    let Some(record) = store.get_notebook(name)? else {
        bail!("notebook `{}` does not exist", name);
    };

    if record.note_count() > 0 {
        let question = if force {
            format!(
                "Permanently delete notebook `{}` and its {} note(s)?",
                name,
                record.note_count()
            )
        } else {
            format!(
                "Delete notebook `{}`, moving its {} note(s) to trash?",
                name,
                record.note_count()
            )
        };
        if !yes && !prompt::confirm(&question, false)? {
            println!("Cancelled.");
            return Ok(());
        }

        if force {
            let deleted = store.clear_notebook(name)?;
            println!("Permanently deleted {} note(s)", deleted);
        } else {
            let moved = store.move_all_notes(name, &config.notebook.name_trash)?;
            println!("Moved {} note(s) to trash", moved);
        }
    }

    store.delete_notebook(name)?;
    reset_head_if_needed(config, name)?;
    println!("Deleted notebook `{}`", name);
    Ok(())
}

fn list(config: &Config, format: OutputFormat) -> Result<()> {
    let store = open_store(config)?;
    let notebooks = store.list_notebooks()?;
    let head = head_notebook(config)?;

    match format {
        OutputFormat::Human => {
            for record in &notebooks {
                let marker = if record.name() == head { "*" } else { " " };
                println!(
                    "{} {}  ({} note{})",
                    marker,
                    record.name(),
                    record.note_count(),
                    if record.note_count() == 1 { "" } else { "s" }
                );
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NotebookListing> = notebooks
                .iter()
                .map(NotebookListing::from_record)
                .collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn rename(config: &Config, old_name: &str, new_name: &str) -> Result<()> {
    reject_reserved(config, old_name, "rename")?;
    reject_reserved(config, new_name, "overwrite")?;
    let new_name = NotebookName::new(new_name)?;

    let mut store = open_store(config)?;
    store.rename_notebook(old_name, new_name.as_str())?;

    // Keep HEAD pointing at the same notebook under its new name.
    let head = HeadFile::new(config.head_path());
    if head.get(&config.notebook.name_default)? == old_name {
        head.set(new_name.as_str())?;
    }

    println!("Renamed notebook `{}` -> `{}`", old_name, new_name);
    Ok(())
}

fn search(config: &Config, pattern: &str) -> Result<()> {
    let store = open_store(config)?;
    let notebooks = store.find_notebooks(pattern)?;

    if notebooks.is_empty() {
        println!("No matching notebooks.");
        return Ok(());
    }
    for record in &notebooks {
        println!(
            "{}  ({} note{})",
            record.name(),
            record.note_count(),
            if record.note_count() == 1 { "" } else { "s" }
        );
    }
    Ok(())
}

/// Points HEAD back at the default notebook if it names the deleted one.
fn reset_head_if_needed(config: &Config, deleted: &str) -> Result<()> {
    let head = HeadFile::new(config.head_path());
    if head.get(&config.notebook.name_default)? == deleted {
        head.set(&config.notebook.name_default)?;
        println!(
            "HEAD was pointing at `{}`; switched to `{}`",
            deleted, config.notebook.name_default
        );
    }
    Ok(())
}

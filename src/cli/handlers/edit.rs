//! Edit command handler.

use anyhow::{Context, Result};

use super::{gather_targets, open_store};
use crate::cli::EditArgs;
use crate::cli::config::Config;
use crate::domain::{Note, content};
use crate::infra::{CommandEditor, EditorLauncher};
use crate::store::{NoteStore, SqliteStore};

pub fn handle_edit(args: &EditArgs, config: &Config) -> Result<()> {
    let editor = CommandEditor::new(config.editor_command(args.editor.as_deref()));
    handle_edit_impl(args, config, &editor)
}

/// Internal implementation that accepts a generic editor launcher.
pub(crate) fn handle_edit_impl<E: EditorLauncher>(
    args: &EditArgs,
    config: &Config,
    editor: &E,
) -> Result<()> {
    let mut store = open_store(config)?;

    let Some(notes) =
        gather_targets(&store, config, args.uuid.as_deref(), args.selected, false)?
    else {
        return Ok(());
    };

    for note in notes {
        edit_one(&mut store, config, editor, note)?;
    }
    Ok(())
}

fn edit_one<E: EditorLauncher>(
    store: &mut SqliteStore,
    config: &Config,
    editor: &E,
    mut note: Note,
) -> Result<()> {
    let edited = editor
        .edit(note.content())
        .with_context(|| format!("failed to edit note `{}`", note.id()))?;

    if edited == note.content() {
        println!("No changes: {}", note);
        return Ok(());
    }

    // Re-apply the tag rules to the edited content.
    let (stored, tags) = if config.tag.auto_parse {
        let tags = content::extract_tags(&edited);
        let stored = if config.tag.auto_remove_from_content {
            content::strip_tag_blocks(&edited)
        } else {
            edited
        };
        (stored, Some(tags))
    } else {
        (edited, None)
    };

    note.update_content(stored, config.note.title_width)
        .context("edited note has no content left")?;
    if let Some(tags) = tags
        && !tags.is_empty()
    {
        note.set_tags(tags);
    }

    store.update_note(&note)?;
    println!("Updated: {}", note);
    Ok(())
}

//! Add command handler.

use anyhow::{Context, Result, bail};

use super::{head_notebook, open_store};
use crate::cli::AddArgs;
use crate::cli::config::Config;
use crate::domain::{Note, Tag, content, parse_tag_list};
use crate::infra::{CommandEditor, EditorLauncher, NOTE_TEMPLATE, strip_template};
use crate::store::NoteStore;

pub fn handle_add(args: &AddArgs, config: &Config) -> Result<()> {
    let mut store = open_store(config)?;
    let notebook = head_notebook(config)?;

    // HEAD can point at a notebook that has since been deleted.
    if store.get_notebook(&notebook)?.is_none() {
        bail!("notebook `{}` does not exist", notebook);
    }

    // 1. Obtain raw content, from the flag or the editor.
    let raw = match &args.content {
        Some(content) => content.clone(),
        None => {
            let editor = CommandEditor::new(config.editor_command(None));
            let edited = editor.edit(NOTE_TEMPLATE)?;
            if edited == NOTE_TEMPLATE {
                // Untouched template: nothing to add.
                println!("Aborted: empty note.");
                return Ok(());
            }
            strip_template(&edited)
        }
    };

    // 2. Resolve tags: explicit flag wins over auto-parsing.
    let (note_content, tags) = prepare_note(&raw, args.tags.as_deref(), config)?;

    if note_content.trim().is_empty() {
        bail!("note content is empty");
    }

    // 3. Build and store the note.
    let note = Note::create(note_content, tags, config.note.title_width)
        .context("failed to create note")?;
    store.create_note(&note, &notebook)?;

    println!("Added: {} -> {}", note, notebook);
    Ok(())
}

/// Applies the tag rules to raw content: explicit tags win, otherwise
/// tags are parsed from `^^^...^^^` blocks (and the blocks optionally
/// removed from the stored content).
pub(crate) fn prepare_note(
    raw: &str,
    explicit_tags: Option<&str>,
    config: &Config,
) -> Result<(String, Vec<Tag>)> {
    if let Some(tag_list) = explicit_tags {
        let tags = parse_tag_list(tag_list)
            .with_context(|| format!("invalid tag list '{}'", tag_list))?;
        return Ok((raw.to_string(), tags));
    }

    if !config.tag.auto_parse {
        return Ok((raw.to_string(), Vec::new()));
    }

    let tags = content::extract_tags(raw);
    let stored = if config.tag.auto_remove_from_content {
        content::strip_tag_blocks(raw)
    } else {
        raw.to_string()
    };
    Ok((stored, tags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn explicit_tags_win_over_blocks() {
        let config = Config::default();
        let raw = "Body\n^^^#from_block^^^";

        let (stored, tags) = prepare_note(raw, Some("#explicit"), &config).unwrap();

        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].as_str(), "#explicit");
        assert_eq!(stored, raw, "content untouched when tags are explicit");
    }

    #[test]
    fn auto_parse_extracts_and_strips() {
        let config = Config::default();
        let raw = "Body text\n\n^^^#auto, #parsed^^^";

        let (stored, tags) = prepare_note(raw, None, &config).unwrap();

        assert_eq!(tags.len(), 2);
        assert_eq!(stored, "Body text");
    }

    #[test]
    fn auto_parse_can_keep_blocks() {
        let mut config = Config::default();
        config.tag.auto_remove_from_content = false;
        let raw = "Body\n^^^#kept^^^";

        let (stored, tags) = prepare_note(raw, None, &config).unwrap();

        assert_eq!(tags.len(), 1);
        assert_eq!(stored, raw);
    }

    #[test]
    fn auto_parse_disabled_yields_no_tags() {
        let mut config = Config::default();
        config.tag.auto_parse = false;
        let raw = "Body\n^^^#ignored^^^";

        let (stored, tags) = prepare_note(raw, None, &config).unwrap();

        assert!(tags.is_empty());
        assert_eq!(stored, raw);
    }

    #[test]
    fn invalid_explicit_tags_fail() {
        let config = Config::default();
        assert!(prepare_note("Body", Some("not_a_tag"), &config).is_err());
    }
}

//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// qnote - quick personal notes in notebooks
#[derive(Parser, Debug)]
#[command(name = "qnote", version, about, long_about = None)]
pub struct Cli {
    /// Application directory (overrides ~/.qnote)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new note to the open notebook
    Add(AddArgs),

    /// Edit a note in your editor
    Edit(EditArgs),

    /// List notes in the open notebook
    #[command(name = "list", alias = "ls")]
    List(ListArgs),

    /// Move notes to another notebook
    #[command(name = "move", alias = "mv")]
    Move(MoveArgs),

    /// Manage notebooks
    Notebook(NotebookArgs),

    /// Show a note's contents (read-only)
    Open(OpenArgs),

    /// Move notes to the trash notebook
    #[command(name = "remove", alias = "rm")]
    Remove(RemoveArgs),

    /// Select notes interactively for later commands
    Select(SelectArgs),

    /// Show the status of a notebook
    Status(StatusArgs),

    /// Manage tags
    Tag(TagArgs),

    /// Search notes by UUID, title, content, or tags
    Search(SearchArgs),

    /// Empty the trash notebook
    Clear(ClearArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Note content; omit to compose in your editor
    #[arg(short, long)]
    pub content: Option<String>,

    /// Tags for the note, comma-separated (e.g. "#work, #todo")
    #[arg(short, long)]
    pub tags: Option<String>,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// UUID (or unique UUID fragment) of the note to edit
    pub uuid: Option<String>,

    /// Edit the notes cached by `select` instead
    #[arg(long, conflicts_with = "uuid")]
    pub selected: bool,

    /// Editor to use instead of the configured one
    #[arg(long, value_name = "COMMAND")]
    pub editor: Option<String>,
}

/// Arguments for the `list` command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Show note UUIDs
    #[arg(long)]
    pub uuid: bool,

    /// Show modification dates
    #[arg(long)]
    pub date: bool,
}

/// Arguments for the `move` command
#[derive(Parser, Debug)]
pub struct MoveArgs {
    /// UUID (or unique UUID fragment) of the note to move
    pub uuid: Option<String>,

    /// Move the notes cached by `select` instead
    #[arg(long, conflicts_with = "uuid")]
    pub selected: bool,

    /// Destination notebook
    #[arg(short = 'n', long, value_name = "NAME")]
    pub notebook: String,
}

/// Arguments for the `notebook` command
#[derive(Parser, Debug)]
pub struct NotebookArgs {
    #[command(subcommand)]
    pub command: NotebookCommand,
}

#[derive(Subcommand, Debug)]
pub enum NotebookCommand {
    /// Create a new notebook
    Create {
        /// Name of the notebook
        name: String,
    },

    /// Open a notebook (point HEAD at it)
    Open {
        /// Name of the notebook
        name: String,
    },

    /// Delete a notebook, moving its notes to trash
    Delete {
        /// Name of the notebook
        name: String,

        /// Permanently delete the notebook's notes instead
        #[arg(short, long)]
        force: bool,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all notebooks
    List {
        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },

    /// Rename a notebook
    Rename {
        /// Current name
        old_name: String,
        /// New name
        new_name: String,
    },

    /// Find notebooks by name
    Search {
        /// Pattern to match against notebook names
        pattern: String,
    },

    /// Show the status of a notebook
    Status {
        /// Notebook name; defaults to the open notebook
        name: Option<String>,
    },
}

/// Arguments for the `open` command
#[derive(Parser, Debug)]
pub struct OpenArgs {
    /// UUID (or unique UUID fragment) of the note to show
    pub uuid: Option<String>,

    /// Show the notes cached by `select` instead
    #[arg(long, conflicts_with = "uuid")]
    pub selected: bool,
}

/// Arguments for the `remove` command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// UUID (or unique UUID fragment) of the note to remove
    pub uuid: Option<String>,

    /// Remove the notes cached by `select` instead
    #[arg(long, conflicts_with = "uuid")]
    pub selected: bool,

    /// Skip the confirmation prompt for permanent deletion
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the `select` command
#[derive(Parser, Debug)]
pub struct SelectArgs {
    /// Allow selecting multiple notes
    #[arg(long)]
    pub multiple: bool,

    /// Show modification dates in the listing
    #[arg(long)]
    pub date: bool,

    /// Show note UUIDs in the listing
    #[arg(long)]
    pub uuid: bool,
}

/// Arguments for the `status` command
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Notebook name; defaults to the open notebook
    pub name: Option<String>,
}

/// Arguments for the `tag` command
#[derive(Parser, Debug)]
pub struct TagArgs {
    #[command(subcommand)]
    pub command: TagCommand,
}

#[derive(Subcommand, Debug)]
pub enum TagCommand {
    /// List all tags with note counts
    #[command(alias = "ls")]
    List {
        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },

    /// Delete tags that no note carries
    #[command(name = "clear_empty", alias = "cle")]
    ClearEmpty {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Rename a tag (remember to quote or escape the '#')
    Rename {
        /// Current tag name, e.g. "#old"
        old_name: String,
        /// New tag name, e.g. "#new"
        new_name: String,
    },
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    #[command(subcommand)]
    pub command: SearchCommand,

    /// Output format
    #[arg(short = 'f', long, global = true, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum SearchCommand {
    /// Find notes by UUID fragment (hyphens are ignored)
    Uuid {
        /// Fragment of the UUID, e.g. "8558"
        pattern: String,
    },

    /// Find notes whose title contains the pattern
    Title {
        /// Pattern to match against titles
        pattern: String,
    },

    /// Find notes whose content contains the pattern
    Content {
        /// Pattern to match against content
        pattern: String,
    },

    /// Find notes carrying all of the given tags
    Tags {
        /// Comma-separated tags, e.g. "#work, #todo"
        tags: String,
    },
}

/// Arguments for the `clear` command
#[derive(Parser, Debug)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

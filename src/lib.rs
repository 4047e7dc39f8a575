//! qnote - quick personal notes in notebooks

pub mod cli;
pub mod domain;
pub mod infra;
pub mod store;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_clear, handle_completions, handle_edit, handle_list, handle_move,
        handle_notebook, handle_open, handle_remove, handle_search, handle_select, handle_status,
        handle_tag,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config_dir.as_ref())?;

    match &cli.command {
        Command::Add(args) => handle_add(args, &config),
        Command::Edit(args) => handle_edit(args, &config),
        Command::List(args) => handle_list(args, &config),
        Command::Move(args) => handle_move(args, &config),
        Command::Notebook(args) => handle_notebook(args, &config),
        Command::Open(args) => handle_open(args, &config),
        Command::Remove(args) => handle_remove(args, &config),
        Command::Select(args) => handle_select(args, &config),
        Command::Status(args) => handle_status(args, &config),
        Command::Tag(args) => handle_tag(args, &config),
        Command::Search(args) => handle_search(args, &config),
        Command::Clear(args) => handle_clear(args, &config),
        Command::Completions(args) => handle_completions(args),
    }
}

//! Interactive terminal prompts: yes/no confirmation and numbered
//! list selection.
//!
//! Prompts read plain lines from stdin, so they work the same whether
//! the input is a terminal or a pipe. End of input means "cancel".

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Asks a yes/no question. Returns the default on an empty answer and
/// `false` if input is closed.
pub fn confirm(question: &str, default_yes: bool) -> Result<bool> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    confirm_from(&mut input, question, default_yes)
}

fn confirm_from(input: &mut impl BufRead, question: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "[Y/n]" } else { "[y/N]" };

    loop {
        print!("{} {} ", question, hint);
        std::io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        let bytes = input.read_line(&mut line).context("failed to read stdin")?;
        if bytes == 0 {
            println!();
            return Ok(false);
        }

        match line.trim().to_lowercase().as_str() {
            "" => return Ok(default_yes),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            other => println!("Please answer 'y' or 'n', not '{}'.", other),
        }
    }
}

/// Prompts for a selection out of `count` numbered items (1-based).
///
/// With `multiple`, answers like `1,3` or `1 3` are accepted. Returns
/// `None` when the user cancels (empty answer or closed input).
pub fn select_indices(count: usize, multiple: bool) -> Result<Option<Vec<usize>>> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    select_indices_from(&mut input, count, multiple)
}

fn select_indices_from(
    input: &mut impl BufRead,
    count: usize,
    multiple: bool,
) -> Result<Option<Vec<usize>>> {
    loop {
        if multiple {
            print!("Select notes (e.g. 1,3), or press Enter to cancel: ");
        } else {
            print!("Select a note (1-{}), or press Enter to cancel: ", count);
        }
        std::io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        let bytes = input.read_line(&mut line).context("failed to read stdin")?;
        if bytes == 0 {
            println!();
            return Ok(None);
        }

        let answer = line.trim();
        if answer.is_empty() {
            return Ok(None);
        }

        match parse_selection(answer, count, multiple) {
            Ok(indices) => return Ok(Some(indices)),
            Err(msg) => println!("{}", msg),
        }
    }
}

/// Parses a selection answer into 0-based indices.
fn parse_selection(answer: &str, count: usize, multiple: bool) -> Result<Vec<usize>, String> {
    let parts: Vec<&str> = answer
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();

    if !multiple && parts.len() > 1 {
        return Err("Please select a single note.".to_string());
    }

    let mut indices = Vec::new();
    for part in parts {
        let number: usize = part
            .parse()
            .map_err(|_| format!("Invalid selection '{}'.", part))?;
        if number < 1 || number > count {
            return Err(format!(
                "Selection {} is out of range (1-{}).",
                number, count
            ));
        }
        let index = number - 1;
        if !indices.contains(&index) {
            indices.push(index);
        }
    }
    Ok(indices)
}

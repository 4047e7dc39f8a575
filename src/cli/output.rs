//! Output format types and note rendering for CLI commands.

use crate::domain::{Note, format_tag_list};
use crate::store::{NotebookRecord, TagWithCount};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub uuid: String,
    pub title: String,
    pub tags: Vec<String>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl NoteListing {
    pub fn from_note(note: &Note) -> Self {
        Self {
            uuid: note.id().to_string(),
            title: note.title().to_string(),
            tags: note.tags().iter().map(|t| t.as_str().to_string()).collect(),
            created: note.created(),
            modified: note.modified(),
        }
    }
}

/// A notebook in listing output.
#[derive(Debug, Serialize)]
pub struct NotebookListing {
    pub name: String,
    pub notes: usize,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl NotebookListing {
    pub fn from_record(record: &NotebookRecord) -> Self {
        Self {
            name: record.name().to_string(),
            notes: record.note_count(),
            created: record.created(),
            modified: record.modified(),
        }
    }
}

/// A tag with its note count in listing output.
#[derive(Debug, Serialize)]
pub struct TagListing {
    pub name: String,
    pub count: u32,
}

impl TagListing {
    pub fn from_count(twc: &TagWithCount) -> Self {
        Self {
            name: twc.tag().as_str().to_string(),
            count: twc.count(),
        }
    }
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

/// Greedy word wrap, applied per input line.
pub fn wrap_text(s: &str, width: usize) -> String {
    let mut wrapped = Vec::new();
    for line in s.lines() {
        if line.chars().count() <= width {
            wrapped.push(line.to_string());
            continue;
        }
        let mut current = String::new();
        for word in line.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + word.chars().count() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                wrapped.push(current);
                current = word.to_string();
            }
        }
        wrapped.push(current);
    }
    wrapped.join("\n")
}

/// One summary line per note, used by `list`, `search`, and `select`.
pub fn summary_line(note: &Note, show_uuid: bool, show_date: bool, width: usize) -> String {
    let mut parts = Vec::new();
    if show_uuid {
        parts.push(note.id().to_string());
    }
    parts.push(truncate_str(note.title(), width));
    if !note.tags().is_empty() {
        parts.push(format!("[{}]", format_tag_list(note.tags())));
    }
    if show_date {
        parts.push(note.modified().format("%Y-%m-%d %H:%M").to_string());
    }
    parts.join("  ")
}

/// Full read-only rendering of a note, used by `open`.
pub fn render_note(note: &Note, width: usize) -> String {
    let time_format = "%Y-%m-%d %H:%M:%S";
    let mut lines = vec![
        format!("UUID: {}", note.id()),
        format!("Title: {}", note.title()),
        format!("Tags: {}", format_tag_list(note.tags())),
        format!(
            "Created: {}  Updated: {}",
            note.created().format(time_format),
            note.modified().format(time_format)
        ),
        "Content:".to_string(),
    ];
    lines.push(wrap_text(note.content(), width));
    lines.join("\n")
}

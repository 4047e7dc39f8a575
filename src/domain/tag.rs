//! Hashtag-style tag type for labeling notes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A `#`-prefixed tag for labeling notes.
///
/// Tags are flat labels attached to notes in a many-to-many fashion.
/// A valid tag is a `#` followed by one or more word characters
/// (letters, digits, underscores). Case is preserved.
///
/// # Examples
///
/// ```
/// use qnote::domain::Tag;
///
/// let tag = Tag::new("#rust").unwrap();
/// assert_eq!(tag.as_str(), "#rust");
/// assert_eq!(tag.name(), "rust");
///
/// assert!(Tag::new("rust").is_err());     // missing '#'
/// assert!(Tag::new("#two words").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

/// Error returned when parsing an invalid tag.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagError {}

impl Tag {
    /// Creates a new Tag from a string.
    ///
    /// The input is trimmed and validated.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if:
    /// - The tag is empty or whitespace-only
    /// - The tag does not start with `#`
    /// - The part after `#` is empty or contains characters other than
    ///   letters, digits, and underscores
    pub fn new(s: &str) -> Result<Self, ParseTagError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ParseTagError("tag cannot be empty".to_string()));
        }

        let Some(name) = trimmed.strip_prefix('#') else {
            return Err(ParseTagError(format!(
                "invalid tag '{}': tags must start with '#'",
                trimmed
            )));
        };

        if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(ParseTagError(format!(
                "invalid tag '{}': tag names must contain only letters, digits, and underscores",
                trimmed
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the full tag including the `#` prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the tag name without the `#` prefix.
    pub fn name(&self) -> &str {
        &self.0[1..]
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.0)
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parses a comma-separated tag list, e.g. `"#rust, #cli"`.
///
/// Empty segments are skipped; duplicates are removed (first occurrence
/// kept). Returns an error if any non-empty segment is not a valid tag.
pub fn parse_tag_list(s: &str) -> Result<Vec<Tag>, ParseTagError> {
    let mut tags: Vec<Tag> = Vec::new();
    for segment in s.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let tag = Tag::new(segment)?;
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    Ok(tags)
}

/// Formats tags as a comma-separated list, e.g. `"#rust, #cli"`.
pub fn format_tag_list(tags: &[Tag]) -> String {
    tags.iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

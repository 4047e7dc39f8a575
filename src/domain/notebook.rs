//! Validated notebook name type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated notebook name.
///
/// Names are trimmed and must be a single non-empty line. Uniqueness and
/// the reserved default/trash names are enforced by the store and the
/// handlers, not by this type.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NotebookName(String);

/// Error returned when parsing an invalid notebook name.
#[derive(Debug, Clone)]
pub struct ParseNotebookNameError(String);

impl fmt::Display for ParseNotebookNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseNotebookNameError {}

impl NotebookName {
    /// Creates a new NotebookName from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseNotebookNameError` if the name is empty after
    /// trimming or contains control characters.
    pub fn new(s: &str) -> Result<Self, ParseNotebookNameError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ParseNotebookNameError(
                "notebook name cannot be empty".to_string(),
            ));
        }

        if trimmed.chars().any(char::is_control) {
            return Err(ParseNotebookNameError(format!(
                "invalid notebook name '{}': control characters are not allowed",
                trimmed.escape_default()
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotebookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NotebookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NotebookName(\"{}\")", self.0)
    }
}

impl FromStr for NotebookName {
    type Err = ParseNotebookNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for NotebookName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NotebookName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_with_valid_name() {
        let name = NotebookName::new("work").unwrap();
        assert_eq!(name.as_str(), "work");
    }

    #[test]
    fn new_allows_spaces_inside() {
        let name = NotebookName::new("reading list").unwrap();
        assert_eq!(name.as_str(), "reading list");
    }

    #[test]
    fn new_trims_whitespace() {
        let name = NotebookName::new("  work  ").unwrap();
        assert_eq!(name.as_str(), "work");
    }

    #[test]
    fn new_rejects_empty() {
        assert!(NotebookName::new("").is_err());
        assert!(NotebookName::new("   ").is_err());
    }

    #[test]
    fn new_rejects_control_characters() {
        assert!(NotebookName::new("two\nlines").is_err());
        assert!(NotebookName::new("tab\there").is_err());
    }

    #[test]
    fn display_and_fromstr_roundtrip() {
        let name: NotebookName = "projects".parse().unwrap();
        assert_eq!(format!("{}", name), "projects");
    }
}

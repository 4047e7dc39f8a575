//! Content parsing: tag-block extraction and title derivation.
//!
//! Note content can embed tags in delimited blocks:
//!
//! ```text
//! Pick up groceries after work.
//!
//! ^^^#errands, #today^^^
//! ```
//!
//! The block delimiters are three carets on each side. Tags inside a block
//! follow the usual `#name` form; anything else in the block is ignored.

use crate::domain::Tag;
use regex::Regex;
use std::sync::OnceLock;

fn tag_block_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\^\^\^(.*?)\^\^\^").expect("tag block regex is valid"))
}

fn tag_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#\w+").expect("tag token regex is valid"))
}

/// Extracts tags from all `^^^...^^^` blocks in the content.
///
/// Duplicates are removed (first occurrence kept). Text outside the
/// blocks is never scanned, so an ordinary `#heading` line does not
/// become a tag.
pub fn extract_tags(content: &str) -> Vec<Tag> {
    let mut tags: Vec<Tag> = Vec::new();
    for block in tag_block_regex().captures_iter(content) {
        for token in tag_token_regex().find_iter(&block[1]) {
            if let Ok(tag) = Tag::new(token.as_str())
                && !tags.contains(&tag)
            {
                tags.push(tag);
            }
        }
    }
    tags
}

/// Removes all `^^^...^^^` blocks from the content.
///
/// Trailing whitespace left behind by a removed block is trimmed.
pub fn strip_tag_blocks(content: &str) -> String {
    let stripped = tag_block_regex().replace_all(content, "");
    stripped.trim_end().to_string()
}

/// Derives a note title from its content.
///
/// The title is the first non-empty line, with markdown heading markers
/// removed, truncated to `width` characters on a word boundary.
pub fn extract_title(content: &str, width: usize) -> String {
    let line = content
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("");

    truncate_words(strip_heading(line), width)
}

/// Strips leading markdown heading markers (`#`, `##`, ...) from a line.
///
/// A `#` run only counts as a heading when followed by whitespace, so a
/// tag like `#rust` is left untouched.
fn strip_heading(line: &str) -> &str {
    let rest = line.trim_start_matches('#');
    if rest.len() < line.len() && rest.starts_with(char::is_whitespace) {
        rest.trim_start()
    } else {
        line
    }
}

/// Truncates a string to at most `width` characters, cutting on the last
/// word boundary that fits. Falls back to a hard cut for a single long word.
pub fn truncate_words(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }

    let prefix: String = s.chars().take(width).collect();

    // The cut already lands on a word boundary when the next char is
    // whitespace.
    if s.chars().nth(width).is_some_and(char::is_whitespace) {
        return prefix.trim_end().to_string();
    }

    match prefix.rfind(char::is_whitespace) {
        Some(pos) if pos > 0 => prefix[..pos].trim_end().to_string(),
        _ => prefix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ===========================================
    // Tag extraction
    // ===========================================

    #[test]
    fn extract_tags_from_single_block() {
        let content = "Buy milk\n\n^^^#errands, #today^^^";
        let tags = extract_tags(content);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].as_str(), "#errands");
        assert_eq!(tags[1].as_str(), "#today");
    }

    #[test]
    fn extract_tags_from_multiple_blocks() {
        let content = "^^^#one^^^\nbody text\n^^^#two, #three^^^";
        let tags = extract_tags(content);
        assert_eq!(tags.len(), 3);
    }

    #[test]
    fn extract_tags_ignores_text_outside_blocks() {
        let content = "# A heading\n\n#not_a_tag here\n\n^^^#real^^^";
        let tags = extract_tags(content);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].as_str(), "#real");
    }

    #[test]
    fn extract_tags_deduplicates() {
        let content = "^^^#dup, #dup, #other^^^";
        let tags = extract_tags(content);
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn extract_tags_spanning_lines() {
        let content = "^^^#first,\n#second^^^";
        let tags = extract_tags(content);
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn extract_tags_none_without_blocks() {
        assert!(extract_tags("plain content, no tags").is_empty());
        assert!(extract_tags("").is_empty());
    }

    #[test]
    fn extract_tags_ignores_junk_inside_block() {
        let content = "^^^tags: #good, bad, also-bad^^^";
        let tags = extract_tags(content);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].as_str(), "#good");
    }

    // ===========================================
    // Tag block stripping
    // ===========================================

    #[test]
    fn strip_removes_block() {
        let content = "Buy milk\n\n^^^#errands^^^";
        assert_eq!(strip_tag_blocks(content), "Buy milk");
    }

    #[test]
    fn strip_removes_all_blocks() {
        let content = "^^^#a^^^start\nmiddle\n^^^#b^^^";
        assert_eq!(strip_tag_blocks(content), "start\nmiddle");
    }

    #[test]
    fn strip_leaves_plain_content_alone() {
        assert_eq!(strip_tag_blocks("no blocks here"), "no blocks here");
    }

    #[test]
    fn strip_unterminated_block_is_kept() {
        let content = "text ^^^#dangling";
        assert_eq!(strip_tag_blocks(content), "text ^^^#dangling");
    }

    // ===========================================
    // Title derivation
    // ===========================================

    #[test]
    fn title_is_first_line() {
        assert_eq!(extract_title("Shopping list\nmilk\neggs", 64), "Shopping list");
    }

    #[test]
    fn title_skips_leading_blank_lines() {
        assert_eq!(extract_title("\n\n  \nActual title", 64), "Actual title");
    }

    #[test]
    fn title_strips_heading_markers() {
        assert_eq!(extract_title("# Shopping list", 64), "Shopping list");
        assert_eq!(extract_title("### Deep heading", 64), "Deep heading");
    }

    #[test]
    fn title_keeps_tag_like_first_line() {
        assert_eq!(extract_title("#rust notes", 64), "#rust notes");
    }

    #[test]
    fn title_of_empty_content_is_empty() {
        assert_eq!(extract_title("", 64), "");
        assert_eq!(extract_title("   \n  ", 64), "");
    }

    #[test]
    fn title_truncates_on_word_boundary() {
        let title = extract_title("one two three four five", 13);
        assert_eq!(title, "one two three");

        let title = extract_title("one two three four five", 12);
        assert_eq!(title, "one two");
    }

    #[test]
    fn title_hard_cuts_single_long_word() {
        let title = extract_title("supercalifragilistic", 5);
        assert_eq!(title, "super");
    }

    #[test]
    fn truncate_words_noop_when_short() {
        assert_eq!(truncate_words("short", 64), "short");
    }

    #[test]
    fn truncate_words_trims_trailing_space() {
        // "alpha " is 6 chars; the cut lands after the space
        assert_eq!(truncate_words("alpha beta", 6), "alpha");
    }
}

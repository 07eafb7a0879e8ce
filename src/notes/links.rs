//! Bracket-link scanning: `[[Title]]` runs inside note content, plus the
//! cursor-side helpers the editor uses for link suggestions.

use once_cell::sync::Lazy;
use regex::Regex;

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[(.*?)\]\]").expect("valid bracket link regex"));

/// Outbound link titles in document order. Titles are taken verbatim from
/// between the brackets; resolution against real notes happens later.
pub fn extract_link_titles(content: &str) -> Vec<String> {
    LINK_RE
        .captures_iter(content)
        .map(|captures| captures[1].to_owned())
        .collect()
}

/// An unclosed `[[` run the cursor currently sits in.
#[derive(Debug, PartialEq, Eq)]
pub struct OpenBracket {
    /// Char index of the first `[`.
    pub start: usize,
    /// Text already typed between the brackets and the cursor.
    pub query: String,
}

/// Scans backwards from the cursor (a char index) for a `[[` that has not
/// been closed yet. Stops at line breaks and at a closing `]]`.
pub fn open_bracket_at(text: &str, cursor: usize) -> Option<OpenBracket> {
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());

    let mut index = cursor;
    while index >= 2 {
        if chars[index - 1] == '\n' {
            return None;
        }
        if chars[index - 2] == ']' && chars[index - 1] == ']' {
            return None;
        }
        if chars[index - 2] == '[' && chars[index - 1] == '[' {
            let start = index - 2;
            let query: String = chars[start + 2..cursor].iter().collect();
            return Some(OpenBracket { start, query });
        }
        index -= 1;
    }

    None
}

/// Replaces the open bracket run (from `start` through `cursor`, both char
/// indices) with a completed `[[title]]` and returns the new text together
/// with the char index right after the inserted link.
pub fn insert_link(text: &str, start: usize, cursor: usize, title: &str) -> (String, usize) {
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());
    let start = start.min(cursor);

    let mut result: String = chars[..start].iter().collect();
    result.push_str("[[");
    result.push_str(title);
    result.push_str("]]");
    result.extend(chars[cursor..].iter());

    let new_cursor = start + title.chars().count() + 4;
    (result, new_cursor)
}

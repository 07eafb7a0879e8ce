//! Inline spellcheck support: a static word list and a scan that yields the
//! byte ranges of unknown words. Words that appear inside any note title are
//! treated as known, so linked concepts are never flagged.

use std::collections::HashSet;
use std::ops::Range;
use std::path::Path;

use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-zA-Z]{2,}\b").expect("valid word regex"));

#[rustfmt::skip]
const BUILTIN_WORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for",
    "not", "on", "with", "he", "as", "you", "do", "at", "this", "but", "his",
    "by", "from", "they", "we", "say", "her", "she", "or", "an", "will", "my",
    "one", "all", "would", "there", "their", "what", "so", "up", "out", "if",
    "about", "who", "get", "which", "go", "me", "when", "make", "can", "like",
    "time", "no", "just", "him", "know", "take", "people", "into", "year",
    "your", "good", "some", "could", "them", "see", "other", "than", "then",
    "now", "look", "only", "come", "its", "over", "think", "also", "back",
    "after", "use", "two", "how", "our", "work", "first", "well", "way",
    "even", "new", "want", "because", "any", "these", "give", "day", "most",
    "us", "note", "notes", "title", "graph", "link", "links", "code", "web",
    "app", "data", "is", "are", "was", "were", "been", "has", "had", "create",
    "edit", "delete", "view", "idea", "ideas", "project", "start", "typing",
];

/// Fixed session dictionary. Not a real spellchecker; membership is the whole
/// contract.
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|word| (*word).to_owned()).collect(),
        }
    }

    /// Builtin list plus one word per line from `path`.
    pub fn with_extra_file(path: &Path) -> anyhow::Result<Self> {
        let mut list = Self::builtin();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading word list {}", path.display()))?;

        let mut added = 0usize;
        for line in raw.lines() {
            let word = line.trim().to_lowercase();
            if word.chars().count() >= 2 && list.words.insert(word) {
                added += 1;
            }
        }

        log::info!("event=wordlist_loaded path={} added={added}", path.display());
        Ok(list)
    }

    pub fn contains(&self, lowered: &str) -> bool {
        self.words.contains(lowered)
    }
}

/// Byte ranges of alphabetic words (length >= 2) that are neither in the word
/// list nor a substring of any note title. `lowered_titles` must already be
/// lowercased.
pub fn misspelled_ranges(
    text: &str,
    words: &WordList,
    lowered_titles: &[String],
) -> Vec<Range<usize>> {
    WORD_RE
        .find_iter(text)
        .filter_map(|found| {
            let lowered = found.as_str().to_lowercase();
            let known = words.contains(&lowered)
                || lowered_titles.iter().any(|title| title.contains(&lowered));
            if known { None } else { Some(found.range()) }
        })
        .collect()
}

//! Header metadata extraction.
//!
//! Each field is looked up independently; a missing or malformed line leaves
//! that field at its default and never affects the others.

use regex::Regex;
use std::sync::LazyLock;

static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"# Council.*Session:\s*(\d{4}-\d{2}-\d{2}-\d{6})").unwrap()
});
static TOPIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"## Topic:\s*(.+)").unwrap());
static STANCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"## Stance:\s*(\w+)").unwrap());
static PARTICIPANTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"## Participants:\s*(.+)").unwrap());
static MODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"## Mode:\s*(.+)").unwrap());

/// Scalar and list metadata from the document header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionFields {
    pub timestamp: String,
    pub topic: String,
    pub stance: String,
    pub participants: Vec<String>,
    pub mode: String,
}

/// Extract header metadata from the full document text.
pub fn extract_fields(content: &str) -> SessionFields {
    SessionFields {
        timestamp: capture(&TIMESTAMP_RE, content).unwrap_or_default(),
        topic: capture(&TOPIC_RE, content).unwrap_or_default(),
        stance: capture(&STANCE_RE, content).unwrap_or_default(),
        participants: capture(&PARTICIPANTS_RE, content)
            .map(|line| split_participants(&line))
            .unwrap_or_default(),
        mode: capture(&MODE_RE, content).unwrap_or_default(),
    }
}

/// Split a comma-separated participant line. Empty elements are kept.
pub fn split_participants(line: &str) -> Vec<String> {
    line.split(',').map(|p| p.trim().to_string()).collect()
}

/// First capture group of the first match, trimmed.
pub(crate) fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

//! String utilities for report text.
//!
//! Lengths are counted in characters, not bytes, so previews never split a
//! UTF-8 sequence.

/// Default character limit for a formatted turn
pub const DEFAULT_RESPONSE_CHARS: usize = 1500;

/// Marker appended to a shortened turn
pub const ELISION_MARKER: &str = "\n\n[...]";

/// First `max_chars` characters, with `...` appended when the text was longer.
pub fn preview(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &s[..end]),
        None => s.to_string(),
    }
}

/// Shorten a long turn for display.
///
/// Text over `max_chars` is cut at the limit; if a paragraph break lies in
/// the last 40% of the kept text, the cut moves back to it. The result ends
/// with [`ELISION_MARKER`].
pub fn format_response(text: &str, max_chars: usize) -> String {
    let Some((cut, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };

    let mut kept = &text[..cut];
    if let Some(paragraph) = kept.rfind("\n\n") {
        let paragraph_chars = kept[..paragraph].chars().count();
        if paragraph_chars as f64 > max_chars as f64 * 0.6 {
            kept = &kept[..paragraph];
        }
    }

    format!("{kept}{ELISION_MARKER}")
}

/// First line of a text (the whole text if it has no newline)
pub fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

//! Structured reply block parsing.
//!
//! The second participant ends a turn with a machine-readable block:
//!
//! ```text
//! ---COUNCIL_RESPONSE---
//! STATUS: CONTINUE
//! AGREEMENT: PARTIAL
//! CONFIDENCE: 0.7
//! KEY_POINTS:
//! - point one
//! ACTION_ITEMS:
//! - [ ] task one
//! ---END_COUNCIL_RESPONSE---
//! ```
//!
//! Lists are read line by line and end at the first line that starts with
//! one of a fixed set of labels. Content lines that begin with such a label
//! end the list early.

use super::entities::{ReplyStatus, StructuredReply};
use super::fields::capture;
use regex::Regex;
use std::sync::LazyLock;

/// Opening sentinel of the structured block
pub const BLOCK_OPEN: &str = "---COUNCIL_RESPONSE---";
/// Closing sentinel of the structured block
pub const BLOCK_CLOSE: &str = "---END_COUNCIL_RESPONSE---";

const KEY_POINTS_LABEL: &str = "KEY_POINTS:";
const ACTION_ITEMS_LABEL: &str = "ACTION_ITEMS:";

/// Labels ending the key point list, checked in order
const KEY_POINT_TERMINATORS: &[&str] = &["ACTION_ITEMS:", "QUESTIONS_FOR", "MISSING_CONTEXT:"];
/// Labels ending the action item list
const ACTION_ITEM_TERMINATORS: &[&str] = &["QUESTIONS_FOR"];

static STATUS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"STATUS:\s*(\w+)").unwrap());
static AGREEMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"AGREEMENT:\s*(\w+)").unwrap());
static CONFIDENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"CONFIDENCE:\s*([\d.]+)").unwrap());

/// Split a turn into prose and structured fields.
///
/// Without a complete sentinel pair the whole text is prose and only
/// `STATUS:` is still looked up in the raw text.
pub fn split_reply(text: &str) -> StructuredReply {
    let Some((prose, block)) = locate_block(text) else {
        return StructuredReply {
            status: parse_status(text),
            ..StructuredReply::prose_only(text.trim())
        };
    };

    StructuredReply {
        prose: prose.trim().to_string(),
        status: parse_status(block),
        agreement: capture(&AGREEMENT_RE, block),
        confidence: parse_confidence(block),
        key_points: section_lines(block, KEY_POINTS_LABEL, KEY_POINT_TERMINATORS)
            .filter_map(parse_key_point)
            .collect(),
        action_items: section_lines(block, ACTION_ITEMS_LABEL, ACTION_ITEM_TERMINATORS)
            .filter_map(parse_action_item)
            .collect(),
    }
}

/// Returns `(text before the block, block content)`.
fn locate_block(text: &str) -> Option<(&str, &str)> {
    let open = text.find(BLOCK_OPEN)?;
    let content_start = open + BLOCK_OPEN.len();
    let close = text[content_start..].find(BLOCK_CLOSE)?;
    Some((&text[..open], &text[content_start..content_start + close]))
}

fn parse_status(text: &str) -> Option<ReplyStatus> {
    capture(&STATUS_RE, text).map(|token| ReplyStatus::from_token(&token))
}

/// `CONFIDENCE:` as a float; unparsable tokens such as `0.8.1` are dropped.
fn parse_confidence(block: &str) -> Option<f64> {
    capture(&CONFIDENCE_RE, block).and_then(|value| value.parse::<f64>().ok())
}

/// Lines following `label` up to the first terminator line or the end of the block.
///
/// Text after the label on its own line counts as the first line.
fn section_lines<'a>(
    block: &'a str,
    label: &str,
    terminators: &'static [&'static str],
) -> impl Iterator<Item = &'a str> {
    let body = block
        .find(label)
        .map(|start| block[start + label.len()..].trim_start())
        .unwrap_or("");

    body.lines()
        .take_while(move |line| !starts_with_label(line, terminators))
}

fn starts_with_label(line: &str, labels: &[&str]) -> bool {
    let line = line.trim_start();
    labels.iter().any(|label| line.starts_with(label))
}

/// `- text` → `text`; a bare `-` is empty and never takes the next line.
fn parse_key_point(line: &str) -> Option<String> {
    let text = line.strip_prefix('-')?.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// `- [ ] text` / `- [x] text` → `text`
fn parse_action_item(line: &str) -> Option<String> {
    let rest = line.strip_prefix('-')?.trim_start().strip_prefix('[')?;
    let mut chars = rest.chars();
    chars.next()?;
    let text = chars.as_str().strip_prefix(']')?.trim();
    (!text.is_empty()).then(|| text.to_string())
}

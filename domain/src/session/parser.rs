//! Session assembly.
//!
//! [`SessionParser`] composes the header field extraction, round segmentation,
//! structured reply splitting and the closing consensus section into one
//! [`Session`]. Parsing never fails: anything the document does not contain
//! is left at its default.

use super::entities::{Consensus, Round, Session};
use super::fields::{capture, extract_fields};
use super::labels::TurnLabels;
use super::reply::split_reply;
use super::rounds::RoundSegmenter;
use regex::Regex;
use std::sync::LazyLock;

static CONSENSUS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Consensus Reached:\*\*\s*(Yes|No)").unwrap());
static AGREED_POSITION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"### Agreed Position\s*\n").unwrap());
static ACTION_ITEMS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"### Action Items\s*\n").unwrap());

/// Heading prefix that ends a consensus sub-section
const SECTION_HEADING: &str = "###";

/// Parses council session documents.
///
/// # Example
///
/// ```
/// use council_domain::{Consensus, SessionParser};
///
/// let doc = "## Topic: Tabs or spaces\n\n### Round 1\n**CLAUDE:** Spaces.\n\
///            **GEMINI:** Agreed.\n\n**Consensus Reached:** Yes\n";
///
/// let session = SessionParser::new().parse(doc);
/// assert_eq!(session.topic, "Tabs or spaces");
/// assert_eq!(session.rounds.len(), 1);
/// assert_eq!(session.consensus, Consensus::Reached);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionParser {
    segmenter: RoundSegmenter,
}

impl SessionParser {
    /// Parser for the default `CLAUDE` / `GEMINI` labels
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser for custom turn labels
    pub fn with_labels(labels: &TurnLabels) -> Self {
        Self {
            segmenter: RoundSegmenter::new(labels),
        }
    }

    /// Parse a whole document into a [`Session`].
    pub fn parse(&self, content: &str) -> Session {
        let fields = extract_fields(content);

        let rounds = self
            .segmenter
            .segment(content)
            .into_iter()
            .map(|raw| Round {
                number: raw.number,
                reply: split_reply(&raw.second_turn),
                first_turn: raw.first_turn,
                second_turn: raw.second_turn,
            })
            .collect();

        Session {
            timestamp: fields.timestamp,
            topic: fields.topic,
            stance: fields.stance,
            participants: fields.participants,
            mode: fields.mode,
            rounds,
            consensus: parse_consensus(content),
            agreed_position: section_body(content, &AGREED_POSITION_RE).map(str::to_string),
            action_items: section_body(content, &ACTION_ITEMS_RE)
                .map(parse_numbered_items)
                .unwrap_or_default(),
            raw_content: content.to_string(),
        }
    }
}

fn parse_consensus(content: &str) -> Consensus {
    capture(&CONSENSUS_RE, content)
        .map(|answer| Consensus::from_answer(&answer))
        .unwrap_or_default()
}

/// Trimmed text after a sub-section heading, up to the next `###` or the end.
fn section_body<'a>(content: &'a str, heading: &Regex) -> Option<&'a str> {
    let start = heading.find(content)?.end();
    let rest = &content[start..];
    let end = rest.find(SECTION_HEADING).unwrap_or(rest.len());
    Some(rest[..end].trim())
}

/// Items of a `1. item` list; the numbering is discarded.
fn parse_numbered_items(body: &str) -> Vec<String> {
    body.lines().filter_map(parse_numbered_item).collect()
}

fn parse_numbered_item(line: &str) -> Option<String> {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return None;
    }
    let text = rest.strip_prefix('.')?.trim();
    (!text.is_empty()).then(|| text.to_string())
}

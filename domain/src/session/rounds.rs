//! Round segmentation.
//!
//! A round is `### Round <n>`, a line break, the first speaker's
//! `**LABEL:**` turn and then the second speaker's turn. The second turn ends
//! at whichever comes first: the next round header, a `---` divider line,
//! the consensus heading or the end of the document.
//!
//! Segmentation is a single forward scan with literal marker searches, so
//! runtime stays linear in the document size.

use super::labels::TurnLabels;
use regex::Regex;

/// Round header prefix, also a second-turn terminator
pub const ROUND_HEADER: &str = "### Round";
/// Horizontal divider ending a turn
pub const DIVIDER: &str = "\n---\n";
/// Consensus section heading ending a turn
pub const CONSENSUS_HEADING: &str = "## CONSENSUS";

const SECOND_TURN_TERMINATORS: &[&str] = &[ROUND_HEADER, DIVIDER, CONSENSUS_HEADING];

/// One segmented round before the reply block is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRound {
    pub number: u32,
    pub first_turn: String,
    pub second_turn: String,
}

/// Splits a document body into rounds for a given pair of turn labels.
#[derive(Debug, Clone)]
pub struct RoundSegmenter {
    start_re: Regex,
    second_marker: String,
}

impl RoundSegmenter {
    pub fn new(labels: &TurnLabels) -> Self {
        let pattern = format!(
            r"{} (\d+)\s*\n\s*{}",
            regex::escape(ROUND_HEADER),
            regex::escape(&labels.first.marker()),
        );
        Self {
            start_re: Regex::new(&pattern).expect("escaped round header pattern is valid"),
            second_marker: labels.second.marker(),
        }
    }

    /// Segment rounds in document order.
    ///
    /// A candidate whose second label is missing before the next round header
    /// is skipped, and so is one whose number does not fit a `u32`. Neither
    /// case is reported.
    pub fn segment(&self, content: &str) -> Vec<RawRound> {
        let mut rounds = Vec::new();
        let mut cursor = 0;

        while let Some(caps) = self.start_re.captures_at(content, cursor) {
            let (Some(whole), Some(number)) = (caps.get(0), caps.get(1)) else {
                break;
            };
            let first_start = whole.end();
            let region_end =
                find_from(content, first_start, ROUND_HEADER).unwrap_or(content.len());
            cursor = region_end;

            // The next round header bounds both turns, so every search below
            // stays inside this round's region.
            let region = &content[..region_end];
            let Some(second_label) = find_from(region, first_start, &self.second_marker) else {
                continue;
            };
            let Ok(number) = number.as_str().parse::<u32>() else {
                continue;
            };

            let second_start = second_label + self.second_marker.len();
            let second_end = SECOND_TURN_TERMINATORS
                .iter()
                .filter_map(|marker| find_from(region, second_start, marker))
                .min()
                .unwrap_or(region_end);

            rounds.push(RawRound {
                number,
                first_turn: content[first_start..second_label].trim().to_string(),
                second_turn: content[second_start..second_end].trim().to_string(),
            });
        }

        rounds
    }
}

impl Default for RoundSegmenter {
    fn default() -> Self {
        Self::new(&TurnLabels::default())
    }
}

/// Byte offset of `needle` at or after `from`
fn find_from(haystack: &str, from: usize, needle: &str) -> Option<usize> {
    haystack[from..].find(needle).map(|offset| from + offset)
}

//! Session entities produced by the parser.
//!
//! A [`Session`] is built once from a single document and never mutated
//! afterwards. All optional parts use explicit "no value" states so that a
//! document matching nothing still yields a valid record.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Format of the session timestamp token (`2025-01-15-143022`)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H%M%S";

/// Status token of a structured reply.
///
/// Open enum: the three well-known tokens get their own variants, any other
/// `\w+` token is kept verbatim in [`ReplyStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReplyStatus {
    /// The participant considers the question settled
    Resolved,
    /// Another round is requested
    Continue,
    /// The participants cannot converge
    Deadlock,
    /// Any other token, preserved as written
    Other(String),
}

impl ReplyStatus {
    /// Classify a raw token. Matching is exact (case-sensitive).
    pub fn from_token(token: &str) -> Self {
        match token {
            "RESOLVED" => ReplyStatus::Resolved,
            "CONTINUE" => ReplyStatus::Continue,
            "DEADLOCK" => ReplyStatus::Deadlock,
            other => ReplyStatus::Other(other.to_string()),
        }
    }

    /// The token as it appeared in the document
    pub fn as_str(&self) -> &str {
        match self {
            ReplyStatus::Resolved => "RESOLVED",
            ReplyStatus::Continue => "CONTINUE",
            ReplyStatus::Deadlock => "DEADLOCK",
            ReplyStatus::Other(token) => token,
        }
    }
}

impl std::fmt::Display for ReplyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ReplyStatus {
    fn from(token: String) -> Self {
        ReplyStatus::from_token(&token)
    }
}

impl From<ReplyStatus> for String {
    fn from(status: ReplyStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Structured view of the second participant's turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredReply {
    /// Free text outside the structured block (whole turn if no block)
    pub prose: String,
    /// `STATUS:` token
    pub status: Option<ReplyStatus>,
    /// `AGREEMENT:` token
    pub agreement: Option<String>,
    /// `CONFIDENCE:` value, not clamped
    pub confidence: Option<f64>,
    /// `KEY_POINTS:` bullets
    pub key_points: Vec<String>,
    /// `ACTION_ITEMS:` checkbox bullets, checkbox stripped
    pub action_items: Vec<String>,
}

impl StructuredReply {
    /// A reply with no structured block: prose only.
    pub fn prose_only(prose: impl Into<String>) -> Self {
        Self {
            prose: prose.into(),
            ..Default::default()
        }
    }

    /// Whether any list content was extracted
    pub fn has_lists(&self) -> bool {
        !self.key_points.is_empty() || !self.action_items.is_empty()
    }

    /// Confidence as a whole percentage (`0.85` → `85`)
    pub fn confidence_percent(&self) -> Option<i64> {
        self.confidence.map(|c| (c * 100.0).round() as i64)
    }
}

/// One exchange turn-pair within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// Round number as written in the document
    pub number: u32,
    /// First participant's turn, verbatim
    pub first_turn: String,
    /// Second participant's turn, verbatim
    pub second_turn: String,
    /// Fields derived from the second turn
    pub reply: StructuredReply,
}

/// Outcome recorded in the consensus section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Consensus {
    /// `**Consensus Reached:** Yes`
    Reached,
    /// `**Consensus Reached:** No`
    NotReached,
    /// No consensus line in the document
    #[default]
    Unknown,
}

impl Consensus {
    /// Map a `Yes`/`No` token; anything else is unknown
    pub fn from_answer(answer: &str) -> Self {
        match answer {
            "Yes" => Consensus::Reached,
            "No" => Consensus::NotReached,
            _ => Consensus::Unknown,
        }
    }

    pub fn is_reached(&self) -> bool {
        matches!(self, Consensus::Reached)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Consensus::Unknown)
    }

    /// Tri-state as an optional flag
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Consensus::Reached => Some(true),
            Consensus::NotReached => Some(false),
            Consensus::Unknown => None,
        }
    }
}

impl std::fmt::Display for Consensus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Consensus::Reached => write!(f, "Reached"),
            Consensus::NotReached => write!(f, "Not reached"),
            Consensus::Unknown => write!(f, "Unknown"),
        }
    }
}

/// The fully parsed record of one deliberation document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub timestamp: String,
    pub topic: String,
    pub stance: String,
    pub participants: Vec<String>,
    pub mode: String,
    pub rounds: Vec<Round>,
    pub consensus: Consensus,
    pub agreed_position: Option<String>,
    pub action_items: Vec<String>,
    /// Source text, kept for debugging
    pub raw_content: String,
}

impl Session {
    /// Deterministic hash of timestamp, topic and stance (lowercase hex SHA-256).
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.timestamp.as_bytes());
        hasher.update(self.topic.as_bytes());
        hasher.update(self.stance.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Timestamp as `YYYY-MM-DD HH:MM:SS`, or the raw token if it does not parse.
    pub fn display_date(&self) -> String {
        match NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT) {
            Ok(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            Err(_) => self.timestamp.clone(),
        }
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }
}

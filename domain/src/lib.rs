//! Domain layer for council-viz
//!
//! This crate contains the council session model and the document parser.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! A council session is an append-only markdown transcript of a deliberation
//! between two participants. [`SessionParser`] turns it into an immutable
//! [`Session`]:
//!
//! - **Header fields**: timestamp, topic, stance, participants, mode
//! - **Rounds**: turn pairs; the second turn may end with a structured reply
//!   block (status, agreement, confidence, key points, action items)
//! - **Consensus section**: outcome, agreed position, final action items
//!
//! Parsing is best-effort: a document that matches nothing still yields a
//! session with default fields.
//!
//! ## Report configuration
//!
//! [`Palette`] and [`ReportFormat`] describe how a session is rendered.

pub mod config;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigIssueCode, Palette, ReportFormat, Severity, UnknownFormat, is_hex_color,
};
pub use core::string::{DEFAULT_RESPONSE_CHARS, first_line, format_response, preview};
pub use session::{
    entities::{Consensus, ReplyStatus, Round, Session, StructuredReply},
    labels::{Speaker, TurnLabels},
    parser::SessionParser,
    reply::split_reply,
};

//! Council session documents.
//!
//! - [`fields`]: header metadata (timestamp, topic, stance, participants, mode)
//! - [`rounds`]: splitting the body into turn pairs
//! - [`reply`]: the second speaker's structured reply block
//! - [`parser::SessionParser`]: assembly into an immutable [`entities::Session`]

pub mod entities;
pub mod fields;
pub mod labels;
pub mod parser;
pub mod reply;
pub mod rounds;

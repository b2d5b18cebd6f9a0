//! Core helpers shared across the domain.
//!
//! - [`string`]: character-safe previews and turn shortening for reports

pub mod string;

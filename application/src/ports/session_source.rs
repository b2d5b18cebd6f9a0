//! Session source port
//!
//! Defines where session documents come from.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading a session document
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Session file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read session file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// Check if this error means the document does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::NotFound(_))
    }
}

/// Source of session documents
///
/// Implementations (adapters) live in the infrastructure layer.
pub trait SessionSource: Send + Sync {
    /// Whether a document exists at `location`
    fn exists(&self, location: &Path) -> bool;

    /// Read the whole document as text
    fn read(&self, location: &Path) -> Result<String, SourceError>;
}

//! Report renderer port
//!
//! Renderers turn a parsed [`Session`] into an output document. They are pure
//! with respect to the session: the same session and style always produce
//! the same document.

use crate::config::ReportStyle;
use council_domain::{ReportFormat, Session};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while rendering a report
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("{format} rendering requires one of: {}. {hint}", .tried.join(", "))]
    MissingDependency {
        format: ReportFormat,
        tried: Vec<String>,
        hint: String,
    },

    #[error("Converter '{command}' failed ({status}): {stderr}")]
    ConverterFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Template error: {0}")]
    Template(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    /// Check if this error is a missing external tool
    pub fn is_missing_dependency(&self) -> bool {
        matches!(self, RenderError::MissingDependency { .. })
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RenderError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Renders a session into one output format
pub trait ReportRenderer: Send + Sync {
    /// Format produced by this renderer
    fn format(&self) -> ReportFormat;

    /// Render `session` and write the document to `output`
    fn render(
        &self,
        session: &Session,
        style: &ReportStyle,
        output: &Path,
    ) -> Result<(), RenderError>;
}

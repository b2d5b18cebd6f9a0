//! JSON dump of the parsed session

use council_application::{RenderError, ReportRenderer, ReportStyle};
use council_domain::{ReportFormat, Session};
use std::path::Path;

/// Writes the parsed [`Session`] as pretty-printed JSON.
///
/// The style is ignored; the output shows exactly what the parser produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render_json(&self, session: &Session) -> Result<String, RenderError> {
        serde_json::to_string_pretty(session).map_err(|e| RenderError::Serialization(e.to_string()))
    }
}

impl ReportRenderer for JsonRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }

    fn render(
        &self,
        session: &Session,
        _style: &ReportStyle,
        output: &Path,
    ) -> Result<(), RenderError> {
        let json = self.render_json(session)?;
        std::fs::write(output, json).map_err(|e| RenderError::io(output, e))
    }
}

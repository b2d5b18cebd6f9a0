//! PDF renderer: HTML report converted by an external tool

use super::convert::{Converter, PDF_CONVERTERS};
use super::html::HtmlRenderer;
use council_application::{RenderError, ReportRenderer, ReportStyle};
use council_domain::{ReportFormat, Session};
use std::path::Path;
use tempfile::Builder;

/// Renders the HTML report into a scratch file and converts it to PDF.
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    html: HtmlRenderer,
    command: Option<String>,
}

impl PdfRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this converter instead of auto-detecting one
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }
}

impl ReportRenderer for PdfRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Pdf
    }

    fn render(
        &self,
        session: &Session,
        style: &ReportStyle,
        output: &Path,
    ) -> Result<(), RenderError> {
        let converter = Converter::discover(&PDF_CONVERTERS, self.command.as_deref())?;
        let html = self.html.render_html(session, style)?;

        let scratch = Builder::new()
            .prefix("council-viz-")
            .suffix(".html")
            .tempfile()
            .map_err(|e| RenderError::io(std::env::temp_dir(), e))?;
        std::fs::write(scratch.path(), html).map_err(|e| RenderError::io(scratch.path(), e))?;

        converter.run(scratch.path(), output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_converter_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("report.pdf");
        let error = PdfRenderer::new()
            .with_command("definitely_not_a_converter_123xyz")
            .render(&Session::default(), &ReportStyle::default(), &output)
            .unwrap_err();

        assert!(error.is_missing_dependency());
        assert!(!output.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_converter_receives_html_then_output() {
        // `cp <in.html> <out.pdf>` stands in for a real converter.
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("report.pdf");
        PdfRenderer::new()
            .with_command("cp")
            .render(&Session::default(), &ReportStyle::default(), &output)
            .unwrap();

        let copied = std::fs::read_to_string(&output).unwrap();
        assert!(copied.starts_with("<!DOCTYPE html>"));
    }
}

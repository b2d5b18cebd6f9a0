//! PNG renderer: SVG report rasterized at 2x by an external tool

use super::convert::{Converter, PNG_CONVERTERS};
use super::svg::SvgRenderer;
use council_application::{RenderError, ReportRenderer, ReportStyle};
use council_domain::{ReportFormat, Session};
use std::path::Path;
use tempfile::Builder;

/// Renders the SVG overview into a scratch file and rasterizes it.
#[derive(Debug, Clone, Default)]
pub struct PngRenderer {
    svg: SvgRenderer,
    command: Option<String>,
}

impl PngRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this converter instead of auto-detecting one
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }
}

impl ReportRenderer for PngRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Png
    }

    fn render(
        &self,
        session: &Session,
        style: &ReportStyle,
        output: &Path,
    ) -> Result<(), RenderError> {
        let converter = Converter::discover(&PNG_CONVERTERS, self.command.as_deref())?;
        let svg = self.svg.render_svg(session, style);

        let scratch = Builder::new()
            .prefix("council-viz-")
            .suffix(".svg")
            .tempfile()
            .map_err(|e| RenderError::io(std::env::temp_dir(), e))?;
        std::fs::write(scratch.path(), svg).map_err(|e| RenderError::io(scratch.path(), e))?;

        converter.run(scratch.path(), output)
    }
}

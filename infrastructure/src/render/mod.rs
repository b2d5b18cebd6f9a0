//! Report renderers
//!
//! One [`ReportRenderer`] per [`ReportFormat`](council_domain::ReportFormat):
//!
//! | Format | Renderer | How |
//! |--------|----------|-----|
//! | html | [`HtmlRenderer`] | minijinja template |
//! | svg  | [`SvgRenderer`]  | fixed-height blocks written as XML |
//! | json | [`JsonRenderer`] | serde dump of the session |
//! | pdf  | [`PdfRenderer`]  | HTML + external converter |
//! | png  | [`PngRenderer`]  | SVG + external rasterizer |

pub mod convert;
mod html;
mod json;
mod pdf;
mod png;
mod svg;

pub use convert::{Converter, ConverterKind};
pub use html::{HtmlRenderer, REPORT_TITLE};
pub use json::JsonRenderer;
pub use pdf::PdfRenderer;
pub use png::PngRenderer;
pub use svg::{SvgRenderer, document_height, escape_xml};

use council_application::ReportRenderer;
use std::sync::Arc;

/// Explicit converter commands; `None` means auto-detect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConverterCommands {
    pub pdf: Option<String>,
    pub png: Option<String>,
}

/// All built-in renderers.
pub fn standard_renderers(commands: ConverterCommands) -> Vec<Arc<dyn ReportRenderer>> {
    let mut pdf = PdfRenderer::new();
    if let Some(command) = commands.pdf {
        pdf = pdf.with_command(command);
    }
    let mut png = PngRenderer::new();
    if let Some(command) = commands.png {
        png = png.with_command(command);
    }

    vec![
        Arc::new(pdf),
        Arc::new(png),
        Arc::new(SvgRenderer::new()),
        Arc::new(HtmlRenderer::new()),
        Arc::new(JsonRenderer::new()),
    ]
}

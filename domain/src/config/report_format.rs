//! Report format value object

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Output document format
///
/// The lowercase name doubles as the output file extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// PDF document (default)
    #[default]
    Pdf,
    /// PNG image, rasterized from the SVG report
    Png,
    /// SVG drawing
    Svg,
    /// Standalone HTML page
    Html,
    /// Parsed session as pretty JSON
    Json,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 5] = [
        ReportFormat::Pdf,
        ReportFormat::Png,
        ReportFormat::Svg,
        ReportFormat::Html,
        ReportFormat::Json,
    ];

    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Png => "png",
            ReportFormat::Svg => "svg",
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Error for an unrecognised format name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown report format '{0}' (expected pdf, png, svg, html or json)")]
pub struct UnknownFormat(pub String);

impl FromStr for ReportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ReportFormat::ALL
            .into_iter()
            .find(|format| format.extension() == lower)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pdf() {
        assert_eq!(ReportFormat::default(), ReportFormat::Pdf);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&ReportFormat::Svg).unwrap();
        assert_eq!(json, "\"svg\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: ReportFormat = serde_json::from_str("\"html\"").unwrap();
        assert_eq!(format, ReportFormat::Html);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("PNG".parse::<ReportFormat>(), Ok(ReportFormat::Png));
        assert_eq!(
            "docx".parse::<ReportFormat>(),
            Err(UnknownFormat("docx".to_string()))
        );
    }
}

//! Report style: the read-only rendering configuration.
//!
//! [`ReportStyle`] is built once at process start from defaults and config
//! overrides and passed explicitly to every renderer.

use council_domain::{DEFAULT_RESPONSE_CHARS, Palette, TurnLabels};

/// Rendering configuration shared by all report renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportStyle {
    /// Colour palette
    pub palette: Palette,
    /// Turn labels and the names shown for them
    pub labels: TurnLabels,
    /// Character limit for a turn in full-text reports
    pub max_response_chars: usize,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            labels: TurnLabels::default(),
            max_response_chars: DEFAULT_RESPONSE_CHARS,
        }
    }
}

impl ReportStyle {
    // ==================== Builder Methods ====================

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_labels(mut self, labels: TurnLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_max_response_chars(mut self, max: usize) -> Self {
        self.max_response_chars = max;
        self
    }
}

//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.
//! Resolution into runtime values is lenient: invalid entries produce a
//! [`ConfigIssue`] and fall back to the built-in default.

mod converters;
mod labels;
mod output;
mod palette;

pub use converters::FileConvertersConfig;
pub use labels::FileLabelsConfig;
pub use output::FileOutputConfig;
pub use palette::FilePaletteConfig;

use council_application::ReportStyle;
use council_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Output settings
    pub output: FileOutputConfig,
    /// Participant labels
    pub labels: FileLabelsConfig,
    /// Colour overrides
    pub palette: FilePaletteConfig,
    /// External PDF/PNG converters
    pub converters: FileConvertersConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.to_report_style().1;
        issues.extend(self.converters.parse_commands().1);
        issues
    }

    /// Build the rendering style from the `[output]`, `[labels]` and
    /// `[palette]` sections.
    pub fn to_report_style(&self) -> (ReportStyle, Vec<ConfigIssue>) {
        let (palette, mut issues) = self.palette.to_palette();
        let (labels, label_issues) = self.labels.to_turn_labels();
        let (max_chars, limit_issues) = self.output.parse_max_response_chars();
        issues.extend(label_issues);
        issues.extend(limit_issues);

        let style = ReportStyle::default()
            .with_palette(palette)
            .with_labels(labels)
            .with_max_response_chars(max_chars);
        (style, issues)
    }
}

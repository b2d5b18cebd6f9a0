//! Output configuration from TOML (`[output]` section)

use council_domain::{ConfigIssue, ConfigIssueCode, DEFAULT_RESPONSE_CHARS, ReportFormat};
use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Report format used when `--format` is not given
    pub format: Option<ReportFormat>,
    /// Enable colored terminal output
    pub color: bool,
    /// Character limit for a turn in full-text reports
    pub max_response_chars: usize,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            max_response_chars: DEFAULT_RESPONSE_CHARS,
        }
    }
}

impl FileOutputConfig {
    /// Response limit, falling back to the default when zero.
    pub fn parse_max_response_chars(&self) -> (usize, Vec<ConfigIssue>) {
        if self.max_response_chars == 0 {
            let issue = ConfigIssue::error(
                ConfigIssueCode::ZeroResponseLimit,
                format!(
                    "output.max_response_chars: must be greater than 0, using {}",
                    DEFAULT_RESPONSE_CHARS
                ),
            );
            return (DEFAULT_RESPONSE_CHARS, vec![issue]);
        }
        (self.max_response_chars, Vec::new())
    }
}

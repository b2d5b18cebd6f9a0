//! Structured configuration issues.
//!
//! Config sections are resolved leniently: an invalid value is reported as a
//! [`ConfigIssue`] and the built-in default is used in its place.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The value was rejected and replaced by a default.
    Error,
    /// The value was accepted but is probably not what was meant.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A palette value is not a `#RGB` / `#RRGGBB` colour.
    InvalidColor { key: String, value: String },
    /// A `[palette]` key that names no palette colour.
    UnknownPaletteKey { key: String },
    /// A participant label or display name is blank.
    EmptyLabel { field: String },
    /// Both participants use the same label.
    DuplicateLabel { label: String },
    /// `max_response_chars` is zero.
    ZeroResponseLimit,
    /// A converter command is blank.
    EmptyConverter { format: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

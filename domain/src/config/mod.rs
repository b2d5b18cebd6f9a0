//! Report configuration value objects

mod palette;
mod report_format;
pub mod validation;

pub use palette::{Palette, is_hex_color};
pub use report_format::{ReportFormat, UnknownFormat};
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};

//! Application-level configuration.
//!
//! - [`ReportStyle`]: everything a renderer needs besides the session itself

pub mod report_style;

pub use report_style::ReportStyle;

//! Application layer for council-viz
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ReportStyle;
pub use ports::{
    progress::{NoProgress, RenderProgressNotifier},
    report_renderer::{RenderError, ReportRenderer},
    session_source::{SessionSource, SourceError},
};
pub use use_cases::render_report::{
    RenderReportError, RenderReportInput, RenderReportOutput, RenderReportUseCase,
    default_output_path,
};

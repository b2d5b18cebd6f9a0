//! Progress notification port
//!
//! Defines the interface for reporting progress while a report is produced.

use council_domain::{ReportFormat, Session};
use std::path::Path;

/// Callback for progress updates during report rendering
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain lines, nothing).
pub trait RenderProgressNotifier: Send + Sync {
    /// Called before the session document is read
    fn on_parse_start(&self, _source: &Path) {}

    /// Called once the session is parsed
    fn on_parsed(&self, _session: &Session) {}

    /// Called when rendering starts
    fn on_render_start(&self, _format: ReportFormat) {}

    /// Called after the output document is written
    fn on_render_complete(&self, _output: &Path) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl RenderProgressNotifier for NoProgress {}

//! Progress reporting for report rendering

use colored::Colorize;
use council_application::RenderProgressNotifier;
use council_domain::{ReportFormat, Session};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner (interactive terminals)
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start(&self, prefix: &str, message: String) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(prefix.to_string());
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(previous) = slot.replace(pb) {
                previous.finish_and_clear();
            }
        }
    }

    fn finish(&self, message: String) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(pb) = slot.take() {
                pb.finish_with_message(message);
            }
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderProgressNotifier for ProgressReporter {
    fn on_parse_start(&self, path: &Path) {
        self.start("Parsing", path.display().to_string());
    }

    fn on_parsed(&self, session: &Session) {
        self.finish(format!(
            "{} ({} rounds)",
            "done".green(),
            session.round_count()
        ));
    }

    fn on_render_start(&self, format: ReportFormat) {
        self.start(
            "Rendering",
            format!("{}...", format.extension().to_uppercase()),
        );
    }

    fn on_render_complete(&self, _output: &Path) {
        self.finish("done".green().to_string());
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl RenderProgressNotifier for SimpleProgress {
    fn on_parse_start(&self, path: &Path) {
        println!("{} Parsing session file: {}", "->".cyan(), path.display());
    }

    fn on_render_start(&self, format: ReportFormat) {
        println!(
            "{} Rendering to {}...",
            "->".cyan(),
            format.extension().to_uppercase()
        );
    }
}

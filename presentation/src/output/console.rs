//! Console output formatter for rendered sessions

use colored::Colorize;
use council_domain::{Consensus, Session, preview};
use std::path::Path;

/// Characters of the topic shown in the summary
const TOPIC_PREVIEW_CHARS: usize = 50;

/// Formats session summaries and status lines for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Short summary of a parsed session
    pub fn summary(session: &Session) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "  {} {}\n",
            "Topic:".cyan().bold(),
            preview(&session.topic, TOPIC_PREVIEW_CHARS)
        ));
        if !session.timestamp.is_empty() {
            output.push_str(&format!(
                "  {} {}\n",
                "Date:".cyan().bold(),
                session.display_date()
            ));
        }
        output.push_str(&format!(
            "  {} {}\n",
            "Rounds:".cyan().bold(),
            session.round_count()
        ));
        output.push_str(&format!(
            "  {} {}\n",
            "Consensus:".cyan().bold(),
            Self::consensus(session.consensus)
        ));
        if !session.action_items.is_empty() {
            output.push_str(&format!(
                "  {} {}\n",
                "Action items:".cyan().bold(),
                session.action_items.len()
            ));
        }

        output
    }

    /// Force coloured output off (`output.color = false`)
    pub fn disable_color() {
        colored::control::set_override(false);
    }

    /// Final line naming the written report
    pub fn saved(path: &Path) -> String {
        format!("Output saved to: {}", path.display().to_string().bold())
    }

    /// Error line for stderr
    pub fn error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    fn consensus(consensus: Consensus) -> String {
        match consensus {
            Consensus::Reached => consensus.to_string().green().to_string(),
            Consensus::NotReached => consensus.to_string().yellow().to_string(),
            Consensus::Unknown => consensus.to_string().dimmed().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain<T>(f: impl FnOnce() -> T) -> T {
        colored::control::set_override(false);
        f()
    }

    #[test]
    fn test_summary() {
        let session = Session {
            timestamp: "2025-01-15-143022".to_string(),
            topic: "t".repeat(60),
            consensus: Consensus::Reached,
            action_items: vec!["a".to_string(), "b".to_string()],
            ..Default::default()
        };
        let summary = plain(|| ConsoleFormatter::summary(&session));

        assert!(summary.contains(&format!("Topic: {}...", "t".repeat(50))));
        assert!(summary.contains("Date: 2025-01-15 14:30:22"));
        assert!(summary.contains("Rounds: 0"));
        assert!(summary.contains("Consensus: Reached"));
        assert!(summary.contains("Action items: 2"));
    }

    #[test]
    fn test_summary_minimal_session() {
        let summary = plain(|| ConsoleFormatter::summary(&Session::default()));
        assert!(!summary.contains("Date:"));
        assert!(!summary.contains("Action items:"));
        assert!(summary.contains("Consensus: Unknown"));
    }

    #[test]
    fn test_status_lines() {
        let (saved, error) = plain(|| {
            (
                ConsoleFormatter::saved(Path::new("out/report.pdf")),
                ConsoleFormatter::error("Session file not found: x.md"),
            )
        });
        assert_eq!(saved, "Output saved to: out/report.pdf");
        assert_eq!(error, "Error: Session file not found: x.md");
    }
}

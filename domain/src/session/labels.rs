//! Participant labels used by round headers.

use serde::{Deserialize, Serialize};

/// A participant's label in the document plus how reports show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    /// Label inside `**LABEL:**` (e.g. `CLAUDE`)
    pub label: String,
    /// Name shown in reports (e.g. `Claude (Chair)`)
    pub display_name: String,
}

impl Speaker {
    pub fn new(label: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            display_name: display_name.into(),
        }
    }

    /// Bold marker as written in the document (`**CLAUDE:**`)
    pub fn marker(&self) -> String {
        format!("**{}:**", self.label)
    }

    /// Single-letter icon: first character of the display name, uppercased
    pub fn icon(&self) -> String {
        self.display_name
            .chars()
            .next()
            .or_else(|| self.label.chars().next())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// The two turn labels of a council session.
///
/// The first speaker chairs the session and writes free text; the second
/// speaker's turn may carry a structured reply block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnLabels {
    pub first: Speaker,
    pub second: Speaker,
}

impl TurnLabels {
    pub fn new(first: Speaker, second: Speaker) -> Self {
        Self { first, second }
    }
}

impl Default for TurnLabels {
    fn default() -> Self {
        Self {
            first: Speaker::new("CLAUDE", "Claude (Chair)"),
            second: Speaker::new("GEMINI", "Gemini"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let labels = TurnLabels::default();
        assert_eq!(labels.first.marker(), "**CLAUDE:**");
        assert_eq!(labels.second.marker(), "**GEMINI:**");
        assert_eq!(labels.first.icon(), "C");
        assert_eq!(labels.second.icon(), "G");
    }

    #[test]
    fn test_icon_falls_back_to_label() {
        let speaker = Speaker::new("gpt", "");
        assert_eq!(speaker.icon(), "G");
    }
}

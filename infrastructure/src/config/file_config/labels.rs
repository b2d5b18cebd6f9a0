//! Participant label configuration from TOML (`[labels]` section)

use council_domain::{ConfigIssue, ConfigIssueCode, Speaker, TurnLabels};
use serde::{Deserialize, Serialize};

/// Raw label configuration from TOML
///
/// # Example
///
/// ```toml
/// [labels]
/// first = "CLAUDE"               # **CLAUDE:** opens each round
/// first_name = "Claude (Chair)"
/// second = "GEMINI"              # **GEMINI:** answers, may carry a reply block
/// second_name = "Gemini"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLabelsConfig {
    pub first: String,
    pub first_name: String,
    pub second: String,
    pub second_name: String,
}

impl Default for FileLabelsConfig {
    fn default() -> Self {
        let defaults = TurnLabels::default();
        Self {
            first: defaults.first.label,
            first_name: defaults.first.display_name,
            second: defaults.second.label,
            second_name: defaults.second.display_name,
        }
    }
}

impl FileLabelsConfig {
    /// Resolve into [`TurnLabels`], replacing blank fields with defaults.
    ///
    /// Identical labels for both participants make rounds unparseable, so
    /// that case falls back to the default labels entirely.
    pub fn to_turn_labels(&self) -> (TurnLabels, Vec<ConfigIssue>) {
        let defaults = Self::default();
        let mut issues = Vec::new();

        let mut pick = |field: &str, value: &str, fallback: &str| -> String {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyLabel {
                        field: field.to_string(),
                    },
                    format!("labels.{}: cannot be empty, using '{}'", field, fallback),
                ));
                fallback.to_string()
            } else {
                value.trim().to_string()
            }
        };

        let first = pick("first", &self.first, &defaults.first);
        let first_name = pick("first_name", &self.first_name, &defaults.first_name);
        let second = pick("second", &self.second, &defaults.second);
        let second_name = pick("second_name", &self.second_name, &defaults.second_name);

        if first == second {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::DuplicateLabel {
                    label: first.clone(),
                },
                format!(
                    "labels: first and second are both '{}', using default labels",
                    first
                ),
            ));
            return (TurnLabels::default(), issues);
        }

        let labels = TurnLabels::new(
            Speaker::new(first, first_name),
            Speaker::new(second, second_name),
        );
        (labels, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolves_to_default_labels() {
        let (labels, issues) = FileLabelsConfig::default().to_turn_labels();
        assert_eq!(labels, TurnLabels::default());
        assert!(issues.is_empty());
    }

    #[test]
    fn test_partial_override() {
        let config: super::super::FileConfig = toml::from_str(
            r#"
[labels]
second = "GPT"
second_name = "GPT (Critic)"
"#,
        )
        .unwrap();
        let (labels, issues) = config.labels.to_turn_labels();
        assert!(issues.is_empty());
        assert_eq!(labels.first.label, "CLAUDE");
        assert_eq!(labels.second.marker(), "**GPT:**");
        assert_eq!(labels.second.icon(), "G");
    }

    #[test]
    fn test_empty_label_falls_back() {
        let config = FileLabelsConfig {
            first_name: "  ".to_string(),
            ..Default::default()
        };
        let (labels, issues) = config.to_turn_labels();
        assert_eq!(labels.first.display_name, "Claude (Chair)");
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::EmptyLabel {
                field: "first_name".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_labels_fall_back() {
        let config = FileLabelsConfig {
            second: "CLAUDE".to_string(),
            ..Default::default()
        };
        let (labels, issues) = config.to_turn_labels();
        assert_eq!(labels, TurnLabels::default());
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::DuplicateLabel { .. }
        ));
    }
}

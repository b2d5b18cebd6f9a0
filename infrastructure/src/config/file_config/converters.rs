//! External converter configuration from TOML (`[converters]` section)

use council_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Explicit converter commands. Unset entries use auto-detection.
///
/// # Example
///
/// ```toml
/// [converters]
/// pdf = "wkhtmltopdf"
/// png = "/opt/homebrew/bin/rsvg-convert"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConvertersConfig {
    /// HTML to PDF converter
    pub pdf: Option<String>,
    /// SVG to PNG converter
    pub png: Option<String>,
}

impl FileConvertersConfig {
    /// Non-blank `(pdf, png)` commands.
    pub fn parse_commands(&self) -> ((Option<String>, Option<String>), Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut parse = |format: &str, value: &Option<String>| -> Option<String> {
            match value {
                Some(command) if command.trim().is_empty() => {
                    issues.push(ConfigIssue::error(
                        ConfigIssueCode::EmptyConverter {
                            format: format.to_string(),
                        },
                        format!("converters.{}: cannot be empty, auto-detecting", format),
                    ));
                    None
                }
                Some(command) => Some(command.trim().to_string()),
                None => None,
            }
        };
        let pdf = parse("pdf", &self.pdf);
        let png = parse("png", &self.png);
        ((pdf, png), issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_deserialize() {
        let config: super::super::FileConfig = toml::from_str(
            r#"
[converters]
pdf = "wkhtmltopdf"
"#,
        )
        .unwrap();
        let ((pdf, png), issues) = config.converters.parse_commands();
        assert_eq!(pdf.as_deref(), Some("wkhtmltopdf"));
        assert!(png.is_none());
        assert!(issues.is_empty());
    }

    #[test]
    fn test_blank_command_is_ignored() {
        let config = FileConvertersConfig {
            pdf: None,
            png: Some(" ".to_string()),
        };
        let ((_, png), issues) = config.parse_commands();
        assert!(png.is_none());
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::EmptyConverter {
                format: "png".to_string()
            }
        );
    }
}

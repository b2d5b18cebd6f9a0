//! Palette overrides from TOML (`[palette]` section)

use council_domain::{ConfigIssue, ConfigIssueCode, Palette, is_hex_color};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw palette overrides: colour name to `#RRGGBB`.
///
/// # Example
///
/// ```toml
/// [palette]
/// first_accent = "#2563EB"
/// header_bg = "#111827"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilePaletteConfig {
    pub colors: BTreeMap<String, String>,
}

impl FilePaletteConfig {
    /// Apply the valid overrides to the default palette.
    pub fn to_palette(&self) -> (Palette, Vec<ConfigIssue>) {
        let mut palette = Palette::default();
        let mut issues = Vec::new();

        for (key, value) in &self.colors {
            let Some(slot) = palette.slot_mut(key) else {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::UnknownPaletteKey { key: key.clone() },
                    format!("palette.{}: unknown colour name, ignored", key),
                ));
                continue;
            };
            if !is_hex_color(value) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidColor {
                        key: key.clone(),
                        value: value.clone(),
                    },
                    format!(
                        "palette.{}: '{}' is not a #RRGGBB colour, keeping {}",
                        key, value, slot
                    ),
                ));
                continue;
            }
            *slot = value.clone();
        }

        (palette, issues)
    }
}

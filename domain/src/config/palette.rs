//! Report colour palette
//!
//! A professional monochrome palette with muted accents. Built once at
//! startup (defaults plus config overrides) and handed to renderers.

use crate::session::entities::ReplyStatus;
use serde::{Deserialize, Serialize};

/// Named report colours, as `#RRGGBB` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    // Text
    pub text_primary: String,
    pub text_secondary: String,
    pub text_muted: String,

    // Backgrounds
    pub page_bg: String,
    pub card_bg: String,
    pub section_bg: String,

    // Header
    pub header_bg: String,
    pub header_text: String,

    // Participant accents (borders, icons)
    pub first_accent: String,
    pub second_accent: String,

    // Status badges
    pub status_resolved_bg: String,
    pub status_resolved_text: String,
    pub status_continue_bg: String,
    pub status_continue_text: String,
    pub status_deadlock_bg: String,
    pub status_deadlock_text: String,

    // Consensus box
    pub consensus_bg: String,
    pub consensus_border: String,

    // Borders
    pub border_light: String,
    pub border_medium: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text_primary: "#1F2937".to_string(),
            text_secondary: "#6B7280".to_string(),
            text_muted: "#9CA3AF".to_string(),
            page_bg: "#FFFFFF".to_string(),
            card_bg: "#FFFFFF".to_string(),
            section_bg: "#F9FAFB".to_string(),
            header_bg: "#1F2937".to_string(),
            header_text: "#FFFFFF".to_string(),
            first_accent: "#3B82F6".to_string(),
            second_accent: "#059669".to_string(),
            status_resolved_bg: "#ECFDF5".to_string(),
            status_resolved_text: "#065F46".to_string(),
            status_continue_bg: "#FEF3C7".to_string(),
            status_continue_text: "#92400E".to_string(),
            status_deadlock_bg: "#FEE2E2".to_string(),
            status_deadlock_text: "#991B1B".to_string(),
            consensus_bg: "#F9FAFB".to_string(),
            consensus_border: "#D1D5DB".to_string(),
            border_light: "#E5E7EB".to_string(),
            border_medium: "#D1D5DB".to_string(),
        }
    }
}

impl Palette {
    /// Badge `(background, text)` colours for a status.
    ///
    /// Unknown tokens get the neutral section background.
    pub fn status_colors(&self, status: &ReplyStatus) -> (&str, &str) {
        match status {
            ReplyStatus::Resolved => (
                self.status_resolved_bg.as_str(),
                self.status_resolved_text.as_str(),
            ),
            ReplyStatus::Continue => (
                self.status_continue_bg.as_str(),
                self.status_continue_text.as_str(),
            ),
            ReplyStatus::Deadlock => (
                self.status_deadlock_bg.as_str(),
                self.status_deadlock_text.as_str(),
            ),
            ReplyStatus::Other(_) => (
                self.section_bg.as_str(),
                self.text_secondary.as_str(),
            ),
        }
    }

    /// Mutable slot for a colour by its snake_case name
    pub fn slot_mut(&mut self, name: &str) -> Option<&mut String> {
        let slot = match name {
            "text_primary" => &mut self.text_primary,
            "text_secondary" => &mut self.text_secondary,
            "text_muted" => &mut self.text_muted,
            "page_bg" => &mut self.page_bg,
            "card_bg" => &mut self.card_bg,
            "section_bg" => &mut self.section_bg,
            "header_bg" => &mut self.header_bg,
            "header_text" => &mut self.header_text,
            "first_accent" => &mut self.first_accent,
            "second_accent" => &mut self.second_accent,
            "status_resolved_bg" => &mut self.status_resolved_bg,
            "status_resolved_text" => &mut self.status_resolved_text,
            "status_continue_bg" => &mut self.status_continue_bg,
            "status_continue_text" => &mut self.status_continue_text,
            "status_deadlock_bg" => &mut self.status_deadlock_bg,
            "status_deadlock_text" => &mut self.status_deadlock_text,
            "consensus_bg" => &mut self.consensus_bg,
            "consensus_border" => &mut self.consensus_border,
            "border_light" => &mut self.border_light,
            "border_medium" => &mut self.border_medium,
            _ => return None,
        };
        Some(slot)
    }
}

/// `#RGB` or `#RRGGBB`
pub fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| {
            matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        })
}

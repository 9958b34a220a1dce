//! Composer configuration: layout constants and link coloring.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::style::LinkColorPolicy;

/// Tunable layout values used by [`ScreenComposer`](super::ScreenComposer).
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    pub card_max_width_px: u16,
    pub page_padding_px: u16,
    pub section_gap_px: u16,
    pub placeholder_height_px: u16,
    pub modal_min_height_vh: f32,
    pub link_color: LinkColorPolicy,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            card_max_width_px: 900,
            page_padding_px: 16,
            section_gap_px: 16,
            placeholder_height_px: 200,
            modal_min_height_vh: 80.0,
            link_color: LinkColorPolicy::default(),
        }
    }
}

impl ComposerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Set the card max width (builder).
    pub fn with_card_max_width(mut self, px: u16) -> Self {
        self.card_max_width_px = px;
        self
    }

    /// Set the page padding (builder).
    pub fn with_page_padding(mut self, px: u16) -> Self {
        self.page_padding_px = px;
        self
    }

    /// Set the gap between arranged sections (builder).
    pub fn with_section_gap(mut self, px: u16) -> Self {
        self.section_gap_px = px;
        self
    }

    /// Set the image placeholder height (builder).
    pub fn with_placeholder_height(mut self, px: u16) -> Self {
        self.placeholder_height_px = px;
        self
    }

    /// Set the modal viewport minimum height (builder).
    pub fn with_modal_min_height(mut self, vh: f32) -> Self {
        self.modal_min_height_vh = vh;
        self
    }

    /// Set the link color policy (builder).
    pub fn with_link_color(mut self, policy: LinkColorPolicy) -> Self {
        self.link_color = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Rgba;

    #[test]
    fn defaults() {
        let config = ComposerConfig::default();
        assert_eq!(config.card_max_width_px, 900);
        assert_eq!(config.page_padding_px, 16);
        assert_eq!(config.section_gap_px, 16);
        assert_eq!(config.placeholder_height_px, 200);
        assert_eq!(config.modal_min_height_vh, 80.0);
        assert_eq!(
            config.link_color,
            LinkColorPolicy::Fixed {
                color: Rgba::hex(0x2563EB)
            }
        );
    }

    #[test]
    fn builder_chain() {
        let config = ComposerConfig::new()
            .with_card_max_width(640)
            .with_placeholder_height(120)
            .with_link_color(LinkColorPolicy::FollowPriority);
        assert_eq!(config.card_max_width_px, 640);
        assert_eq!(config.placeholder_height_px, 120);
        assert_eq!(config.link_color, LinkColorPolicy::FollowPriority);
        assert_eq!(config.section_gap_px, 16);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            ComposerConfig::from_json(r#"{"section_gap_px": 24, "link_color": {"mode": "follow_priority"}}"#)
                .unwrap();
        assert_eq!(config.section_gap_px, 24);
        assert_eq!(config.card_max_width_px, 900);
        assert_eq!(config.link_color, LinkColorPolicy::FollowPriority);
    }

    #[test]
    fn malformed_json_is_config_error() {
        assert!(matches!(
            ComposerConfig::from_json("{"),
            Err(ConfigError::InvalidJson(_))
        ));
    }
}

//! Root document: [`ScreenConfig`].

use serde::{Deserialize, Serialize};

use super::cta::CtaConfig;
use super::section::Section;
use super::tokens::{AccentToken, BackgroundToken, ColorScheme, LayoutType};
use crate::error::ConfigError;

/// Optional theme; every unset field falls back to its token default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenTheme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<ColorScheme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundToken>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<AccentToken>,
}

/// A declarative, versioned screen document.
///
/// The document is owned by whoever edits it; rendering only ever borrows a
/// snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    pub id: String,
    pub version: u64,
    pub layout: LayoutType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ScreenTheme>,
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Global CTAs, rendered after every section.
    #[serde(default)]
    pub ctas: Vec<CtaConfig>,
}

impl ScreenConfig {
    /// An empty version-1 document.
    pub fn new(id: impl Into<String>, layout: LayoutType) -> Self {
        Self {
            id: id.into(),
            version: 1,
            layout,
            theme: None,
            sections: Vec::new(),
            ctas: Vec::new(),
        }
    }

    /// Strict load: any value outside the closed schema is an error.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(input).map_err(|e| ConfigError::InvalidDocument(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(ConfigError::from)
    }

    /// Set the theme (builder).
    pub fn with_theme(mut self, theme: ScreenTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Append a section (builder).
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Append a global CTA (builder).
    pub fn with_cta(mut self, cta: CtaConfig) -> Self {
        self.ctas.push(cta);
        self
    }

    /// Record an edit. Versions only ever move forward.
    pub fn bump_version(&mut self) -> u64 {
        self.version = self.version.saturating_add(1);
        self.version
    }
}

//! Text blocks and their optional inline style.

use serde::{Deserialize, Serialize};

use super::tokens::{SpacingToken, TextColorToken, TextVariant};

/// Named font weight as it appears in documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextWeight {
    Regular,
    Medium,
    Semibold,
    Bold,
}

/// Horizontal alignment of a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    Left,
    Right,
    Center,
    Justify,
}

/// Letter-case transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    #[default]
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

/// Inline overrides layered on top of a block's variant preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<TextColorToken>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<TextWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<TextTransform>,
    /// Line clamp; values `<= 0` are ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing_top: Option<SpacingToken>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing_bottom: Option<SpacingToken>,
}

/// One run of literal text rendered with a typographic preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub id: String,
    pub variant: TextVariant,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

impl TextBlock {
    /// Create an unstyled block.
    pub fn new(id: impl Into<String>, variant: TextVariant, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            variant,
            text: text.into(),
            style: None,
        }
    }

    /// Attach inline style (builder).
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = Some(style);
        self
    }
}

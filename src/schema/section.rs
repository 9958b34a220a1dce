//! Sections: the renderable units of a screen.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cta::CtaConfig;
use super::text::TextBlock;
use super::tokens::SpacingToken;

/// Platform a screen is being rendered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Web,
    Ios,
    Android,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Ios => "ios",
            Self::Android => "android",
        }
    }
}

/// Width share of a section inside its arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionWidth {
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "full")]
    Full,
    #[serde(rename = "1/2")]
    Half,
    #[serde(rename = "1/3")]
    Third,
    #[serde(rename = "2/3")]
    TwoThirds,
}

/// Cross-axis alignment of a section's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionAlign {
    Left,
    Right,
    Center,
}

/// Platform/viewport predicate. A missing field leaves that axis unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<Platform>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width_px: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width_px: Option<u32>,
}

/// Attributes shared by every section variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionBase {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<SectionWidth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<SectionAlign>,
    /// Render-sort key. Missing is treated as `0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<SpacingToken>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<SpacingToken>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<VisibilityConfig>,
}

impl SectionBase {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn sort_key(&self) -> i32 {
        self.order.unwrap_or(0)
    }
}

/// Body of a `text` or `hero` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextSection {
    #[serde(flatten)]
    pub base: SectionBase,
    #[serde(default)]
    pub blocks: Vec<TextBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctas: Option<Vec<CtaConfig>>,
}

/// Body of an `image` section. A missing `src` renders a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageSection {
    #[serde(flatten)]
    pub base: SectionBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Section discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Text,
    Hero,
    Image,
}

impl SectionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Hero => "hero",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A section, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Section {
    Text(TextSection),
    Hero(TextSection),
    Image(ImageSection),
}

impl Section {
    /// A `text` section with the given blocks.
    pub fn text(id: impl Into<String>, blocks: Vec<TextBlock>) -> Self {
        Self::Text(TextSection {
            base: SectionBase::new(id),
            blocks,
            ctas: None,
        })
    }

    /// A `hero` section with the given blocks.
    pub fn hero(id: impl Into<String>, blocks: Vec<TextBlock>) -> Self {
        Self::Hero(TextSection {
            base: SectionBase::new(id),
            blocks,
            ctas: None,
        })
    }

    /// An `image` section; `src: None` renders the placeholder.
    pub fn image(id: impl Into<String>, src: Option<String>) -> Self {
        Self::Image(ImageSection {
            base: SectionBase::new(id),
            src,
            alt: None,
        })
    }

    pub fn section_type(&self) -> SectionType {
        match self {
            Self::Text(_) => SectionType::Text,
            Self::Hero(_) => SectionType::Hero,
            Self::Image(_) => SectionType::Image,
        }
    }

    pub fn base(&self) -> &SectionBase {
        match self {
            Self::Text(s) | Self::Hero(s) => &s.base,
            Self::Image(s) => &s.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut SectionBase {
        match self {
            Self::Text(s) | Self::Hero(s) => &mut s.base,
            Self::Image(s) => &mut s.base,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    /// Set the render-sort key (builder).
    pub fn with_order(mut self, order: i32) -> Self {
        self.base_mut().order = Some(order);
        self
    }

    /// Set the visibility predicate (builder).
    pub fn with_visibility(mut self, visibility: VisibilityConfig) -> Self {
        self.base_mut().visibility = Some(visibility);
        self
    }

    /// Attach CTAs to a text or hero section (builder). Ignored for images.
    pub fn with_ctas(mut self, ctas: Vec<CtaConfig>) -> Self {
        if let Self::Text(s) | Self::Hero(s) = &mut self {
            s.ctas = Some(ctas);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_hero_with_flattened_base() {
        let section: Section = serde_json::from_value(json!({
            "id": "hero_left",
            "type": "hero",
            "width": "1/2",
            "align": "left",
            "padding": "md",
            "margin": "none",
            "blocks": [{"id":"h","variant":"heading1","text":"Hello"}],
            "ctas": []
        }))
        .unwrap();
        assert_eq!(section.section_type(), SectionType::Hero);
        assert_eq!(section.base().width, Some(SectionWidth::Half));
        assert_eq!(section.base().padding, Some(SpacingToken::Md));
        assert_eq!(section.base().sort_key(), 0);
        let Section::Hero(body) = section else { panic!("expected hero") };
        assert_eq!(body.blocks.len(), 1);
        assert_eq!(body.ctas, Some(Vec::new()));
    }

    #[test]
    fn image_without_src_is_valid() {
        let section: Section =
            serde_json::from_value(json!({"id":"img","type":"image","order":-2})).unwrap();
        let Section::Image(img) = &section else { panic!("expected image") };
        assert!(img.src.is_none());
        assert_eq!(section.base().sort_key(), -2);
    }

    #[test]
    fn visibility_camel_case() {
        let v: VisibilityConfig =
            serde_json::from_value(json!({"platforms":["ios","android"],"minWidthPx":768}))
                .unwrap();
        assert_eq!(v.platforms, Some(vec![Platform::Ios, Platform::Android]));
        assert_eq!(v.min_width_px, Some(768));
        assert_eq!(v.max_width_px, None);
    }

    #[test]
    fn unknown_section_type_fails() {
        let res = serde_json::from_value::<Section>(json!({"id":"v","type":"video"}));
        assert!(res.is_err());
    }

    #[test]
    fn fields_of_other_section_types_are_rejected() {
        let image_with_blocks = json!({"id":"img","type":"image","blocks":[]});
        assert!(serde_json::from_value::<Section>(image_with_blocks).is_err());
        let text_with_src = json!({"id":"t","type":"text","src":"https://x.io/a.png"});
        assert!(serde_json::from_value::<Section>(text_with_src).is_err());
    }

    #[test]
    fn width_wire_strings() {
        let w: SectionWidth = serde_json::from_str("\"2/3\"").unwrap();
        assert_eq!(w, SectionWidth::TwoThirds);
        assert_eq!(serde_json::to_string(&SectionWidth::Third).unwrap(), "\"1/3\"");
    }

    #[test]
    fn with_ctas_ignored_for_images() {
        let s = Section::image("img", None).with_ctas(Vec::new());
        assert!(matches!(s, Section::Image(_)));
    }
}

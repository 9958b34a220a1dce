//! Closed design-token enums.
//!
//! Every token carries its wire string (`as_str`) and an `ALL` table listing
//! each member in declaration order. The wire strings are part of the
//! document contract and must match the serde renames exactly.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Spacing scale used for padding, margin, and text block spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingToken {
    None,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl SpacingToken {
    pub const ALL: [SpacingToken; 7] = [
        Self::None,
        Self::Xs,
        Self::Sm,
        Self::Md,
        Self::Lg,
        Self::Xl,
        Self::Xxl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }
}

/// Outer page color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
    Brand,
    Neutral,
    Success,
    Warning,
    Error,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 7] = [
        Self::Light,
        Self::Dark,
        Self::Brand,
        Self::Neutral,
        Self::Success,
        Self::Warning,
        Self::Error,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Brand => "brand",
            Self::Neutral => "neutral",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Card surface background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundToken {
    #[default]
    Surface,
    SurfaceAlt,
    Muted,
    Brand,
    Transparent,
    Gradient,
    Inset,
}

impl BackgroundToken {
    pub const ALL: [BackgroundToken; 7] = [
        Self::Surface,
        Self::SurfaceAlt,
        Self::Muted,
        Self::Brand,
        Self::Transparent,
        Self::Gradient,
        Self::Inset,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Surface => "surface",
            Self::SurfaceAlt => "surface-alt",
            Self::Muted => "muted",
            Self::Brand => "brand",
            Self::Transparent => "transparent",
            Self::Gradient => "gradient",
            Self::Inset => "inset",
        }
    }
}

/// Accent color used by the identity strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentToken {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
    Info,
    Brand,
    Neutral,
}

impl AccentToken {
    pub const ALL: [AccentToken; 8] = [
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Warning,
        Self::Danger,
        Self::Info,
        Self::Brand,
        Self::Neutral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
            Self::Brand => "brand",
            Self::Neutral => "neutral",
        }
    }
}

/// Typographic preset of a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextVariant {
    Display,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Subtitle1,
    Subtitle2,
    Body1,
    Body2,
    Caption,
    Eyebrow,
    Code,
}

impl TextVariant {
    pub const ALL: [TextVariant; 12] = [
        Self::Display,
        Self::Heading1,
        Self::Heading2,
        Self::Heading3,
        Self::Heading4,
        Self::Subtitle1,
        Self::Subtitle2,
        Self::Body1,
        Self::Body2,
        Self::Caption,
        Self::Eyebrow,
        Self::Code,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Heading1 => "heading1",
            Self::Heading2 => "heading2",
            Self::Heading3 => "heading3",
            Self::Heading4 => "heading4",
            Self::Subtitle1 => "subtitle1",
            Self::Subtitle2 => "subtitle2",
            Self::Body1 => "body1",
            Self::Body2 => "body2",
            Self::Caption => "caption",
            Self::Eyebrow => "eyebrow",
            Self::Code => "code",
        }
    }
}

/// Semantic text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColorToken {
    Default,
    Muted,
    Danger,
    Warning,
    Success,
    Primary,
}

impl TextColorToken {
    pub const ALL: [TextColorToken; 6] = [
        Self::Default,
        Self::Muted,
        Self::Danger,
        Self::Warning,
        Self::Success,
        Self::Primary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Muted => "muted",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Primary => "primary",
        }
    }
}

/// Named arrangement algorithm for a screen's sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutType {
    #[default]
    Stacked,
    CenteredCard,
    SplitLeftTextRightMedia,
    SplitRightTextLeftMedia,
    BannerTop,
    BannerBottom,
    SidePanel,
    Modal,
}

impl LayoutType {
    pub const ALL: [LayoutType; 8] = [
        Self::Stacked,
        Self::CenteredCard,
        Self::SplitLeftTextRightMedia,
        Self::SplitRightTextLeftMedia,
        Self::BannerTop,
        Self::BannerBottom,
        Self::SidePanel,
        Self::Modal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stacked => "stacked",
            Self::CenteredCard => "centered-card",
            Self::SplitLeftTextRightMedia => "split-left-text-right-media",
            Self::SplitRightTextLeftMedia => "split-right-text-left-media",
            Self::BannerTop => "banner-top",
            Self::BannerBottom => "banner-bottom",
            Self::SidePanel => "side-panel",
            Self::Modal => "modal",
        }
    }
}

impl fmt::Display for LayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The serde rename and `as_str` must agree for every member.
    fn assert_wire_names<T>(all: &[T], as_str: impl Fn(&T) -> &'static str)
    where
        T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug,
    {
        for token in all {
            let json = serde_json::to_string(token).unwrap();
            assert_eq!(json, format!("\"{}\"", as_str(token)));
            let back: T = serde_json::from_str(&json).unwrap();
            assert_eq!(&back, token);
        }
    }

    #[test]
    fn wire_names_match_as_str() {
        assert_wire_names(&SpacingToken::ALL, |t| t.as_str());
        assert_wire_names(&ColorScheme::ALL, |t| t.as_str());
        assert_wire_names(&BackgroundToken::ALL, |t| t.as_str());
        assert_wire_names(&AccentToken::ALL, |t| t.as_str());
        assert_wire_names(&TextVariant::ALL, |t| t.as_str());
        assert_wire_names(&TextColorToken::ALL, |t| t.as_str());
        assert_wire_names(&LayoutType::ALL, |t| t.as_str());
    }

    #[test]
    fn layout_wire_strings() {
        let l: LayoutType = serde_json::from_str("\"split-left-text-right-media\"").unwrap();
        assert_eq!(l, LayoutType::SplitLeftTextRightMedia);
        assert_eq!(LayoutType::Modal.to_string(), "modal");
    }

    #[test]
    fn unknown_token_is_rejected() {
        assert!(serde_json::from_str::<SpacingToken>("\"3xl\"").is_err());
        assert!(serde_json::from_str::<LayoutType>("\"grid\"").is_err());
    }

    #[test]
    fn theme_defaults() {
        assert_eq!(ColorScheme::default(), ColorScheme::Light);
        assert_eq!(BackgroundToken::default(), BackgroundToken::Surface);
        assert_eq!(AccentToken::default(), AccentToken::Primary);
    }
}

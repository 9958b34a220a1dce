//! Token resolution: total mapping tables from semantic tokens to concrete values.
//!
//! Every table is an exhaustive `match`, so adding a token member without a
//! mapping is a compile error. Raw strings from outside the type system go
//! through [`parse_token`], which reports out-of-domain values as
//! [`ConfigError`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ConfigError;
use crate::schema::{
    AccentToken, BackgroundToken, ColorScheme, ScreenTheme, SpacingToken, TextAlignment,
    TextColorToken, TextStyle, TextTransform, TextVariant, TextWeight,
};

use super::color::{LinearGradient, Paint, Rgba};
use super::scalar::{Scalar, ScalarBox};
use super::styles::{FontFamily, Styles, TextAlign};

/// Typographic preset of a [`TextVariant`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    pub size: u16,
    pub weight: u16,
    pub family: FontFamily,
    pub letter_spacing: f32,
    pub transform: TextTransform,
}

impl Typography {
    const fn sans(size: u16, weight: u16) -> Self {
        Self {
            size,
            weight,
            family: FontFamily::Sans,
            letter_spacing: 0.0,
            transform: TextTransform::None,
        }
    }

    /// The preset as a base style layer.
    pub fn to_styles(&self) -> Styles {
        Styles {
            font_size: Some(self.size),
            font_weight: Some(self.weight),
            font_family: Some(self.family),
            letter_spacing: Some(self.letter_spacing),
            text_transform: Some(self.transform),
            ..Styles::default()
        }
    }
}

/// Theme tokens with defaults applied, plus their concrete values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTheme {
    pub color_scheme: ColorScheme,
    pub background: BackgroundToken,
    pub accent: AccentToken,
    pub page_background: Paint,
    pub card_background: Paint,
    pub accent_color: Rgba,
}

impl Default for ResolvedTheme {
    fn default() -> Self {
        TokenResolver::resolve_theme(None)
    }
}

/// Pure token tables.
pub struct TokenResolver;

impl TokenResolver {
    pub fn spacing(token: SpacingToken) -> u16 {
        match token {
            SpacingToken::None => 0,
            SpacingToken::Xs => 4,
            SpacingToken::Sm => 8,
            SpacingToken::Md => 16,
            SpacingToken::Lg => 24,
            SpacingToken::Xl => 32,
            SpacingToken::Xxl => 48,
        }
    }

    /// Page background behind the card.
    pub fn color_scheme(scheme: ColorScheme) -> Rgba {
        match scheme {
            ColorScheme::Light => Rgba::hex(0xF9FAFB),
            ColorScheme::Dark => Rgba::hex(0x020617),
            ColorScheme::Brand => Rgba::hex(0xF5F3FF),
            ColorScheme::Neutral => Rgba::hex(0xF3F4F6),
            ColorScheme::Success => Rgba::hex(0xECFDF3),
            ColorScheme::Warning => Rgba::hex(0xFFFBEB),
            ColorScheme::Error => Rgba::hex(0xFEF2F2),
        }
    }

    /// Card surface fill.
    pub fn background(token: BackgroundToken) -> Paint {
        match token {
            BackgroundToken::Surface => Paint::Solid(Rgba::WHITE),
            BackgroundToken::SurfaceAlt => Paint::Solid(Rgba::hex(0xF3F4F6)),
            BackgroundToken::Muted => Paint::Solid(Rgba::hex(0xE5E7EB)),
            BackgroundToken::Brand => Paint::Solid(Rgba::hex(0xEEF2FF)),
            BackgroundToken::Transparent => Paint::Solid(Rgba::TRANSPARENT),
            BackgroundToken::Gradient => Paint::Gradient(LinearGradient {
                angle_deg: 135.0,
                from: Rgba::with_alpha(59, 130, 246, 0.1),
                to: Rgba::with_alpha(16, 185, 129, 0.1),
            }),
            BackgroundToken::Inset => Paint::Solid(Rgba::hex(0xF9FAFB)),
        }
    }

    pub fn accent(token: AccentToken) -> Rgba {
        match token {
            AccentToken::Primary => Rgba::hex(0x2563EB),
            AccentToken::Secondary => Rgba::hex(0x7C3AED),
            AccentToken::Success => Rgba::hex(0x16A34A),
            AccentToken::Warning => Rgba::hex(0xD97706),
            AccentToken::Danger => Rgba::hex(0xDC2626),
            AccentToken::Info => Rgba::hex(0x0EA5E9),
            AccentToken::Brand => Rgba::hex(0x4C1D95),
            AccentToken::Neutral => Rgba::hex(0x6B7280),
        }
    }

    pub fn text_color(token: TextColorToken) -> Rgba {
        match token {
            TextColorToken::Default => Rgba::hex(0x111827),
            TextColorToken::Muted => Rgba::hex(0x6B7280),
            TextColorToken::Danger => Rgba::hex(0xDC2626),
            TextColorToken::Warning => Rgba::hex(0xD97706),
            TextColorToken::Success => Rgba::hex(0x16A34A),
            TextColorToken::Primary => Rgba::hex(0x2563EB),
        }
    }

    pub fn typography(variant: TextVariant) -> Typography {
        match variant {
            TextVariant::Display => Typography::sans(32, 600),
            TextVariant::Heading1 => Typography::sans(28, 600),
            TextVariant::Heading2 => Typography::sans(24, 600),
            TextVariant::Heading3 => Typography::sans(20, 600),
            TextVariant::Heading4 => Typography::sans(18, 600),
            TextVariant::Subtitle1 => Typography::sans(16, 500),
            TextVariant::Subtitle2 => Typography::sans(14, 500),
            TextVariant::Body1 => Typography::sans(16, 400),
            TextVariant::Body2 => Typography::sans(14, 400),
            TextVariant::Caption => Typography::sans(12, 400),
            TextVariant::Eyebrow => Typography {
                letter_spacing: 1.5,
                transform: TextTransform::Uppercase,
                ..Typography::sans(11, 400)
            },
            TextVariant::Code => Typography {
                family: FontFamily::Monospace,
                ..Typography::sans(13, 400)
            },
        }
    }

    pub fn weight(weight: TextWeight) -> u16 {
        match weight {
            TextWeight::Regular => 400,
            TextWeight::Medium => 500,
            TextWeight::Semibold => 600,
            TextWeight::Bold => 700,
        }
    }

    pub fn text_align(align: TextAlignment) -> TextAlign {
        match align {
            TextAlignment::Left => TextAlign::Left,
            TextAlignment::Right => TextAlign::Right,
            TextAlignment::Center => TextAlign::Center,
            TextAlignment::Justify => TextAlign::Justify,
        }
    }

    /// Apply the theme defaults (`light` / `surface` / `primary`) and resolve values.
    pub fn resolve_theme(theme: Option<&ScreenTheme>) -> ResolvedTheme {
        let theme = theme.copied().unwrap_or_default();
        let color_scheme = theme.color_scheme.unwrap_or_default();
        let background = theme.background.unwrap_or_default();
        let accent = theme.accent.unwrap_or_default();
        ResolvedTheme {
            color_scheme,
            background,
            accent,
            page_background: Paint::Solid(Self::color_scheme(color_scheme)),
            card_background: Self::background(background),
            accent_color: Self::accent(accent),
        }
    }

    /// Style layers derived from a text block's inline style: token overrides
    /// (color, spacing) first, inline overrides (weight, align, transform,
    /// clamp) on top.
    pub fn text_overrides(style: &TextStyle) -> Styles {
        let tokens = Styles {
            color: style.color.map(Self::text_color),
            margin: Self::block_spacing(style),
            ..Styles::default()
        };
        let inline = Styles {
            font_weight: style.weight.map(Self::weight),
            text_align: style.align.map(Self::text_align),
            text_transform: style.transform,
            line_clamp: style
                .max_lines
                .filter(|n| *n > 0)
                .map(|n| u16::try_from(n).unwrap_or(u16::MAX)),
            ..Styles::default()
        };
        tokens.merge(&inline)
    }

    fn block_spacing(style: &TextStyle) -> Option<ScalarBox> {
        if style.spacing_top.is_none() && style.spacing_bottom.is_none() {
            return None;
        }
        let px = |t: Option<SpacingToken>| Scalar::from(t.map(Self::spacing).unwrap_or(0));
        Some(ScalarBox::new(
            px(style.spacing_top),
            Scalar::ZERO,
            px(style.spacing_bottom),
            Scalar::ZERO,
        ))
    }
}

/// Decode a raw token string (e.g. `"2xl"`) into its enum.
pub fn parse_token<T: DeserializeOwned>(field: &str, raw: &str) -> Result<T, ConfigError> {
    serde_json::from_value(Value::String(raw.to_owned())).map_err(|_| ConfigError::InvalidValue {
        field: field.to_owned(),
        message: format!("unknown token {raw:?}"),
    })
}

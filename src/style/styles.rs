//! Styles struct with typed `Option<T>` fields for every visual property.
//!
//! This is the central style representation of a render node. `None` means
//! "not set"; layering is done with [`Styles::merge`] / [`resolve_style`].

use crate::schema::TextTransform;

use super::color::{Border, Paint, Rgba, Shadow};
use super::scalar::{Scalar, ScalarBox};

/// Main axis of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// Main-axis distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Start,
    Center,
    End,
}

/// Cross-axis alignment of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignItems {
    Start,
    Center,
    End,
    Stretch,
}

/// Text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

/// Font family class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Sans,
    Monospace,
}

/// Text decoration line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDecoration {
    None,
    Underline,
}

/// All visual properties of a node. Each field is `Option<T>`; `None` means unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Styles {
    // Arrangement
    pub direction: Option<Axis>,
    pub reverse: Option<bool>,
    pub wrap: Option<bool>,
    pub gap: Option<u16>,
    pub justify: Option<Justify>,
    pub align_items: Option<AlignItems>,
    pub flex_grow: Option<f32>,

    // Sizing
    pub width: Option<Scalar>,
    pub height: Option<Scalar>,
    pub max_width: Option<Scalar>,
    pub min_height: Option<Scalar>,

    // Spacing
    pub margin: Option<ScalarBox>,
    pub padding: Option<ScalarBox>,

    // Paint
    pub color: Option<Rgba>,
    pub background: Option<Paint>,
    pub border: Option<Border>,
    pub radius: Option<u16>,
    pub shadow: Option<Shadow>,

    // Typography
    pub font_size: Option<u16>,
    pub font_weight: Option<u16>,
    pub font_family: Option<FontFamily>,
    pub letter_spacing: Option<f32>,
    pub text_transform: Option<TextTransform>,
    pub text_align: Option<TextAlign>,
    pub text_decoration: Option<TextDecoration>,
    pub line_clamp: Option<u16>,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `other` on top of `self`: every field set in `other` wins,
    /// every unset field keeps `self`'s value.
    pub fn merge(&self, other: &Styles) -> Styles {
        fn pick<T: Clone>(base: &Option<T>, other: &Option<T>) -> Option<T> {
            other.clone().or_else(|| base.clone())
        }

        Styles {
            direction: pick(&self.direction, &other.direction),
            reverse: pick(&self.reverse, &other.reverse),
            wrap: pick(&self.wrap, &other.wrap),
            gap: pick(&self.gap, &other.gap),
            justify: pick(&self.justify, &other.justify),
            align_items: pick(&self.align_items, &other.align_items),
            flex_grow: pick(&self.flex_grow, &other.flex_grow),

            width: pick(&self.width, &other.width),
            height: pick(&self.height, &other.height),
            max_width: pick(&self.max_width, &other.max_width),
            min_height: pick(&self.min_height, &other.min_height),

            margin: pick(&self.margin, &other.margin),
            padding: pick(&self.padding, &other.padding),

            color: pick(&self.color, &other.color),
            background: pick(&self.background, &other.background),
            border: pick(&self.border, &other.border),
            radius: pick(&self.radius, &other.radius),
            shadow: pick(&self.shadow, &other.shadow),

            font_size: pick(&self.font_size, &other.font_size),
            font_weight: pick(&self.font_weight, &other.font_weight),
            font_family: pick(&self.font_family, &other.font_family),
            letter_spacing: pick(&self.letter_spacing, &other.letter_spacing),
            text_transform: pick(&self.text_transform, &other.text_transform),
            text_align: pick(&self.text_align, &other.text_align),
            text_decoration: pick(&self.text_decoration, &other.text_decoration),
            line_clamp: pick(&self.line_clamp, &other.line_clamp),
        }
    }

    /// Returns `true` if no property is set.
    pub fn is_empty(&self) -> bool {
        *self == Styles::default()
    }

    /// Vertical flex container with the given gap.
    pub fn column(gap: u16) -> Self {
        Styles {
            direction: Some(Axis::Vertical),
            gap: Some(gap),
            ..Styles::default()
        }
    }

    /// Horizontal flex container with the given gap.
    pub fn row(gap: u16) -> Self {
        Styles {
            direction: Some(Axis::Horizontal),
            gap: Some(gap),
            ..Styles::default()
        }
    }
}

/// Layer `overrides` on top of `preset`.
///
/// Override order for a text block is: the variant preset, then token-derived
/// overrides (color, spacing), then inline overrides (weight, align,
/// transform, clamp). Callers fold those layers into `overrides` in that
/// order; the later layer always wins.
pub fn resolve_style(preset: &Styles, overrides: &Styles) -> Styles {
    preset.merge(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_is_empty() {
        assert!(Styles::new().is_empty());
        assert!(!Styles::column(8).is_empty());
    }

    #[test]
    fn merge_other_wins_when_set() {
        let base = Styles {
            font_size: Some(16),
            font_weight: Some(400),
            color: Some(Rgba::hex(0x111827)),
            ..Styles::default()
        };
        let over = Styles {
            font_weight: Some(700),
            ..Styles::default()
        };
        let merged = base.merge(&over);
        assert_eq!(merged.font_size, Some(16));
        assert_eq!(merged.font_weight, Some(700));
        assert_eq!(merged.color, Some(Rgba::hex(0x111827)));
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let s = Styles {
            padding: Some(ScalarBox::all(Scalar::px(16.0))),
            line_clamp: Some(2),
            ..Styles::row(8)
        };
        assert_eq!(s.merge(&Styles::new()), s);
        assert_eq!(Styles::new().merge(&s), s);
    }

    #[test]
    fn resolve_style_layers_in_order() {
        let preset = Styles {
            font_size: Some(11),
            text_transform: Some(TextTransform::Uppercase),
            letter_spacing: Some(1.5),
            ..Styles::default()
        };
        let tokens = Styles {
            color: Some(Rgba::hex(0x6B7280)),
            ..Styles::default()
        };
        let inline = Styles {
            text_transform: Some(TextTransform::None),
            ..Styles::default()
        };
        let resolved = resolve_style(&preset, &tokens.merge(&inline));
        assert_eq!(resolved.text_transform, Some(TextTransform::None));
        assert_eq!(resolved.color, Some(Rgba::hex(0x6B7280)));
        assert_eq!(resolved.letter_spacing, Some(1.5));
        assert_eq!(resolved.font_size, Some(11));
    }

    #[test]
    fn container_helpers() {
        let c = Styles::column(16);
        assert_eq!(c.direction, Some(Axis::Vertical));
        assert_eq!(c.gap, Some(16));
        let r = Styles::row(8);
        assert_eq!(r.direction, Some(Axis::Horizontal));
    }
}

//! CTA visual tables: base shape, size padding, priority colors, link coloring.

use serde::{Deserialize, Serialize};

use crate::schema::{CtaConfig, CtaKind, CtaPriority, CtaSize};

use super::color::{Border, Paint, Rgba};
use super::scalar::{Scalar, ScalarBox};
use super::styles::{AlignItems, Justify, Styles, TextDecoration};

/// How a `link`-kind CTA picks its text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LinkColorPolicy {
    /// The same color for every priority.
    Fixed { color: Rgba },
    /// The priority's own text color.
    FollowPriority,
    /// The screen theme's accent color.
    Accent,
}

impl LinkColorPolicy {
    /// Text color of a link with the given priority under `accent`.
    pub fn resolve(self, priority: CtaPriority, accent: Rgba) -> Rgba {
        match self {
            LinkColorPolicy::Fixed { color } => color,
            LinkColorPolicy::FollowPriority => priority_colors(priority).text,
            LinkColorPolicy::Accent => accent,
        }
    }
}

impl Default for LinkColorPolicy {
    fn default() -> Self {
        LinkColorPolicy::Fixed {
            color: Rgba::hex(0x2563EB),
        }
    }
}

/// Background, text, and border colors of a priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityColors {
    pub background: Rgba,
    pub text: Rgba,
    pub border: Rgba,
}

pub fn priority_colors(priority: CtaPriority) -> PriorityColors {
    let colors = |background, text, border| PriorityColors {
        background,
        text,
        border,
    };
    let blue = Rgba::hex(0x2563EB);
    let red = Rgba::hex(0xDC2626);
    let ink = Rgba::hex(0x111827);
    let gray = Rgba::hex(0xD1D5DB);
    match priority {
        CtaPriority::Primary => colors(blue, Rgba::WHITE, blue),
        CtaPriority::Secondary => colors(Rgba::WHITE, ink, gray),
        CtaPriority::Tertiary => colors(Rgba::TRANSPARENT, blue, Rgba::TRANSPARENT),
        CtaPriority::Danger => colors(red, Rgba::WHITE, red),
        CtaPriority::Ghost => colors(Rgba::TRANSPARENT, ink, gray),
    }
}

/// Vertical and horizontal padding of a size.
pub fn size_padding(size: CtaSize) -> (u16, u16) {
    match size {
        CtaSize::Sm => (4, 10),
        CtaSize::Md => (6, 14),
        CtaSize::Lg => (8, 18),
    }
}

fn base_styles() -> Styles {
    Styles {
        radius: Some(999),
        font_size: Some(14),
        border: Some(Border::solid(1, Rgba::TRANSPARENT)),
        justify: Some(Justify::Center),
        align_items: Some(AlignItems::Center),
        ..Styles::row(6)
    }
}

/// Full style of a CTA: base, then size, then priority (or link) layers.
pub fn cta_styles(cta: &CtaConfig, link_color: LinkColorPolicy, accent: Rgba) -> Styles {
    let (v, h) = size_padding(cta.effective_size());
    let size = Styles {
        padding: Some(ScalarBox::symmetric(Scalar::from(v), Scalar::from(h))),
        ..Styles::default()
    };
    let colors = priority_colors(cta.priority);
    let priority = Styles {
        background: Some(Paint::Solid(colors.background)),
        color: Some(colors.text),
        border: Some(Border::solid(1, colors.border)),
        ..Styles::default()
    };
    let styled = base_styles().merge(&size).merge(&priority);

    match cta.kind {
        CtaKind::Button | CtaKind::IconButton => styled,
        CtaKind::Link => styled.merge(&Styles {
            background: Some(Paint::Solid(Rgba::TRANSPARENT)),
            border: Some(Border::NONE),
            color: Some(link_color.resolve(cta.priority, accent)),
            text_decoration: Some(TextDecoration::Underline),
            ..Styles::default()
        }),
    }
}

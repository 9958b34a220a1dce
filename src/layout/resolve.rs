//! Styles -> taffy Style conversion.
//!
//! Maps the render tree's [`Styles`] (lengths as [`Scalar`]/[`ScalarBox`]) to
//! taffy's layout types ([`taffy::Style`], [`LengthPercentageAuto`], etc.).

use taffy::geometry::{Rect, Size};
use taffy::prelude::{FromLength, FromPercent, TaffyAuto, TaffyZero};
use taffy::style::{
    AlignItems as TaffyAlignItems, Dimension, Display, FlexDirection, FlexWrap, JustifyContent,
    LengthPercentage, LengthPercentageAuto,
};

use crate::style::{AlignItems, Axis, BorderKind, BorderSides, Justify, Scalar, ScalarBox, Styles, Unit};

/// A scalar with viewport units already folded into pixels.
enum Length {
    Px(f32),
    Fraction(f32),
    Auto,
}

fn to_length(scalar: &Scalar, viewport: Size<f32>) -> Length {
    match scalar.unit {
        Unit::Px => Length::Px(scalar.value),
        Unit::Percent => Length::Fraction(scalar.value / 100.0),
        Unit::Vw => Length::Px(scalar.value * viewport.width / 100.0),
        Unit::Vh => Length::Px(scalar.value * viewport.height / 100.0),
        Unit::Auto => Length::Auto,
    }
}

/// Margin-style length; `vw`/`vh` resolve against `viewport`.
pub fn resolve_scalar(scalar: &Scalar, viewport: Size<f32>) -> LengthPercentageAuto {
    match to_length(scalar, viewport) {
        Length::Px(px) => LengthPercentageAuto::from_length(px),
        Length::Fraction(f) => LengthPercentageAuto::from_percent(f),
        Length::Auto => LengthPercentageAuto::AUTO,
    }
}

/// Padding-style length, where `auto` means zero.
pub fn resolve_scalar_definite(scalar: &Scalar, viewport: Size<f32>) -> LengthPercentage {
    match to_length(scalar, viewport) {
        Length::Px(px) => LengthPercentage::from_length(px),
        Length::Fraction(f) => LengthPercentage::from_percent(f),
        Length::Auto => LengthPercentage::ZERO,
    }
}

fn resolve_dimension(scalar: &Scalar, viewport: Size<f32>) -> Dimension {
    match to_length(scalar, viewport) {
        Length::Px(px) => Dimension::from_length(px),
        Length::Fraction(f) => Dimension::from_percent(f),
        Length::Auto => Dimension::AUTO,
    }
}

pub fn resolve_scalar_box(sides: &ScalarBox, viewport: Size<f32>) -> Rect<LengthPercentageAuto> {
    let side = |s: &Scalar| resolve_scalar(s, viewport);
    Rect {
        top: side(&sides.top),
        right: side(&sides.right),
        bottom: side(&sides.bottom),
        left: side(&sides.left),
    }
}

fn resolve_padding(sides: &ScalarBox, viewport: Size<f32>) -> Rect<LengthPercentage> {
    let side = |s: &Scalar| resolve_scalar_definite(s, viewport);
    Rect {
        top: side(&sides.top),
        right: side(&sides.right),
        bottom: side(&sides.bottom),
        left: side(&sides.left),
    }
}

fn resolve_justify(justify: Justify) -> JustifyContent {
    match justify {
        Justify::Start => JustifyContent::FlexStart,
        Justify::Center => JustifyContent::Center,
        Justify::End => JustifyContent::FlexEnd,
    }
}

fn resolve_align(align: AlignItems) -> TaffyAlignItems {
    match align {
        AlignItems::Start => TaffyAlignItems::FlexStart,
        AlignItems::Center => TaffyAlignItems::Center,
        AlignItems::End => TaffyAlignItems::FlexEnd,
        AlignItems::Stretch => TaffyAlignItems::Stretch,
    }
}

/// Convert a full [`Styles`] into a [`taffy::Style`].
///
/// `viewport` is `(width, height)` in pixels, used for `vw`/`vh`.
///
/// Every node is a flex container; `direction` defaults to column so
/// unstyled wrappers stack their children.
pub fn resolve_styles(styles: &Styles, viewport: (f32, f32)) -> taffy::Style {
    let viewport = Size {
        width: viewport.0,
        height: viewport.1,
    };

    let mut style = taffy::Style {
        display: Display::Flex,
        ..taffy::Style::default()
    };

    let reverse = styles.reverse.unwrap_or(false);
    style.flex_direction = match (styles.direction.unwrap_or(Axis::Vertical), reverse) {
        (Axis::Vertical, false) => FlexDirection::Column,
        (Axis::Vertical, true) => FlexDirection::ColumnReverse,
        (Axis::Horizontal, false) => FlexDirection::Row,
        (Axis::Horizontal, true) => FlexDirection::RowReverse,
    };
    if styles.wrap == Some(true) {
        style.flex_wrap = FlexWrap::Wrap;
    }
    if let Some(gap) = styles.gap {
        let gap = LengthPercentage::from_length(f32::from(gap));
        style.gap = Size {
            width: gap,
            height: gap,
        };
    }
    style.justify_content = styles.justify.map(resolve_justify);
    style.align_items = styles.align_items.map(resolve_align);
    if let Some(grow) = styles.flex_grow {
        style.flex_grow = grow;
        style.flex_basis = Dimension::from_length(0.0);
    }

    let dimension = |s: &Option<Scalar>| s.as_ref().map(|s| resolve_dimension(s, viewport));
    if let Some(width) = dimension(&styles.width) {
        style.size.width = width;
    }
    if let Some(height) = dimension(&styles.height) {
        style.size.height = height;
    }
    if let Some(max_width) = dimension(&styles.max_width) {
        style.max_size.width = max_width;
    }
    if let Some(min_height) = dimension(&styles.min_height) {
        style.min_size.height = min_height;
    }

    if let Some(margin) = &styles.margin {
        style.margin = resolve_scalar_box(margin, viewport);
    }
    if let Some(padding) = &styles.padding {
        style.padding = resolve_padding(padding, viewport);
    }

    if let Some(border) = &styles.border {
        if border.kind != BorderKind::None && border.width > 0 {
            let w = LengthPercentage::from_length(f32::from(border.width));
            style.border = match border.sides {
                BorderSides::All => Rect {
                    top: w,
                    right: w,
                    bottom: w,
                    left: w,
                },
                BorderSides::Left => Rect {
                    top: LengthPercentage::ZERO,
                    right: LengthPercentage::ZERO,
                    bottom: LengthPercentage::ZERO,
                    left: w,
                },
            };
        }
    }

    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Border, Rgba};

    const VIEWPORT: Size<f32> = Size {
        width: 1200.0,
        height: 800.0,
    };

    const VP: (f32, f32) = (1200.0, 800.0);

    #[test]
    fn resolve_px_and_percent() {
        assert_eq!(
            resolve_scalar(&Scalar::px(16.0), VIEWPORT),
            LengthPercentageAuto::from_length(16.0)
        );
        assert_eq!(
            resolve_scalar(&Scalar::percent(50.0), VIEWPORT),
            LengthPercentageAuto::from_percent(0.5)
        );
    }

    #[test]
    fn resolve_viewport_units() {
        assert_eq!(
            resolve_scalar(&Scalar::vw(50.0), VIEWPORT),
            LengthPercentageAuto::from_length(600.0)
        );
        assert_eq!(
            resolve_scalar(&Scalar::vh(80.0), VIEWPORT),
            LengthPercentageAuto::from_length(640.0)
        );
    }

    #[test]
    fn resolve_auto() {
        assert_eq!(
            resolve_scalar(&Scalar::auto(), VIEWPORT),
            LengthPercentageAuto::AUTO
        );
        assert_eq!(
            resolve_scalar_definite(&Scalar::auto(), VIEWPORT),
            LengthPercentage::ZERO
        );
    }

    #[test]
    fn default_styles_are_column_flex() {
        let style = resolve_styles(&Styles::default(), VP);
        assert_eq!(style.display, Display::Flex);
        assert_eq!(style.flex_direction, FlexDirection::Column);
        assert_eq!(style.flex_wrap, FlexWrap::NoWrap);
        assert_eq!(style.justify_content, None);
    }

    #[test]
    fn reversed_row_with_wrap() {
        let styles = Styles {
            reverse: Some(true),
            wrap: Some(true),
            align_items: Some(AlignItems::Center),
            ..Styles::row(16)
        };
        let style = resolve_styles(&styles, VP);
        assert_eq!(style.flex_direction, FlexDirection::RowReverse);
        assert_eq!(style.flex_wrap, FlexWrap::Wrap);
        assert_eq!(style.align_items, Some(TaffyAlignItems::Center));
        assert_eq!(style.gap.width, LengthPercentage::from_length(16.0));
    }

    #[test]
    fn sizing_and_spacing() {
        let styles = Styles {
            max_width: Some(Scalar::px(900.0)),
            min_height: Some(Scalar::vh(100.0)),
            padding: Some(ScalarBox::all(Scalar::px(24.0))),
            margin: Some(ScalarBox::symmetric(Scalar::ZERO, Scalar::auto())),
            ..Styles::default()
        };
        let style = resolve_styles(&styles, VP);
        assert_eq!(style.max_size.width, Dimension::from_length(900.0));
        assert_eq!(style.min_size.height, Dimension::from_length(800.0));
        assert_eq!(style.padding.left, LengthPercentage::from_length(24.0));
        assert_eq!(style.margin.left, LengthPercentageAuto::AUTO);
        assert_eq!(style.margin.top, LengthPercentageAuto::from_length(0.0));
    }

    #[test]
    fn flex_grow_zeroes_basis() {
        let styles = Styles {
            flex_grow: Some(2.0),
            ..Styles::default()
        };
        let style = resolve_styles(&styles, VP);
        assert_eq!(style.flex_grow, 2.0);
        assert_eq!(style.flex_basis, Dimension::from_length(0.0));
    }

    #[test]
    fn left_border_only_on_left() {
        let styles = Styles {
            border: Some(Border::solid(3, Rgba::hex(0x2563EB)).left_only()),
            ..Styles::default()
        };
        let style = resolve_styles(&styles, VP);
        assert_eq!(style.border.left, LengthPercentage::from_length(3.0));
        assert_eq!(style.border.top, LengthPercentage::ZERO);
    }

    #[test]
    fn no_border_kind_adds_no_width() {
        let styles = Styles {
            border: Some(Border::NONE),
            ..Styles::default()
        };
        let style = resolve_styles(&styles, VP);
        assert_eq!(style.border.left, LengthPercentage::ZERO);
    }
}

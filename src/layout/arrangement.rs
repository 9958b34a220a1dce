//! Layout identifier to arrangement rule.

use crate::schema::LayoutType;
use crate::style::{AlignItems, Axis, Justify, Scalar, Styles};

use super::engine::LayoutEngine;

/// The five distinct ways sections can be arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrangementFamily {
    Stack,
    Split,
    Banner,
    SidePanel,
    Modal,
}

/// How the ordered sequence of rendered sections is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrangementRule {
    pub family: ArrangementFamily,
    pub axis: Axis,
    pub reversed: bool,
    pub wrap: bool,
    pub center_cross_axis: bool,
    /// Center the whole card on both axes of the viewport.
    pub center_in_viewport: bool,
}

impl ArrangementRule {
    const fn of(family: ArrangementFamily, axis: Axis) -> Self {
        Self {
            family,
            axis,
            reversed: false,
            wrap: false,
            center_cross_axis: false,
            center_in_viewport: false,
        }
    }

    /// Container styles for the sections wrapper under this rule.
    pub fn container_styles(&self, gap: u16) -> Styles {
        let base = match self.axis {
            Axis::Vertical => Styles::column(gap),
            Axis::Horizontal => Styles::row(gap),
        };
        Styles {
            reverse: self.reversed.then_some(true),
            wrap: self.wrap.then_some(true),
            align_items: self.center_cross_axis.then_some(AlignItems::Center),
            width: Some(Scalar::percent(100.0)),
            ..base
        }
    }

    /// Styles for the wrapper between page and card; empty unless the
    /// card is centered in the viewport.
    pub fn viewport_styles(&self, min_height_vh: f32) -> Styles {
        if !self.center_in_viewport {
            return Styles::default();
        }
        Styles {
            justify: Some(Justify::Center),
            align_items: Some(AlignItems::Center),
            min_height: Some(Scalar::vh(min_height_vh)),
            ..Styles::column(0)
        }
    }
}

impl LayoutEngine {
    /// Arrangement rule for a layout identifier. Pure; never inspects content.
    pub fn arrange(layout: LayoutType) -> ArrangementRule {
        use ArrangementFamily::*;
        match layout {
            LayoutType::Stacked | LayoutType::CenteredCard => {
                ArrangementRule::of(Stack, Axis::Vertical)
            }
            LayoutType::SplitLeftTextRightMedia | LayoutType::SplitRightTextLeftMedia => {
                ArrangementRule {
                    wrap: true,
                    center_cross_axis: true,
                    reversed: layout == LayoutType::SplitRightTextLeftMedia,
                    ..ArrangementRule::of(Split, Axis::Horizontal)
                }
            }
            LayoutType::BannerTop | LayoutType::BannerBottom => ArrangementRule {
                center_cross_axis: true,
                ..ArrangementRule::of(Banner, Axis::Horizontal)
            },
            LayoutType::SidePanel => ArrangementRule::of(SidePanel, Axis::Horizontal),
            LayoutType::Modal => ArrangementRule {
                center_in_viewport: true,
                ..ArrangementRule::of(Modal, Axis::Vertical)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn stack_family_layouts_share_a_rule() {
        let stacked = LayoutEngine::arrange(LayoutType::Stacked);
        assert_eq!(stacked.family, ArrangementFamily::Stack);
        assert_eq!(stacked.axis, Axis::Vertical);
        assert_eq!(LayoutEngine::arrange(LayoutType::CenteredCard), stacked);
    }

    #[test]
    fn split_right_is_reversed_split_left() {
        let left = LayoutEngine::arrange(LayoutType::SplitLeftTextRightMedia);
        let right = LayoutEngine::arrange(LayoutType::SplitRightTextLeftMedia);
        assert!(!left.reversed);
        assert!(right.reversed);
        assert_eq!(ArrangementRule { reversed: false, ..right }, left);
        assert!(left.wrap && left.center_cross_axis);
    }

    #[test]
    fn banner_and_side_panel() {
        let banner = LayoutEngine::arrange(LayoutType::BannerTop);
        assert_eq!(LayoutEngine::arrange(LayoutType::BannerBottom), banner);
        assert_eq!(banner.axis, Axis::Horizontal);
        assert!(banner.center_cross_axis);
        assert!(!banner.wrap);

        let side = LayoutEngine::arrange(LayoutType::SidePanel);
        assert_eq!(side.axis, Axis::Horizontal);
        assert!(!side.center_cross_axis);
        assert!(!side.wrap);
    }

    #[test]
    fn modal_centers_in_viewport() {
        let modal = LayoutEngine::arrange(LayoutType::Modal);
        assert_eq!(modal.axis, Axis::Vertical);
        assert!(modal.center_in_viewport);
        let only_modal: Vec<_> = LayoutType::ALL
            .into_iter()
            .filter(|l| LayoutEngine::arrange(*l).center_in_viewport)
            .collect();
        assert_eq!(only_modal, vec![LayoutType::Modal]);
    }

    #[test]
    fn five_families_across_eight_layouts() {
        let distinct: HashSet<_> = LayoutType::ALL
            .into_iter()
            .map(|l| LayoutEngine::arrange(l).family)
            .collect();
        assert_eq!(distinct.len(), 5);
    }

    #[test]
    fn container_styles_follow_rule() {
        let s = LayoutEngine::arrange(LayoutType::SplitRightTextLeftMedia).container_styles(16);
        assert_eq!(s.direction, Some(Axis::Horizontal));
        assert_eq!(s.reverse, Some(true));
        assert_eq!(s.wrap, Some(true));
        assert_eq!(s.align_items, Some(AlignItems::Center));
        assert_eq!(s.gap, Some(16));

        let s = LayoutEngine::arrange(LayoutType::Stacked).container_styles(16);
        assert_eq!(s.direction, Some(Axis::Vertical));
        assert_eq!(s.reverse, None);
        assert_eq!(s.wrap, None);
    }

    #[test]
    fn viewport_styles_only_for_modal() {
        assert!(LayoutEngine::arrange(LayoutType::BannerTop)
            .viewport_styles(80.0)
            .is_empty());
        let s = LayoutEngine::arrange(LayoutType::Modal).viewport_styles(80.0);
        assert_eq!(s.justify, Some(Justify::Center));
        assert_eq!(s.min_height, Some(Scalar::vh(80.0)));
    }
}

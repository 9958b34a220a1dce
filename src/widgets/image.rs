//! Image slot: a real image when a source is set, a dashed placeholder otherwise.

use crate::dom::{NodeData, NodeKind};
use crate::style::{AlignItems, Border, Justify, Rgba, Scalar, Shadow, Styles};

use super::Widget;

const IMAGE_RADIUS: u16 = 16;
const PLACEHOLDER_LABEL: &str = "Image placeholder";

/// An image sized to its container with rounded corners and a soft shadow.
pub struct Image<'a> {
    section_id: &'a str,
    src: &'a str,
    alt: &'a str,
}

impl<'a> Image<'a> {
    pub fn new(section_id: &'a str, src: &'a str, alt: Option<&'a str>) -> Self {
        Self {
            section_id,
            src,
            alt: alt.unwrap_or_default(),
        }
    }
}

impl Widget for Image<'_> {
    fn widget_type(&self) -> &str {
        "Image"
    }

    fn node(&self) -> NodeData {
        NodeData::new(NodeKind::Image {
            src: self.src.to_owned(),
            alt: self.alt.to_owned(),
        })
        .with_key(self.section_id)
        .with_styles(Styles {
            max_width: Some(Scalar::percent(100.0)),
            radius: Some(IMAGE_RADIUS),
            shadow: Some(Shadow {
                offset_x: 0,
                offset_y: 8,
                blur: 24,
                color: Rgba::with_alpha(0, 0, 0, 0.08),
            }),
            ..Styles::default()
        })
    }
}

/// Fixed-height stand-in for an image section without a source.
pub struct ImagePlaceholder<'a> {
    section_id: &'a str,
    height_px: u16,
}

impl<'a> ImagePlaceholder<'a> {
    pub fn new(section_id: &'a str, height_px: u16) -> Self {
        Self {
            section_id,
            height_px,
        }
    }
}

impl Widget for ImagePlaceholder<'_> {
    fn widget_type(&self) -> &str {
        "ImagePlaceholder"
    }

    fn node(&self) -> NodeData {
        NodeData::new(NodeKind::ImagePlaceholder)
            .with_key(self.section_id)
            .with_text(PLACEHOLDER_LABEL)
            .with_styles(Styles {
                width: Some(Scalar::percent(100.0)),
                height: Some(Scalar::from(self.height_px)),
                radius: Some(IMAGE_RADIUS),
                border: Some(Border::dashed(1, Rgba::hex(0xD1D5DB))),
                justify: Some(Justify::Center),
                align_items: Some(AlignItems::Center),
                color: Some(Rgba::hex(0x9CA3AF)),
                ..Styles::default()
            })
    }
}

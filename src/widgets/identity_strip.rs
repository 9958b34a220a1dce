//! Identity strip: shows which screen and layout are being rendered.

use crate::dom::{NodeData, NodeKind};
use crate::schema::{LayoutType, TextTransform};
use crate::style::{Border, Rgba, Scalar, ScalarBox, Styles};

use super::Widget;

pub struct IdentityStrip<'a> {
    screen_id: &'a str,
    layout: LayoutType,
    accent: Rgba,
}

impl<'a> IdentityStrip<'a> {
    pub fn new(screen_id: &'a str, layout: LayoutType, accent: Rgba) -> Self {
        Self {
            screen_id,
            layout,
            accent,
        }
    }

    pub fn label(&self) -> String {
        format!("Screen: {} · Layout: {}", self.screen_id, self.layout)
    }
}

impl Widget for IdentityStrip<'_> {
    fn widget_type(&self) -> &str {
        "IdentityStrip"
    }

    fn node(&self) -> NodeData {
        NodeData::new(NodeKind::IdentityStrip)
            .with_text(self.label())
            .with_styles(Styles {
                border: Some(Border::solid(3, self.accent).left_only()),
                padding: Some(ScalarBox::left(Scalar::px(8.0))),
                margin: Some(ScalarBox::bottom(Scalar::px(8.0))),
                font_size: Some(11),
                letter_spacing: Some(1.4),
                text_transform: Some(TextTransform::Uppercase),
                color: Some(Rgba::hex(0x6B7280)),
                ..Styles::default()
            })
    }
}

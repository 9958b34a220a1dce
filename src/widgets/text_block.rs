//! A text block rendered with its variant preset and inline overrides.

use crate::dom::{NodeData, NodeKind};
use crate::schema::TextBlock;
use crate::style::{resolve_style, Styles, TokenResolver};

use super::Widget;

/// View over a borrowed [`TextBlock`].
pub struct TextBlockView<'a> {
    block: &'a TextBlock,
}

impl<'a> TextBlockView<'a> {
    pub fn new(block: &'a TextBlock) -> Self {
        Self { block }
    }

    /// The block's resolved style: preset, then token overrides, then inline
    /// overrides. Color is left unset unless the block names one, so text
    /// inherits from its container.
    pub fn styles(&self) -> Styles {
        let preset = TokenResolver::typography(self.block.variant).to_styles();
        match &self.block.style {
            Some(style) => resolve_style(&preset, &TokenResolver::text_overrides(style)),
            None => preset,
        }
    }
}

impl Widget for TextBlockView<'_> {
    fn widget_type(&self) -> &str {
        "TextBlock"
    }

    fn node(&self) -> NodeData {
        NodeData::new(NodeKind::Text(self.block.variant))
            .with_key(self.block.id.as_str())
            .with_text(self.block.text.as_str())
            .with_styles(self.styles())
    }
}

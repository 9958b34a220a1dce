//! Node builders: text block, image, placeholder, CTA, CTA row, identity strip.
//!
//! A widget turns one document entity into render nodes. Most produce a single
//! node via [`Widget::node`]; composite widgets (the CTA row) override
//! [`Widget::mount`] to attach children as well.

pub mod cta;
pub mod identity_strip;
pub mod image;
pub mod text_block;

pub use cta::{CtaButton, CtaRow, CtaRowPlacement};
pub use identity_strip::IdentityStrip;
pub use image::{Image, ImagePlaceholder};
pub use text_block::TextBlockView;

use crate::dom::{NodeData, NodeId, RenderTree};

/// Something that can be mounted into a [`RenderTree`].
pub trait Widget {
    /// Type name used in logs, e.g. `"Image"`.
    fn widget_type(&self) -> &str;

    /// The widget's own node.
    fn node(&self) -> NodeData;

    /// Attach this widget under `parent` and return its node id.
    fn mount(&self, tree: &mut RenderTree, parent: NodeId) -> NodeId {
        tree.insert_child(parent, self.node())
    }
}

//! CTA nodes and the wrapped row that holds them.

use crate::dom::{CtaBinding, NodeData, NodeId, NodeKind, RenderTree};
use crate::schema::CtaConfig;
use crate::style::{cta_styles, Justify, LinkColorPolicy, Rgba, Scalar, ScalarBox, Styles};

use super::Widget;

const ROW_GAP: u16 = 8;

/// A single button, link, or icon button bound to its action.
pub struct CtaButton<'a> {
    cta: &'a CtaConfig,
    link_color: LinkColorPolicy,
    accent: Rgba,
}

impl<'a> CtaButton<'a> {
    pub fn new(cta: &'a CtaConfig, link_color: LinkColorPolicy, accent: Rgba) -> Self {
        Self {
            cta,
            link_color,
            accent,
        }
    }
}

impl Widget for CtaButton<'_> {
    fn widget_type(&self) -> &str {
        self.cta.kind.as_str()
    }

    fn node(&self) -> NodeData {
        let binding = CtaBinding {
            kind: self.cta.kind,
            priority: self.cta.priority,
            size: self.cta.effective_size(),
            icon: self.cta.icon.clone(),
            action: self.cta.action.clone(),
        };
        NodeData::new(NodeKind::Cta(binding))
            .with_key(self.cta.id.as_str())
            .with_text(self.cta.label.as_str())
            .with_styles(cta_styles(self.cta, self.link_color, self.accent))
    }
}

/// Where a CTA row sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaRowPlacement {
    /// Under a section's text blocks.
    Section,
    /// The screen's closing action row.
    Global,
}

/// Horizontal, wrapping row of CTAs.
pub struct CtaRow<'a> {
    ctas: &'a [CtaConfig],
    placement: CtaRowPlacement,
    link_color: LinkColorPolicy,
    accent: Rgba,
}

impl<'a> CtaRow<'a> {
    pub fn new(ctas: &'a [CtaConfig], placement: CtaRowPlacement) -> Self {
        Self {
            ctas,
            placement,
            link_color: LinkColorPolicy::default(),
            accent: Rgba::hex(0x2563EB),
        }
    }

    /// Link coloring for the row's `link` CTAs (builder).
    pub fn with_link_color(mut self, link_color: LinkColorPolicy, accent: Rgba) -> Self {
        self.link_color = link_color;
        self.accent = accent;
        self
    }
}

impl Widget for CtaRow<'_> {
    fn widget_type(&self) -> &str {
        "CtaRow"
    }

    fn node(&self) -> NodeData {
        let styles = match self.placement {
            CtaRowPlacement::Section => Styles {
                wrap: Some(true),
                margin: Some(ScalarBox::top(Scalar::px(8.0))),
                ..Styles::row(ROW_GAP)
            },
            CtaRowPlacement::Global => Styles {
                wrap: Some(true),
                justify: Some(Justify::End),
                margin: Some(ScalarBox::top(Scalar::px(24.0))),
                ..Styles::row(ROW_GAP)
            },
        };
        NodeData::new(NodeKind::CtaRow).with_styles(styles)
    }

    fn mount(&self, tree: &mut RenderTree, parent: NodeId) -> NodeId {
        let row = tree.insert_child(parent, self.node());
        for cta in self.ctas {
            CtaButton::new(cta, self.link_color, self.accent).mount(tree, row);
        }
        row
    }
}

//! Node types: NodeId, NodeKind, NodeData.

use slotmap::new_key_type;

use crate::schema::{CtaAction, CtaKind, CtaPriority, CtaSize, SectionType, TextVariant};
use crate::style::Styles;

new_key_type! {
    /// Unique identifier for a render node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// A CTA as rendered: its visual identity plus the action it is bound to.
#[derive(Debug, Clone, PartialEq)]
pub struct CtaBinding {
    pub kind: CtaKind,
    pub priority: CtaPriority,
    pub size: CtaSize,
    pub icon: Option<String>,
    pub action: CtaAction,
}

/// What a render node is.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Page root carrying the color-scheme background.
    Screen,
    /// Wrapper that centers the card for modal layouts.
    Viewport,
    /// The themed card holding everything else.
    Card,
    /// "Screen: id · Layout: layout" label bar.
    IdentityStrip,
    /// Arrangement container for the rendered sections.
    Sections,
    Section(SectionType),
    Text(TextVariant),
    Image { src: String, alt: String },
    ImagePlaceholder,
    CtaRow,
    Cta(CtaBinding),
}

impl NodeKind {
    /// Short label used in outlines, e.g. `Section:hero` or `Cta:link`.
    pub fn label(&self) -> String {
        match self {
            NodeKind::Screen => "Screen".into(),
            NodeKind::Viewport => "Viewport".into(),
            NodeKind::Card => "Card".into(),
            NodeKind::IdentityStrip => "IdentityStrip".into(),
            NodeKind::Sections => "Sections".into(),
            NodeKind::Section(t) => format!("Section:{t}"),
            NodeKind::Text(v) => format!("Text:{}", v.as_str()),
            NodeKind::Image { .. } => "Image".into(),
            NodeKind::ImagePlaceholder => "ImagePlaceholder".into(),
            NodeKind::CtaRow => "CtaRow".into(),
            NodeKind::Cta(b) => format!("Cta:{}", b.kind.as_str()),
        }
    }
}

/// Data associated with a single render node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    pub kind: NodeKind,
    /// Document id of the entity this node renders (section, block, CTA).
    pub key: Option<String>,
    /// Literal text content.
    pub text: Option<String>,
    pub styles: Styles,
}

impl NodeData {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            key: None,
            text: None,
            styles: Styles::default(),
        }
    }

    /// Set the document key (builder).
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the text content (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the styles (builder).
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// The bound action, if this node is a CTA.
    pub fn action(&self) -> Option<&CtaAction> {
        match &self.kind {
            NodeKind::Cta(binding) => Some(&binding.action),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults() {
        let data = NodeData::new(NodeKind::Card);
        assert_eq!(data.kind, NodeKind::Card);
        assert!(data.key.is_none());
        assert!(data.text.is_none());
        assert!(data.styles.is_empty());
    }

    #[test]
    fn builders() {
        let data = NodeData::new(NodeKind::Text(TextVariant::Body1))
            .with_key("body")
            .with_text("Hello")
            .with_styles(Styles::column(4));
        assert_eq!(data.key.as_deref(), Some("body"));
        assert_eq!(data.text.as_deref(), Some("Hello"));
        assert_eq!(data.styles.gap, Some(4));
    }

    #[test]
    fn labels() {
        assert_eq!(NodeKind::Section(SectionType::Hero).label(), "Section:hero");
        assert_eq!(NodeKind::Text(TextVariant::Heading1).label(), "Text:heading1");
        let cta = NodeKind::Cta(CtaBinding {
            kind: CtaKind::IconButton,
            priority: CtaPriority::Ghost,
            size: CtaSize::Md,
            icon: Some("star".into()),
            action: CtaAction::Noop {},
        });
        assert_eq!(cta.label(), "Cta:icon-button");
    }

    #[test]
    fn only_ctas_carry_actions() {
        assert!(NodeData::new(NodeKind::CtaRow).action().is_none());
        let cta = NodeData::new(NodeKind::Cta(CtaBinding {
            kind: CtaKind::Button,
            priority: CtaPriority::Primary,
            size: CtaSize::Sm,
            icon: None,
            action: CtaAction::Phone {
                number: "+1".into(),
            },
        }));
        assert!(matches!(cta.action(), Some(CtaAction::Phone { .. })));
    }

    #[test]
    fn node_id_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<NodeId>();
    }
}

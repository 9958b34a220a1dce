//! Section rendering: one document section to one section subtree.

use crate::dom::{NodeData, NodeId, NodeKind, RenderTree};
use crate::error::Diagnostic;
use crate::schema::{
    ImageSection, Section, SectionAlign, SectionBase, SectionWidth, SpacingToken, TextSection,
};
use crate::style::{AlignItems, ResolvedTheme, Scalar, ScalarBox, Styles, TextAlign, TokenResolver};
use crate::widgets::{CtaRow, CtaRowPlacement, Image, ImagePlaceholder, TextBlockView, Widget};

use super::config::ComposerConfig;

const SECTION_GAP: u16 = 8;

/// Renders sections under a resolved theme.
///
/// Visibility is not checked here; the composer filters before delegating.
pub struct SectionRenderer<'a> {
    theme: &'a ResolvedTheme,
    config: &'a ComposerConfig,
}

impl<'a> SectionRenderer<'a> {
    pub fn new(theme: &'a ResolvedTheme, config: &'a ComposerConfig) -> Self {
        Self { theme, config }
    }

    /// Render `section` as the last child of `parent` and return its node.
    pub fn render(&self, section: &Section, tree: &mut RenderTree, parent: NodeId) -> NodeId {
        let container = NodeData::new(NodeKind::Section(section.section_type()))
            .with_key(section.id())
            .with_styles(container_styles(section.base()));
        let node = tree.insert_child(parent, container);

        match section {
            Section::Text(body) | Section::Hero(body) => self.render_text(body, tree, node),
            Section::Image(body) => self.render_image(body, tree, node),
        }
        node
    }

    fn render_text(&self, body: &TextSection, tree: &mut RenderTree, node: NodeId) {
        for block in &body.blocks {
            TextBlockView::new(block).mount(tree, node);
        }
        if let Some(ctas) = body.ctas.as_deref().filter(|c| !c.is_empty()) {
            CtaRow::new(ctas, CtaRowPlacement::Section)
                .with_link_color(self.config.link_color, self.theme.accent_color)
                .mount(tree, node);
        }
    }

    fn render_image(&self, body: &ImageSection, tree: &mut RenderTree, node: NodeId) {
        match body.src.as_deref() {
            Some(src) => {
                Image::new(&body.base.id, src, body.alt.as_deref()).mount(tree, node);
            }
            None => {
                ImagePlaceholder::new(&body.base.id, self.config.placeholder_height_px)
                    .mount(tree, node);
                tree.push_diagnostic(Diagnostic::MissingAsset {
                    section_id: body.base.id.clone(),
                });
            }
        }
    }
}

/// Container styles shared by every section type: width share, alignment,
/// spacing tokens, and a vertical stack of the section's content.
pub fn container_styles(base: &SectionBase) -> Styles {
    let sizing = match base.width {
        Some(SectionWidth::Half) | Some(SectionWidth::Third) => Styles {
            flex_grow: Some(1.0),
            ..Styles::default()
        },
        Some(SectionWidth::TwoThirds) => Styles {
            flex_grow: Some(2.0),
            ..Styles::default()
        },
        Some(SectionWidth::Auto) | Some(SectionWidth::Full) | None => Styles {
            width: Some(Scalar::percent(100.0)),
            ..Styles::default()
        },
    };
    let (text_align, align_items) = match base.align {
        Some(SectionAlign::Center) => (TextAlign::Center, AlignItems::Center),
        Some(SectionAlign::Right) => (TextAlign::Right, AlignItems::End),
        Some(SectionAlign::Left) | None => (TextAlign::Left, AlignItems::Start),
    };
    let px = |token: Option<SpacingToken>| Scalar::from(token.map(TokenResolver::spacing).unwrap_or(0));

    Styles {
        text_align: Some(text_align),
        align_items: Some(align_items),
        padding: Some(ScalarBox::all(px(base.padding))),
        margin: Some(ScalarBox::all(px(base.margin))),
        ..Styles::column(SECTION_GAP).merge(&sizing)
    }
}

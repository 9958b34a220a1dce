//! Screen composition: document + context to render tree.
//!
//! The resulting tree always has the same outer shape:
//!
//! ```text
//! Screen
//! └─ Viewport
//!    └─ Card
//!       ├─ IdentityStrip
//!       ├─ Sections
//!       │  └─ Section ... (visible, deduplicated, sorted by order)
//!       └─ CtaRow         (only when the screen has global CTAs)
//! ```

use std::collections::HashSet;

use crate::dom::{NodeData, NodeKind, RenderTree};
use crate::error::ConfigError;
use crate::layout::LayoutEngine;
use crate::schema::{BackgroundToken, LenientLoad, ScreenConfig, Section};
use crate::style::{ResolvedTheme, Rgba, Scalar, ScalarBox, Shadow, Styles, TokenResolver};
use crate::widgets::{CtaRow, CtaRowPlacement, IdentityStrip, Widget};

use super::config::ComposerConfig;
use super::context::RenderContext;
use super::section::SectionRenderer;

/// Top-level orchestrator. Stateless apart from its configuration, so one
/// composer can render any number of documents.
#[derive(Debug, Clone, Default)]
pub struct ScreenComposer {
    config: ComposerConfig,
}

impl ScreenComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ComposerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Compose `screen` for `context`. Never mutates the document.
    ///
    /// Non-fatal findings (placeholders, skipped duplicates) are attached to
    /// the returned tree as diagnostics.
    pub fn compose(&self, screen: &ScreenConfig, context: &RenderContext) -> RenderTree {
        let theme = TokenResolver::resolve_theme(screen.theme.as_ref());
        let rule = LayoutEngine::arrange(screen.layout);
        let mut tree = RenderTree::new();

        let page = tree.insert(
            NodeData::new(NodeKind::Screen).with_key(screen.id.as_str()).with_styles(Styles {
                background: Some(theme.page_background),
                width: Some(Scalar::percent(100.0)),
                min_height: Some(Scalar::vh(100.0)),
                padding: Some(ScalarBox::all(Scalar::from(self.config.page_padding_px))),
                ..Styles::column(0)
            }),
        );
        let viewport = tree.insert_child(
            page,
            NodeData::new(NodeKind::Viewport)
                .with_styles(rule.viewport_styles(self.config.modal_min_height_vh)),
        );
        let card = tree.insert_child(
            viewport,
            NodeData::new(NodeKind::Card).with_styles(self.card_styles(&theme)),
        );

        IdentityStrip::new(&screen.id, screen.layout, theme.accent_color).mount(&mut tree, card);

        let sections = tree.insert_child(
            card,
            NodeData::new(NodeKind::Sections)
                .with_styles(rule.container_styles(self.config.section_gap_px)),
        );
        let ordered = self.arrange_sections(screen, context, &mut tree);
        let renderer = SectionRenderer::new(&theme, &self.config);
        for section in &ordered {
            renderer.render(section, &mut tree, sections);
        }

        if !screen.ctas.is_empty() {
            CtaRow::new(&screen.ctas, CtaRowPlacement::Global)
                .with_link_color(self.config.link_color, theme.accent_color)
                .mount(&mut tree, card);
        }

        tracing::debug!(
            screen = %screen.id,
            layout = %screen.layout,
            rendered = ordered.len(),
            declared = screen.sections.len(),
            "composed screen"
        );
        tree
    }

    /// Compose a leniently loaded document, carrying its load errors along
    /// as diagnostics ahead of composition findings.
    pub fn compose_loaded(&self, load: &LenientLoad, context: &RenderContext) -> RenderTree {
        let mut tree = self.compose(&load.screen, context);
        tree.prepend_diagnostics(load.errors.iter().cloned().map(Into::into));
        tree
    }

    /// Deduplicate by id (first occurrence wins), drop sections invisible in
    /// `context`, then stable-sort by `order`.
    fn arrange_sections<'s>(
        &self,
        screen: &'s ScreenConfig,
        context: &RenderContext,
        tree: &mut RenderTree,
    ) -> Vec<&'s Section> {
        let mut seen = HashSet::new();
        let mut ordered: Vec<&Section> = Vec::with_capacity(screen.sections.len());
        for section in &screen.sections {
            if !seen.insert(section.id()) {
                tracing::warn!(section = section.id(), "skipping duplicate section id");
                tree.push_diagnostic(ConfigError::DuplicateSectionId(section.id().to_owned()));
                continue;
            }
            if context.is_visible(section.base().visibility.as_ref()) {
                ordered.push(section);
            }
        }
        ordered.sort_by_key(|s| s.base().sort_key());
        ordered
    }

    fn card_styles(&self, theme: &ResolvedTheme) -> Styles {
        let radius = if theme.background == BackgroundToken::Inset {
            12
        } else {
            24
        };
        let shadow = (theme.background != BackgroundToken::Transparent).then(|| Shadow {
            offset_x: 0,
            offset_y: 18,
            blur: 45,
            color: Rgba::with_alpha(15, 23, 42, 0.12),
        });
        Styles {
            width: Some(Scalar::percent(100.0)),
            max_width: Some(Scalar::from(self.config.card_max_width_px)),
            margin: Some(ScalarBox::symmetric(Scalar::ZERO, Scalar::auto())),
            background: Some(theme.card_background),
            radius: Some(radius),
            padding: Some(ScalarBox::all(Scalar::px(24.0))),
            shadow,
            ..Styles::column(0)
        }
    }
}

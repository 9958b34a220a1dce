//! TaffyTree wrapper for the geometry pass.
//!
//! [`LayoutEngine`] mirrors a [`RenderTree`] into a taffy layout tree,
//! runs layout computation, and provides results as [`Region`]s.

use std::collections::{HashMap, HashSet};

use taffy::prelude::{AvailableSpace, Dimension, FromLength, TaffyTree};

use crate::dom::{NodeData, NodeId, RenderTree};
use crate::error::LayoutError;
use crate::geometry::Region;
use crate::style::Unit;

use super::resolve::resolve_styles;

/// Line height multiplier used to estimate text block height.
const LINE_HEIGHT: f32 = 1.4;
const DEFAULT_FONT_SIZE: u16 = 16;

/// Wraps a [`TaffyTree`] and maintains a mapping from render [`NodeId`]s to
/// taffy node ids.
///
/// Arrangement rules (see [`LayoutEngine::arrange`]) are baked into node
/// styles at composition time; this type only turns them into pixels.
pub struct LayoutEngine {
    tree: TaffyTree<NodeId>,
    node_map: HashMap<NodeId, taffy::prelude::NodeId>,
    root: Option<taffy::prelude::NodeId>,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self {
            tree: TaffyTree::new(),
            node_map: HashMap::new(),
            root: None,
        }
    }

    /// Synchronize the taffy tree with the render tree.
    ///
    /// Creates or updates a taffy node for every reachable render node,
    /// removes stale ones, and rebuilds parent/child links. `viewport` is
    /// `(width, height)` in pixels and resolves `vw`/`vh` lengths.
    pub fn sync_tree(&mut self, tree: &RenderTree, viewport: (f32, f32)) -> Result<(), LayoutError> {
        let Some(render_root) = tree.root() else {
            self.clear();
            return Ok(());
        };

        let live_nodes = tree.walk_depth_first(render_root);
        let live_set: HashSet<NodeId> = live_nodes.iter().copied().collect();

        let stale: Vec<NodeId> = self
            .node_map
            .keys()
            .filter(|k| !live_set.contains(k))
            .copied()
            .collect();
        for key in stale {
            if let Some(taffy_id) = self.node_map.remove(&key) {
                self.tree.remove(taffy_id)?;
            }
        }

        for &id in &live_nodes {
            let Some(data) = tree.get(id) else {
                continue;
            };
            let mut style = resolve_styles(&data.styles, viewport);
            if let Some(height) = estimated_text_height(data) {
                if data.styles.height.is_none() {
                    style.min_size.height = Dimension::from_length(height);
                }
            }

            match self.node_map.get(&id) {
                Some(&taffy_id) => self.tree.set_style(taffy_id, style)?,
                None => {
                    let taffy_id = self.tree.new_leaf_with_context(style, id)?;
                    self.node_map.insert(id, taffy_id);
                }
            }
        }

        for &id in &live_nodes {
            let children: Vec<taffy::prelude::NodeId> = tree
                .children(id)
                .iter()
                .filter_map(|child| self.node_map.get(child).copied())
                .collect();
            if let Some(&taffy_id) = self.node_map.get(&id) {
                self.tree.set_children(taffy_id, &children)?;
            }
        }

        self.root = self.node_map.get(&render_root).copied();
        Ok(())
    }

    /// Run layout on the root node within the given available space.
    pub fn compute(&mut self, available_width: f32, available_height: f32) -> Result<(), LayoutError> {
        if let Some(root) = self.root {
            self.tree.compute_layout(
                root,
                taffy::geometry::Size {
                    width: AvailableSpace::Definite(available_width),
                    height: AvailableSpace::Definite(available_height),
                },
            )?;
        }
        Ok(())
    }

    /// Sync and compute in one step for a viewport of `width` × `height`.
    pub fn measure(tree: &RenderTree, width: f32, height: f32) -> Result<Self, LayoutError> {
        let mut engine = Self::new();
        engine.sync_tree(tree, (width, height))?;
        engine.compute(width, height)?;
        Ok(engine)
    }

    /// Layout of a single render node, relative to its parent.
    ///
    /// Returns `None` if the node is not in the layout tree.
    pub fn get_layout(&self, node: NodeId) -> Option<Region> {
        let taffy_id = self.node_map.get(&node)?;
        let layout = self.tree.layout(*taffy_id).ok()?;
        Some(Region {
            x: layout.location.x.round() as i32,
            y: layout.location.y.round() as i32,
            width: layout.size.width.round() as i32,
            height: layout.size.height.round() as i32,
        })
    }

    pub fn get_all_layouts(&self) -> HashMap<NodeId, Region> {
        self.node_map
            .keys()
            .filter_map(|&id| self.get_layout(id).map(|region| (id, region)))
            .collect()
    }

    fn clear(&mut self) {
        for (_, taffy_id) in self.node_map.drain() {
            let _ = self.tree.remove(taffy_id);
        }
        self.root = None;
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Border-box height estimate for a node carrying text:
/// `font_size × 1.4 × lines` plus vertical pixel padding.
fn estimated_text_height(data: &NodeData) -> Option<f32> {
    let text = data.text.as_deref()?;
    let lines = text.lines().count().max(1);
    let lines = match data.styles.line_clamp {
        Some(clamp) => lines.min(usize::from(clamp)),
        None => lines,
    };
    let font_size = f32::from(data.styles.font_size.unwrap_or(DEFAULT_FONT_SIZE));
    let padding = data
        .styles
        .padding
        .map(|p| {
            [p.top, p.bottom]
                .iter()
                .filter(|s| s.unit == Unit::Px)
                .map(|s| s.value)
                .sum::<f32>()
        })
        .unwrap_or(0.0);
    Some(font_size * LINE_HEIGHT * lines as f32 + padding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeKind;
    use crate::schema::TextVariant;
    use crate::style::{Scalar, ScalarBox, Styles};

    fn text(content: &str, font_size: u16) -> NodeData {
        NodeData::new(NodeKind::Text(TextVariant::Body1))
            .with_text(content)
            .with_styles(Styles {
                font_size: Some(font_size),
                ..Styles::default()
            })
    }

    #[test]
    fn empty_tree_syncs_to_nothing() {
        let mut engine = LayoutEngine::new();
        engine.sync_tree(&RenderTree::new(), (800.0, 600.0)).unwrap();
        engine.compute(800.0, 600.0).unwrap();
        assert!(engine.get_all_layouts().is_empty());
    }

    #[test]
    fn column_stacks_text_blocks() {
        let mut tree = RenderTree::new();
        let root = tree.insert(NodeData::new(NodeKind::Sections).with_styles(Styles {
            width: Some(Scalar::px(800.0)),
            ..Styles::column(0)
        }));
        let a = tree.insert_child(root, text("First", 20));
        let b = tree.insert_child(root, text("Second", 20));

        let engine = LayoutEngine::measure(&tree, 800.0, 600.0).unwrap();
        let ra = engine.get_layout(a).unwrap();
        let rb = engine.get_layout(b).unwrap();
        assert_eq!(ra.height, 28);
        assert_eq!(ra.width, 800);
        assert_eq!(rb.y, ra.bottom());
    }

    #[test]
    fn line_clamp_caps_estimate() {
        let mut tree = RenderTree::new();
        let root = tree.insert(NodeData::new(NodeKind::Sections));
        let mut data = text("one\ntwo\nthree", 10);
        data.styles.line_clamp = Some(2);
        let t = tree.insert_child(root, data);

        let engine = LayoutEngine::measure(&tree, 400.0, 400.0).unwrap();
        assert_eq!(engine.get_layout(t).unwrap().height, 28);
    }

    #[test]
    fn row_with_gap_places_children_side_by_side() {
        let mut tree = RenderTree::new();
        let root = tree.insert(
            NodeData::new(NodeKind::Sections).with_styles(Styles {
                width: Some(Scalar::px(300.0)),
                ..Styles::row(20)
            }),
        );
        let grow = Styles {
            flex_grow: Some(1.0),
            ..Styles::default()
        };
        let a = tree.insert_child(root, NodeData::new(NodeKind::Card).with_styles(grow.clone()));
        let b = tree.insert_child(root, NodeData::new(NodeKind::Card).with_styles(grow));

        let engine = LayoutEngine::measure(&tree, 800.0, 600.0).unwrap();
        let ra = engine.get_layout(a).unwrap();
        let rb = engine.get_layout(b).unwrap();
        assert_eq!(ra.width, 140);
        assert_eq!(rb.x, 160);
        assert!(!ra.overlaps(rb));
    }

    #[test]
    fn padding_offsets_children() {
        let mut tree = RenderTree::new();
        let root = tree.insert(NodeData::new(NodeKind::Card).with_styles(Styles {
            width: Some(Scalar::px(500.0)),
            padding: Some(ScalarBox::all(Scalar::px(24.0))),
            ..Styles::default()
        }));
        let child = tree.insert_child(root, text("Hi", 10));

        let engine = LayoutEngine::measure(&tree, 500.0, 500.0).unwrap();
        let r = engine.get_layout(child).unwrap();
        assert_eq!((r.x, r.y), (24, 24));
        assert_eq!(r.width, 452);
    }

    #[test]
    fn resync_drops_stale_nodes() {
        let mut tree = RenderTree::new();
        let root = tree.insert(NodeData::new(NodeKind::Card));
        let child = tree.insert_child(root, text("x", 10));
        let mut engine = LayoutEngine::measure(&tree, 100.0, 100.0).unwrap();
        assert!(engine.get_layout(child).is_some());

        let mut other = RenderTree::new();
        other.insert(NodeData::new(NodeKind::Card));
        engine.sync_tree(&other, (100.0, 100.0)).unwrap();
        engine.compute(100.0, 100.0).unwrap();
        assert_eq!(engine.get_all_layouts().len(), 1);
    }
}

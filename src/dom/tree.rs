//! Render tree arena: insert, walk, and CTA activation.

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeData, NodeId};
use crate::action::{Capabilities, CtaActionDispatcher};
use crate::error::{CapabilityError, Diagnostic};

/// Structural links of one node.
#[derive(Debug, Clone)]
struct Links {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// The output of a composition, backed by a slotmap arena.
///
/// Node payloads and structural links live in separate maps keyed by the
/// same [`NodeId`]. Non-fatal findings from composition ride along in
/// [`RenderTree::diagnostics`].
#[derive(Debug, Clone)]
pub struct RenderTree {
    nodes: SlotMap<NodeId, NodeData>,
    links: SecondaryMap<NodeId, Links>,
    root: Option<NodeId>,
    diagnostics: Vec<Diagnostic>,
}

impl RenderTree {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            links: SecondaryMap::new(),
            root: None,
            diagnostics: Vec::new(),
        }
    }

    /// Insert a parentless node. The first one inserted becomes the root.
    pub fn insert(&mut self, data: NodeData) -> NodeId {
        let id = self.attach(None, data);
        self.root.get_or_insert(id);
        id
    }

    /// Append a node as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics (debug) if `parent` is not in the tree.
    pub fn insert_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        debug_assert!(self.contains(parent), "insert_child under a missing parent");
        let id = self.attach(Some(parent), data);
        if let Some(links) = self.links.get_mut(parent) {
            links.children.push(id);
        }
        id
    }

    fn attach(&mut self, parent: Option<NodeId>, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.links.insert(
            id,
            Links {
                parent,
                children: Vec::new(),
            },
        );
        id
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.links.get(id).and_then(|links| links.parent)
    }

    /// Children of a node in render order; empty if none or unknown.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.links.get(id) {
            Some(links) => &links.children,
            None => &[],
        }
    }

    /// Ancestors from the immediate parent up to the root (excluding `id`).
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        std::iter::successors(self.parent(id), |&node| self.parent(node)).collect()
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes, reachable or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order traversal of the subtree at `start`, i.e. render order.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        if self.contains(start) {
            self.collect_subtree(start, &mut order);
        }
        order
    }

    fn collect_subtree(&self, id: NodeId, order: &mut Vec<NodeId>) {
        order.push(id);
        for &child in self.children(id) {
            self.collect_subtree(child, order);
        }
    }

    /// Every node reachable from the root, in render order.
    pub fn walk(&self) -> Vec<NodeId> {
        self.root
            .map(|root| self.walk_depth_first(root))
            .unwrap_or_default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub(crate) fn push_diagnostic(&mut self, diagnostic: impl Into<Diagnostic>) {
        self.diagnostics.push(diagnostic.into());
    }

    /// Put `diagnostics` ahead of the ones already recorded.
    pub(crate) fn prepend_diagnostics(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        let mut merged: Vec<Diagnostic> = diagnostics.into_iter().collect();
        merged.append(&mut self.diagnostics);
        self.diagnostics = merged;
    }

    /// Dispatch the action bound to CTA node `id`.
    ///
    /// Returns `Ok(false)` when `id` is not a CTA node (nothing happens).
    pub fn activate(
        &self,
        id: NodeId,
        dispatcher: &CtaActionDispatcher,
        capabilities: &Capabilities<'_>,
    ) -> Result<bool, CapabilityError> {
        let Some(action) = self.get(id).and_then(NodeData::action) else {
            return Ok(false);
        };
        dispatcher.dispatch(action, capabilities)?;
        Ok(true)
    }
}

impl Default for RenderTree {
    fn default() -> Self {
        Self::new()
    }
}

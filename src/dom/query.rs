//! Render tree queries: by document key, by kind, CTAs.

use super::node::{NodeData, NodeId, NodeKind};
use super::tree::RenderTree;

impl RenderTree {
    /// Find the first node (in render order) rendering document entity `key`.
    pub fn query_by_key(&self, key: &str) -> Option<NodeId> {
        self.iter_nodes()
            .find(|(_, data)| data.key.as_deref() == Some(key))
            .map(|(id, _)| id)
    }

    /// All nodes matching an arbitrary predicate, in render order.
    pub fn query_all(&self, predicate: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        self.iter_nodes()
            .filter(|(_, data)| predicate(data))
            .map(|(id, _)| id)
            .collect()
    }

    /// The first node whose kind matches `kind` exactly.
    pub fn query_kind(&self, kind: &NodeKind) -> Option<NodeId> {
        self.iter_nodes()
            .find(|(_, data)| &data.kind == kind)
            .map(|(id, _)| id)
    }

    /// Every CTA node in render order.
    pub fn ctas(&self) -> Vec<NodeId> {
        self.query_all(|data| matches!(data.kind, NodeKind::Cta(_)))
    }

    /// The keys of rendered sections, in arrangement order.
    pub fn section_keys(&self) -> Vec<&str> {
        self.iter_nodes()
            .filter(|(_, data)| matches!(data.kind, NodeKind::Section(_)))
            .filter_map(|(_, data)| data.key.as_deref())
            .collect()
    }

    /// Reachable `(NodeId, &NodeData)` pairs in render (pre-order) order.
    fn iter_nodes(&self) -> impl Iterator<Item = (NodeId, &NodeData)> {
        self.walk()
            .into_iter()
            .filter_map(move |id| self.get(id).map(|data| (id, data)))
    }
}

//! Owned, id-free copy of a render tree for structural comparison.

use super::node::{NodeId, NodeKind};
use super::tree::RenderTree;
use crate::style::Styles;

/// A render node and its subtree, without arena ids.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    pub kind: NodeKind,
    pub key: Option<String>,
    pub text: Option<String>,
    pub styles: Styles,
    pub children: Vec<RenderSnapshot>,
}

impl RenderSnapshot {
    /// Total node count of this subtree, including itself.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(RenderSnapshot::count).sum::<usize>()
    }
}

impl RenderTree {
    /// Snapshot the tree from its root. `None` for an empty tree.
    pub fn snapshot(&self) -> Option<RenderSnapshot> {
        self.root().and_then(|root| self.snapshot_from(root))
    }

    pub fn snapshot_from(&self, id: NodeId) -> Option<RenderSnapshot> {
        let data = self.get(id)?;
        Some(RenderSnapshot {
            kind: data.kind.clone(),
            key: data.key.clone(),
            text: data.text.clone(),
            styles: data.styles.clone(),
            children: self
                .children(id)
                .iter()
                .filter_map(|&child| self.snapshot_from(child))
                .collect(),
        })
    }
}

/// Two trees are equal when they render the same structure and carry the
/// same diagnostics; arena ids are not compared.
impl PartialEq for RenderTree {
    fn eq(&self, other: &Self) -> bool {
        self.snapshot() == other.snapshot() && self.diagnostics() == other.diagnostics()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::NodeData;

    fn tree_with(text: &str) -> RenderTree {
        let mut tree = RenderTree::new();
        let root = tree.insert(NodeData::new(NodeKind::Card));
        tree.insert_child(root, NodeData::new(NodeKind::IdentityStrip).with_text(text));
        tree
    }

    #[test]
    fn snapshot_mirrors_structure() {
        let snap = tree_with("Screen: a").snapshot().unwrap();
        assert_eq!(snap.kind, NodeKind::Card);
        assert_eq!(snap.children.len(), 1);
        assert_eq!(snap.children[0].text.as_deref(), Some("Screen: a"));
        assert_eq!(snap.count(), 2);
    }

    #[test]
    fn equality_ignores_ids() {
        assert_eq!(tree_with("x"), tree_with("x"));
        assert_ne!(tree_with("x"), tree_with("y"));
    }

    #[test]
    fn empty_tree_has_no_snapshot() {
        assert!(RenderTree::new().snapshot().is_none());
        assert_eq!(RenderTree::new(), RenderTree::default());
    }
}

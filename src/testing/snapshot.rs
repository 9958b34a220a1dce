//! Plain-text outlines of render trees for snapshot assertions.

use std::fmt::Write;

use crate::dom::{NodeId, RenderTree};

/// Render `tree` as an indented outline, one node per line.
///
/// Each line is the node label, then `#key` and the quoted text when
/// present. Children are indented two spaces per level. Styles are left
/// out; compare [`RenderSnapshot`](crate::dom::RenderSnapshot)s for those.
///
/// ```text
/// Screen #welcome
///   Viewport
///     Card
/// ```
pub fn outline(tree: &RenderTree) -> String {
    let mut out = String::new();
    if let Some(root) = tree.root() {
        outline_node(tree, root, 0, &mut out);
    }
    out
}

/// Outline of the subtree rooted at `id`.
pub fn outline_from(tree: &RenderTree, id: NodeId) -> String {
    let mut out = String::new();
    outline_node(tree, id, 0, &mut out);
    out
}

fn outline_node(tree: &RenderTree, id: NodeId, depth: usize, out: &mut String) {
    let Some(data) = tree.get(id) else {
        return;
    };
    out.push_str(&"  ".repeat(depth));
    out.push_str(&data.kind.label());
    if let Some(key) = &data.key {
        let _ = write!(out, " #{key}");
    }
    if let Some(text) = &data.text {
        let _ = write!(out, " {text:?}");
    }
    out.push('\n');
    for &child in tree.children(id) {
        outline_node(tree, child, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{NodeData, NodeKind};
    use crate::schema::TextVariant;

    #[test]
    fn indents_children() {
        let mut tree = RenderTree::new();
        let root = tree.insert(NodeData::new(NodeKind::Card).with_key("c"));
        tree.insert_child(
            root,
            NodeData::new(NodeKind::Text(TextVariant::Heading1))
                .with_key("t")
                .with_text("Hello"),
        );
        insta::assert_snapshot!(outline(&tree), @r#"
        Card #c
          Text:heading1 #t "Hello"
        "#);
    }

    #[test]
    fn empty_tree_is_empty() {
        assert_eq!(outline(&RenderTree::new()), "");
    }
}

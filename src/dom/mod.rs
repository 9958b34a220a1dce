//! Render tree: slotmap-backed node arena produced by composition.

pub mod node;
pub mod query;
pub mod snapshot;
pub mod tree;

pub use node::{CtaBinding, NodeData, NodeId, NodeKind};
pub use snapshot::RenderSnapshot;
pub use tree::RenderTree;

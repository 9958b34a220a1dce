//! Layout: arrangement rules per layout type and the taffy geometry pass.

pub mod arrangement;
pub mod engine;
pub mod resolve;

pub use arrangement::{ArrangementFamily, ArrangementRule};
pub use engine::LayoutEngine;

//! # dynamic-screen
//!
//! Schema-driven screen rendering with a typed call-to-action dispatcher.
//!
//! A screen is a serializable document ([`ScreenConfig`]): a layout type, an
//! optional theme of design tokens, ordered sections, and CTAs bound to a
//! closed set of actions. [`ScreenComposer`] turns a document plus a
//! [`RenderContext`] (platform, viewport width) into a [`RenderTree`], and
//! [`CtaActionDispatcher`] performs a CTA's action through host-provided
//! capabilities.
//!
//! ## Core Systems
//!
//! - **[`schema`]**: Document model, serde wire format, lenient loading
//! - **[`style`]**: Typed style properties and the design-token tables
//! - **[`dom`]**: Slotmap-backed render tree with queries and snapshots
//! - **[`widgets`]**: Node builders for text, images, CTAs, identity strip
//! - **[`layout`]**: Arrangement rules per layout type, taffy geometry pass
//! - **[`render`]**: Section rendering and screen composition
//! - **[`action`]**: Capability traits, dispatcher, custom handler registry
//! - **[`testing`]**: Recording capabilities, Pilot, tree outlines
//!
//! ```
//! use dynamic_screen::{RenderContext, ScreenComposer, ScreenConfig};
//!
//! let screen = ScreenConfig::from_json(
//!     r#"{"id": "welcome", "version": 1, "layout": "centered-card", "sections": []}"#,
//! )
//! .unwrap();
//! let tree = ScreenComposer::new().compose(&screen, &RenderContext::default());
//! assert!(tree.section_keys().is_empty());
//! ```

// Foundation
pub mod error;
pub mod geometry;

// Document
pub mod schema;
pub mod style;

// Rendering
pub mod dom;
pub mod layout;
pub mod render;
pub mod widgets;

// Actions
pub mod action;

// Test support
pub mod testing;

pub use action::{Capabilities, CtaActionDispatcher, HandlerRegistry};
pub use dom::{NodeId, RenderTree};
pub use error::{CapabilityError, ConfigError, Diagnostic, DispatchError, LayoutError};
pub use layout::LayoutEngine;
pub use render::{ComposerConfig, RenderContext, ScreenComposer, SectionRenderer};
pub use schema::{load_lenient, CtaAction, LayoutType, ScreenConfig, Section};
pub use style::TokenResolver;

//! Rendering pipeline: context, section rendering, screen composition.

pub mod composer;
pub mod config;
pub mod context;
pub mod section;

pub use composer::ScreenComposer;
pub use config::ComposerConfig;
pub use context::RenderContext;
pub use section::SectionRenderer;

//! CTA action dispatch through host-provided capabilities.

pub mod capabilities;
pub mod dispatch;
pub mod handlers;

pub use capabilities::{
    Capabilities, Clipboard, CustomHandlerResolver, ExternalOpener, Navigator, Notifier,
};
pub use dispatch::{mailto_uri, CtaActionDispatcher};
pub use handlers::{Handler, HandlerRegistry};

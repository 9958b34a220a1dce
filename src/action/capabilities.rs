//! Platform capabilities consumed by the dispatcher.
//!
//! The core never performs side effects itself. Hosts implement these traits
//! (navigation stack, URI opener, clipboard, toast surface, custom handlers)
//! and hand them to [`CtaActionDispatcher`](super::CtaActionDispatcher) as a
//! [`Capabilities`] bundle.

use serde_json::Value;

use crate::error::CapabilityError;
use crate::schema::NavigationMethod;

/// In-app navigation.
pub trait Navigator {
    /// Go to `target`. `Push` extends history, `Replace` swaps the current entry.
    fn navigate(&self, target: &str, method: NavigationMethod) -> Result<(), CapabilityError>;
}

/// Opens URIs outside the app (browser, mail client, dialer, downloads).
pub trait ExternalOpener {
    /// Open `uri`; `new_context` asks for a new tab/window instead of the current one.
    fn open(&self, uri: &str, new_context: bool) -> Result<(), CapabilityError>;
}

pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), CapabilityError>;
}

/// Transient user-facing messages (toasts).
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Resolves and runs host-defined handlers by id.
pub trait CustomHandlerResolver {
    /// Run the handler registered as `handler_id`. `payload` is passed
    /// through untouched.
    fn resolve(&self, handler_id: &str, payload: Option<&Value>) -> Result<(), CapabilityError>;
}

/// Borrowed set of capabilities for one dispatch.
#[derive(Clone, Copy)]
pub struct Capabilities<'a> {
    pub navigator: &'a dyn Navigator,
    pub opener: &'a dyn ExternalOpener,
    pub clipboard: &'a dyn Clipboard,
    pub notifier: &'a dyn Notifier,
    pub handlers: &'a dyn CustomHandlerResolver,
}

impl<'a> Capabilities<'a> {
    pub fn new(
        navigator: &'a dyn Navigator,
        opener: &'a dyn ExternalOpener,
        clipboard: &'a dyn Clipboard,
        notifier: &'a dyn Notifier,
        handlers: &'a dyn CustomHandlerResolver,
    ) -> Self {
        Self {
            navigator,
            opener,
            clipboard,
            notifier,
            handlers,
        }
    }

    /// Use one value for every capability.
    pub fn from_host<H>(host: &'a H) -> Self
    where
        H: Navigator + ExternalOpener + Clipboard + Notifier + CustomHandlerResolver,
    {
        Self::new(host, host, host, host, host)
    }
}

impl std::fmt::Debug for Capabilities<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Capabilities { .. }")
    }
}

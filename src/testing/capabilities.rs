//! In-memory capabilities that record every call.

use std::cell::RefCell;

use serde_json::Value;

use crate::action::{
    Capabilities, Clipboard, CustomHandlerResolver, ExternalOpener, Navigator, Notifier,
};
use crate::error::CapabilityError;
use crate::schema::NavigationMethod;

/// One recorded capability call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Navigate {
        target: String,
        method: NavigationMethod,
    },
    Open {
        uri: String,
        new_context: bool,
    },
    Copy(String),
    Notify(String),
    Custom {
        handler_id: String,
        payload: Option<Value>,
    },
}

/// Records calls in order. Individual capabilities can be made to fail.
///
/// Failing calls are still recorded.
#[derive(Debug, Default)]
pub struct RecordingCapabilities {
    calls: RefCell<Vec<Call>>,
    fail_navigation: bool,
    fail_open: bool,
    fail_clipboard: bool,
}

impl RecordingCapabilities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_navigation(mut self) -> Self {
        self.fail_navigation = true;
        self
    }

    pub fn failing_open(mut self) -> Self {
        self.fail_open = true;
        self
    }

    pub fn failing_clipboard(mut self) -> Self {
        self.fail_clipboard = true;
        self
    }

    /// Borrow every capability from this recorder.
    pub fn capabilities(&self) -> Capabilities<'_> {
        Capabilities::from_host(self)
    }

    /// Calls so far, oldest first.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Forget recorded calls.
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl Navigator for RecordingCapabilities {
    fn navigate(&self, target: &str, method: NavigationMethod) -> Result<(), CapabilityError> {
        self.record(Call::Navigate {
            target: target.to_owned(),
            method,
        });
        if self.fail_navigation {
            return Err(CapabilityError::Navigation {
                target: target.to_owned(),
                message: "navigator unavailable".into(),
            });
        }
        Ok(())
    }
}

impl ExternalOpener for RecordingCapabilities {
    fn open(&self, uri: &str, new_context: bool) -> Result<(), CapabilityError> {
        self.record(Call::Open {
            uri: uri.to_owned(),
            new_context,
        });
        if self.fail_open {
            return Err(CapabilityError::OpenUri {
                uri: uri.to_owned(),
                message: "opener unavailable".into(),
            });
        }
        Ok(())
    }
}

impl Clipboard for RecordingCapabilities {
    fn write_text(&self, text: &str) -> Result<(), CapabilityError> {
        self.record(Call::Copy(text.to_owned()));
        if self.fail_clipboard {
            return Err(CapabilityError::Clipboard("permission denied".into()));
        }
        Ok(())
    }
}

impl Notifier for RecordingCapabilities {
    fn notify(&self, message: &str) {
        self.record(Call::Notify(message.to_owned()));
    }
}

impl CustomHandlerResolver for RecordingCapabilities {
    fn resolve(&self, handler_id: &str, payload: Option<&Value>) -> Result<(), CapabilityError> {
        self.record(Call::Custom {
            handler_id: handler_id.to_owned(),
            payload: payload.cloned(),
        });
        Ok(())
    }
}

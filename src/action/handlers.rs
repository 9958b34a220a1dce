//! Registry of host-defined custom action handlers.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::CapabilityError;

use super::capabilities::CustomHandlerResolver;

/// A custom handler: receives the action's payload, if any.
pub type Handler = Box<dyn Fn(Option<&Value>) -> Result<(), CapabilityError> + Send + Sync>;

/// Maps handler ids to closures. Doubles as a [`CustomHandlerResolver`].
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Handler>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `id`, replacing any previous handler.
    pub fn register<F>(&mut self, id: impl Into<String>, handler: F)
    where
        F: Fn(Option<&Value>) -> Result<(), CapabilityError> + Send + Sync + 'static,
    {
        self.handlers.insert(id.into(), Box::new(handler));
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_handler<F>(mut self, id: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Option<&Value>) -> Result<(), CapabilityError> + Send + Sync + 'static,
    {
        self.register(id, handler);
        self
    }

    /// Remove the handler for `id`. Returns whether one was registered.
    pub fn unregister(&mut self, id: &str) -> bool {
        self.handlers.remove(id).is_some()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.handlers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl CustomHandlerResolver for HandlerRegistry {
    fn resolve(&self, handler_id: &str, payload: Option<&Value>) -> Result<(), CapabilityError> {
        let handler = self
            .handlers
            .get(handler_id)
            .ok_or_else(|| CapabilityError::UnknownHandler(handler_id.to_owned()))?;
        handler(payload)
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        ids.sort_unstable();
        f.debug_struct("HandlerRegistry").field("handlers", &ids).finish()
    }
}

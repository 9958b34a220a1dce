//! Action dispatch: one typed action to exactly one platform effect.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{CapabilityError, ConfigError, DispatchError};
use crate::schema::CtaAction;

use super::capabilities::Capabilities;

/// Routes a [`CtaAction`] to the matching capability.
///
/// Dispatch is synchronous and stateless; the only side effects are the
/// capability calls themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct CtaActionDispatcher;

impl CtaActionDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Perform `action` through `capabilities`.
    ///
    /// Clipboard failures are swallowed (no notification is shown); every
    /// other capability error is returned to the caller.
    pub fn dispatch(
        &self,
        action: &CtaAction,
        capabilities: &Capabilities<'_>,
    ) -> Result<(), CapabilityError> {
        tracing::debug!(action = %action.kind(), "dispatching cta action");

        let result = match action {
            CtaAction::Route { target, method } => capabilities
                .navigator
                .navigate(target, method.unwrap_or_default()),
            CtaAction::ExternalUrl {
                url,
                open_in_new_tab,
            } => capabilities
                .opener
                .open(url, open_in_new_tab.unwrap_or(false)),
            CtaAction::Mailto {
                email,
                subject,
                body,
            } => capabilities.opener.open(
                &mailto_uri(email, subject.as_deref(), body.as_deref()),
                false,
            ),
            CtaAction::Phone { number } => capabilities.opener.open(&format!("tel:{number}"), false),
            CtaAction::Download { file_url, .. } => capabilities.opener.open(file_url, true),
            CtaAction::CopyToClipboard {
                text,
                toast_message,
            } => {
                copy_to_clipboard(capabilities, text, toast_message.as_deref());
                Ok(())
            }
            CtaAction::Custom {
                handler_id,
                payload,
            } => capabilities.handlers.resolve(handler_id, payload.as_ref()),
            CtaAction::Noop {} => Ok(()),
        };

        if let Err(err) = &result {
            tracing::warn!(action = %action.kind(), error = %err, "cta action failed");
        }
        result
    }

    /// Decode an untyped action and dispatch it.
    ///
    /// Values outside the closed action union fail with
    /// [`ConfigError::UnknownAction`] before any capability is touched.
    pub fn dispatch_value(
        &self,
        action: &Value,
        capabilities: &Capabilities<'_>,
    ) -> Result<(), DispatchError> {
        let action = CtaAction::deserialize(action)
            .map_err(|err| ConfigError::UnknownAction(err.to_string()))?;
        self.dispatch(&action, capabilities)?;
        Ok(())
    }
}

fn copy_to_clipboard(capabilities: &Capabilities<'_>, text: &str, toast: Option<&str>) {
    match capabilities.clipboard.write_text(text) {
        Ok(()) => {
            if let Some(message) = non_empty(toast) {
                capabilities.notifier.notify(message);
            }
        }
        Err(err) => tracing::debug!(error = %err, "clipboard write failed; no toast shown"),
    }
}

/// Cleared optional text fields arrive as `""` and count as absent.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Build a `mailto:` URI. Query parameters are percent-encoded; empty ones
/// are skipped and `?` is omitted when none remain.
pub fn mailto_uri(email: &str, subject: Option<&str>, body: Option<&str>) -> String {
    let params: Vec<String> = [("subject", subject), ("body", body)]
        .into_iter()
        .filter_map(|(name, value)| {
            non_empty(value).map(|v| format!("{name}={}", urlencoding::encode(v)))
        })
        .collect();
    if params.is_empty() {
        format!("mailto:{email}")
    } else {
        format!("mailto:{email}?{}", params.join("&"))
    }
}

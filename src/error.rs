//! Error and diagnostic types.
//!
//! [`ConfigError`] covers documents that fall outside the closed type domain.
//! [`CapabilityError`] covers platform effects that fail at dispatch time.
//! [`Diagnostic`] is the non-fatal record attached to a composed render tree.

/// A document (or document fragment) violates the closed schema.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed document: {0}")]
    InvalidJson(String),
    #[error("invalid document: {0}")]
    InvalidDocument(String),
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
    #[error("section #{index} ({id}) skipped: {message}")]
    InvalidSection {
        index: usize,
        id: String,
        message: String,
    },
    #[error("cta #{index} of {owner} dropped: {message}")]
    InvalidCta {
        owner: String,
        index: usize,
        message: String,
    },
    #[error("duplicate section id: {0}")]
    DuplicateSectionId(String),
    #[error("unknown or malformed action: {0}")]
    UnknownAction(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::InvalidJson(err.to_string())
    }
}

/// An external capability failed while performing a dispatched effect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CapabilityError {
    #[error("navigation to {target} failed: {message}")]
    Navigation { target: String, message: String },
    #[error("opening {uri} failed: {message}")]
    OpenUri { uri: String, message: String },
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
    #[error("no custom handler registered for {0}")]
    UnknownHandler(String),
    #[error("custom handler {handler_id} failed: {message}")]
    Handler { handler_id: String, message: String },
}

/// Failure of an untyped dispatch: either the action never decoded or its effect failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Capability(#[from] CapabilityError),
}

/// Errors from the geometry pass.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("layout tree error: {0}")]
    Taffy(#[from] taffy::TaffyError),
}

/// Non-fatal findings collected while composing a screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// An image section without `src` rendered its placeholder.
    MissingAsset { section_id: String },
    /// A fragment of the document was skipped or replaced by a default.
    Config(ConfigError),
}

impl Diagnostic {
    /// Whether this diagnostic is only a warning (the screen is otherwise intact).
    pub fn is_warning(&self) -> bool {
        matches!(self, Diagnostic::MissingAsset { .. })
    }
}

impl From<ConfigError> for Diagnostic {
    fn from(err: ConfigError) -> Self {
        Diagnostic::Config(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_messages() {
        let err = ConfigError::InvalidValue {
            field: "layout".into(),
            message: "unknown variant".into(),
        };
        assert_eq!(err.to_string(), "invalid value for layout: unknown variant");
        assert_eq!(
            ConfigError::DuplicateSectionId("hero".into()).to_string(),
            "duplicate section id: hero"
        );
    }

    #[test]
    fn dispatch_error_wraps_both_sides() {
        let cfg: DispatchError = ConfigError::UnknownAction("teleport".into()).into();
        assert!(matches!(cfg, DispatchError::Config(_)));
        let cap: DispatchError = CapabilityError::UnknownHandler("x".into()).into();
        assert_eq!(cap.to_string(), "no custom handler registered for x");
    }

    #[test]
    fn missing_asset_is_warning() {
        let d = Diagnostic::MissingAsset {
            section_id: "img".into(),
        };
        assert!(d.is_warning());
        let c: Diagnostic = ConfigError::DuplicateSectionId("a".into()).into();
        assert!(!c.is_warning());
    }

    #[test]
    fn serde_error_becomes_invalid_json() {
        let err: ConfigError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, ConfigError::InvalidJson(_)));
    }
}

//! Pilot: headless composition and CTA activation.
//!
//! The [`Pilot`] composes a screen document, then lets tests "click" CTAs by
//! key and observe which capability calls the click produced.

use crate::action::CtaActionDispatcher;
use crate::dom::RenderTree;
use crate::error::CapabilityError;
use crate::render::{ComposerConfig, RenderContext, ScreenComposer};
use crate::schema::ScreenConfig;

use super::capabilities::{Call, RecordingCapabilities};
use super::snapshot::outline;

/// A composed screen wired to recording capabilities.
///
/// # Examples
///
/// ```
/// use dynamic_screen::schema::{CtaAction, CtaConfig, CtaPriority, LayoutType, ScreenConfig};
/// use dynamic_screen::testing::{Call, Pilot};
///
/// let screen = ScreenConfig::new("welcome", LayoutType::Stacked).with_cta(CtaConfig::button(
///     "tel",
///     "Call us",
///     CtaPriority::Primary,
///     CtaAction::Phone { number: "555".into() },
/// ));
/// let pilot = Pilot::new(&screen);
/// assert!(pilot.click("tel").unwrap());
/// assert_eq!(pilot.calls(), vec![Call::Open { uri: "tel:555".into(), new_context: false }]);
/// ```
pub struct Pilot {
    tree: RenderTree,
    host: RecordingCapabilities,
    dispatcher: CtaActionDispatcher,
}

impl Pilot {
    /// Compose `screen` with the default context and configuration.
    pub fn new(screen: &ScreenConfig) -> Self {
        Self::with_context(screen, &RenderContext::default())
    }

    pub fn with_context(screen: &ScreenConfig, context: &RenderContext) -> Self {
        Self::with_config(screen, context, ComposerConfig::default())
    }

    pub fn with_config(
        screen: &ScreenConfig,
        context: &RenderContext,
        config: ComposerConfig,
    ) -> Self {
        Self::from_tree(ScreenComposer::with_config(config).compose(screen, context))
    }

    /// Drive an already composed tree.
    pub fn from_tree(tree: RenderTree) -> Self {
        Self {
            tree,
            host: RecordingCapabilities::new(),
            dispatcher: CtaActionDispatcher::new(),
        }
    }

    /// Replace the recording host (e.g. one with failing capabilities).
    pub fn with_host(mut self, host: RecordingCapabilities) -> Self {
        self.host = host;
        self
    }

    /// Activate the CTA keyed `key`.
    ///
    /// Returns `Ok(false)` when no CTA carries that key.
    pub fn click(&self, key: &str) -> Result<bool, CapabilityError> {
        let Some(id) = self.tree.query_by_key(key) else {
            return Ok(false);
        };
        self.tree
            .activate(id, &self.dispatcher, &self.host.capabilities())
    }

    pub fn calls(&self) -> Vec<Call> {
        self.host.calls()
    }

    pub fn tree(&self) -> &RenderTree {
        &self.tree
    }

    /// Indented outline of the composed tree.
    pub fn outline(&self) -> String {
        outline(&self.tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CtaAction, CtaConfig, CtaPriority, LayoutType, Section, TextBlock, TextVariant};
    use pretty_assertions::assert_eq;

    fn screen() -> ScreenConfig {
        ScreenConfig::new("s", LayoutType::Stacked).with_section(
            Section::text("intro", vec![TextBlock::new("t", TextVariant::Body1, "Hi")]).with_ctas(
                vec![CtaConfig::button(
                    "copy",
                    "Copy code",
                    CtaPriority::Secondary,
                    CtaAction::CopyToClipboard {
                        text: "XYZ".into(),
                        toast_message: Some("Copied!".into()),
                    },
                )],
            ),
        )
    }

    #[test]
    fn click_dispatches_section_cta() {
        let pilot = Pilot::new(&screen());
        assert_eq!(pilot.click("copy"), Ok(true));
        assert_eq!(
            pilot.calls(),
            vec![Call::Copy("XYZ".into()), Call::Notify("Copied!".into())]
        );
    }

    #[test]
    fn click_on_non_cta_is_ignored() {
        let pilot = Pilot::new(&screen());
        assert_eq!(pilot.click("intro"), Ok(false));
        assert_eq!(pilot.click("nope"), Ok(false));
        assert!(pilot.calls().is_empty());
    }

    #[test]
    fn failing_clipboard_host() {
        let pilot = Pilot::new(&screen()).with_host(RecordingCapabilities::new().failing_clipboard());
        assert_eq!(pilot.click("copy"), Ok(true));
        assert_eq!(pilot.calls(), vec![Call::Copy("XYZ".into())]);
    }
}

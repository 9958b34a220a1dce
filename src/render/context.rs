//! Rendering context and the section visibility predicate.

use serde::{Deserialize, Serialize};

use crate::schema::{Platform, VisibilityConfig};

/// What the caller is rendering for. Only consulted by visibility filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderContext {
    pub platform: Platform,
    pub viewport_width_px: u32,
}

impl RenderContext {
    pub fn new(platform: Platform, viewport_width_px: u32) -> Self {
        Self {
            platform,
            viewport_width_px,
        }
    }

    /// Whether a section with this predicate renders in this context.
    ///
    /// A missing or empty `platforms` list and missing width bounds are
    /// unconstrained. Width bounds are inclusive.
    pub fn is_visible(&self, visibility: Option<&VisibilityConfig>) -> bool {
        let Some(v) = visibility else {
            return true;
        };
        let platform_ok = match v.platforms.as_deref() {
            None | Some([]) => true,
            Some(platforms) => platforms.contains(&self.platform),
        };
        let min_ok = v.min_width_px.map_or(true, |min| self.viewport_width_px >= min);
        let max_ok = v.max_width_px.map_or(true, |max| self.viewport_width_px <= max);
        platform_ok && min_ok && max_ok
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(Platform::Web, 1280)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn min_width(px: u32) -> VisibilityConfig {
        VisibilityConfig {
            min_width_px: Some(px),
            ..VisibilityConfig::default()
        }
    }

    #[test]
    fn no_predicate_is_visible() {
        assert!(RenderContext::default().is_visible(None));
        assert!(RenderContext::default().is_visible(Some(&VisibilityConfig::default())));
    }

    #[test]
    fn min_width_gate() {
        let v = min_width(768);
        assert!(!RenderContext::new(Platform::Web, 500).is_visible(Some(&v)));
        assert!(RenderContext::new(Platform::Web, 900).is_visible(Some(&v)));
        assert!(RenderContext::new(Platform::Web, 768).is_visible(Some(&v)));
    }

    #[test]
    fn max_width_is_inclusive() {
        let v = VisibilityConfig {
            max_width_px: Some(600),
            ..VisibilityConfig::default()
        };
        assert!(RenderContext::new(Platform::Android, 600).is_visible(Some(&v)));
        assert!(!RenderContext::new(Platform::Android, 601).is_visible(Some(&v)));
    }

    #[test]
    fn platform_gate() {
        let v = VisibilityConfig {
            platforms: Some(vec![Platform::Ios]),
            ..VisibilityConfig::default()
        };
        assert!(!RenderContext::new(Platform::Web, 1024).is_visible(Some(&v)));
        assert!(RenderContext::new(Platform::Ios, 1024).is_visible(Some(&v)));
    }

    #[test]
    fn empty_platform_list_is_unconstrained() {
        let v = VisibilityConfig {
            platforms: Some(Vec::new()),
            ..VisibilityConfig::default()
        };
        assert!(RenderContext::new(Platform::Android, 320).is_visible(Some(&v)));
    }

    #[test]
    fn context_wire_format() {
        let ctx: RenderContext =
            serde_json::from_str(r#"{"platform":"ios","viewportWidthPx":390}"#).unwrap();
        assert_eq!(ctx, RenderContext::new(Platform::Ios, 390));
    }
}

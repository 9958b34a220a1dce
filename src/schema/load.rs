//! Lenient document loading.
//!
//! [`load_lenient`] decodes a document fragment by fragment so that one bad
//! section or CTA does not take the whole screen down. Invalid top-level
//! `layout`/`theme` values are replaced by their defaults. Every skip or
//! substitution is reported as a [`ConfigError`] next to the loaded document.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::cta::CtaConfig;
use super::screen::{ScreenConfig, ScreenTheme};
use super::section::Section;
use super::tokens::LayoutType;
use crate::error::ConfigError;

/// A document recovered from possibly-malformed input.
#[derive(Debug, Clone, PartialEq)]
pub struct LenientLoad {
    pub screen: ScreenConfig,
    /// Fragments that were skipped or replaced, in document order.
    pub errors: Vec<ConfigError>,
}

impl LenientLoad {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Load a screen, degrading per fragment instead of failing outright.
///
/// Fails only when the input is not JSON, the root is not an object, or the
/// root has no string `id`.
pub fn load_lenient(input: &str) -> Result<LenientLoad, ConfigError> {
    let root: Value = serde_json::from_str(input)?;
    let Value::Object(mut root) = root else {
        return Err(ConfigError::InvalidDocument(
            "document root must be an object".into(),
        ));
    };
    let id = match root.get("id") {
        Some(Value::String(id)) => id.clone(),
        _ => {
            return Err(ConfigError::InvalidDocument(
                "document has no string id".into(),
            ))
        }
    };

    let mut errors = Vec::new();

    let version = match root.get("version") {
        Some(v) => v.as_u64().unwrap_or_else(|| {
            errors.push(ConfigError::InvalidValue {
                field: "version".into(),
                message: format!("expected a non-negative integer, got {v}"),
            });
            1
        }),
        None => 1,
    };

    let layout = take_field::<LayoutType>(&mut root, "layout", "layout", &mut errors)
        .unwrap_or_else(|| {
            tracing::warn!(screen = %id, "layout missing or invalid, using stacked");
            LayoutType::default()
        });

    let theme = match root.remove("theme") {
        None | Some(Value::Null) => None,
        Some(Value::Object(mut fields)) => Some(ScreenTheme {
            color_scheme: take_field(&mut fields, "colorScheme", "theme.colorScheme", &mut errors),
            background: take_field(&mut fields, "background", "theme.background", &mut errors),
            accent: take_field(&mut fields, "accent", "theme.accent", &mut errors),
        }),
        Some(other) => {
            errors.push(ConfigError::InvalidValue {
                field: "theme".into(),
                message: format!("expected an object, got {other}"),
            });
            None
        }
    };

    let sections = match root.remove("sections") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .filter_map(|(index, raw)| decode_section(index, raw, &mut errors))
            .collect(),
        Some(other) => {
            errors.push(ConfigError::InvalidValue {
                field: "sections".into(),
                message: format!("expected an array, got {other}"),
            });
            Vec::new()
        }
    };

    let ctas = decode_ctas("screen", root.remove("ctas"), &mut errors).unwrap_or_default();

    Ok(LenientLoad {
        screen: ScreenConfig {
            id,
            version,
            layout,
            theme,
            sections,
            ctas,
        },
        errors,
    })
}

/// Remove and decode one field; a present-but-invalid value is reported and dropped.
fn take_field<T: DeserializeOwned>(
    fields: &mut Map<String, Value>,
    key: &str,
    path: &str,
    errors: &mut Vec<ConfigError>,
) -> Option<T> {
    match fields.remove(key) {
        None | Some(Value::Null) => None,
        Some(raw) => match serde_json::from_value(raw) {
            Ok(value) => Some(value),
            Err(e) => {
                errors.push(ConfigError::InvalidValue {
                    field: path.into(),
                    message: e.to_string(),
                });
                None
            }
        },
    }
}

fn decode_section(index: usize, mut raw: Value, errors: &mut Vec<ConfigError>) -> Option<Section> {
    let id = raw
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or("<unnamed>")
        .to_owned();
    // CTAs are decoded separately so a single bad one only drops itself.
    let raw_ctas = raw.as_object_mut().and_then(|fields| fields.remove("ctas"));

    match serde_json::from_value::<Section>(raw) {
        Ok(mut section) => {
            match &mut section {
                Section::Text(body) | Section::Hero(body) => {
                    body.ctas = decode_ctas(&id, raw_ctas, errors);
                }
                Section::Image(_) => {
                    if raw_ctas.is_some_and(|ctas| !ctas.is_null()) {
                        tracing::warn!(section = %id, "dropping ctas on image section");
                        errors.push(ConfigError::InvalidValue {
                            field: format!("{id}.ctas"),
                            message: "image sections carry no ctas".into(),
                        });
                    }
                }
            }
            Some(section)
        }
        Err(e) => {
            tracing::warn!(section = %id, index, error = %e, "skipping invalid section");
            errors.push(ConfigError::InvalidSection {
                index,
                id,
                message: e.to_string(),
            });
            None
        }
    }
}

fn decode_ctas(
    owner: &str,
    raw: Option<Value>,
    errors: &mut Vec<ConfigError>,
) -> Option<Vec<CtaConfig>> {
    match raw {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .enumerate()
                .filter_map(|(index, item)| match serde_json::from_value::<CtaConfig>(item) {
                    Ok(cta) => Some(cta),
                    Err(e) => {
                        tracing::warn!(owner, index, error = %e, "dropping invalid cta");
                        errors.push(ConfigError::InvalidCta {
                            owner: owner.to_owned(),
                            index,
                            message: e.to_string(),
                        });
                        None
                    }
                })
                .collect(),
        ),
        Some(other) => {
            errors.push(ConfigError::InvalidValue {
                field: format!("{owner}.ctas"),
                message: format!("expected an array, got {other}"),
            });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::cta::CtaAction;
    use crate::schema::tokens::AccentToken;
    use pretty_assertions::assert_eq;

    #[test]
    fn clean_document_has_no_errors() {
        let load = load_lenient(
            r#"{"id":"s","version":2,"layout":"modal",
                "sections":[{"id":"a","type":"text","blocks":[]}]}"#,
        )
        .unwrap();
        assert!(load.is_clean());
        assert_eq!(load.screen.version, 2);
        assert_eq!(load.screen.layout, LayoutType::Modal);
        assert_eq!(load.screen.sections.len(), 1);
    }

    #[test]
    fn invalid_layout_defaults_to_stacked() {
        let load = load_lenient(r#"{"id":"s","version":1,"layout":"carousel"}"#).unwrap();
        assert_eq!(load.screen.layout, LayoutType::Stacked);
        assert!(matches!(
            &load.errors[..],
            [ConfigError::InvalidValue { field, .. }] if field == "layout"
        ));
    }

    #[test]
    fn invalid_theme_field_defaults_only_that_field() {
        let load = load_lenient(
            r#"{"id":"s","version":1,"layout":"stacked",
                "theme":{"colorScheme":"sepia","accent":"info"}}"#,
        )
        .unwrap();
        let theme = load.screen.theme.unwrap();
        assert_eq!(theme.color_scheme, None);
        assert_eq!(theme.accent, Some(AccentToken::Info));
        assert_eq!(load.errors.len(), 1);
    }

    #[test]
    fn bad_section_is_skipped_others_survive() {
        let load = load_lenient(
            r#"{"id":"s","version":1,"layout":"stacked","sections":[
                {"id":"ok","type":"image"},
                {"id":"broken","type":"video"},
                {"id":"also_ok","type":"text","blocks":[]}
            ]}"#,
        )
        .unwrap();
        let ids: Vec<&str> = load.screen.sections.iter().map(Section::id).collect();
        assert_eq!(ids, vec!["ok", "also_ok"]);
        assert!(matches!(
            &load.errors[..],
            [ConfigError::InvalidSection { index: 1, id, .. }] if id == "broken"
        ));
    }

    #[test]
    fn bad_cta_is_dropped_section_survives() {
        let load = load_lenient(
            r#"{"id":"s","version":1,"layout":"stacked","sections":[
                {"id":"hero","type":"hero","blocks":[],"ctas":[
                    {"id":"good","label":"Go","kind":"button","priority":"primary",
                     "action":{"type":"route","target":"/go"}},
                    {"id":"bad","label":"Beam","kind":"button","priority":"primary",
                     "action":{"type":"teleport"}}
                ]}
            ]}"#,
        )
        .unwrap();
        let Section::Hero(body) = &load.screen.sections[0] else {
            panic!("expected hero")
        };
        let ctas = body.ctas.as_ref().unwrap();
        assert_eq!(ctas.len(), 1);
        assert!(matches!(ctas[0].action, CtaAction::Route { .. }));
        assert!(matches!(
            &load.errors[..],
            [ConfigError::InvalidCta { owner, index: 1, .. }] if owner == "hero"
        ));
    }

    #[test]
    fn misplaced_fields_are_reported() {
        let load = load_lenient(
            r#"{"id":"s","version":1,"layout":"stacked","sections":[
                {"id":"art","type":"image","ctas":[]},
                {"id":"copy","type":"text","blocks":[],"src":"https://x.io/a.png"}
            ]}"#,
        )
        .unwrap();
        let ids: Vec<&str> = load.screen.sections.iter().map(Section::id).collect();
        assert_eq!(ids, vec!["art"]);
        assert!(matches!(
            &load.errors[..],
            [
                ConfigError::InvalidValue { field, .. },
                ConfigError::InvalidSection { index: 1, id, .. },
            ] if field == "art.ctas" && id == "copy"
        ));
    }

    #[test]
    fn global_ctas_decoded_individually() {
        let load = load_lenient(
            r#"{"id":"s","version":1,"layout":"stacked","ctas":[
                {"id":"x","label":"X","kind":"nope","priority":"primary","action":{"type":"noop"}},
                {"id":"y","label":"Y","kind":"link","priority":"ghost","action":{"type":"noop"}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(load.screen.ctas.len(), 1);
        assert_eq!(load.screen.ctas[0].id, "y");
    }

    #[test]
    fn root_must_be_object_with_id() {
        assert!(matches!(load_lenient("[]"), Err(ConfigError::InvalidDocument(_))));
        assert!(matches!(
            load_lenient(r#"{"version":1}"#),
            Err(ConfigError::InvalidDocument(_))
        ));
        assert!(matches!(load_lenient("{"), Err(ConfigError::InvalidJson(_))));
    }
}

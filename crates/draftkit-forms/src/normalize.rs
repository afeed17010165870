//! Normalization of raw form documents.
//!
//! Every function here is total: malformed parts are dropped or replaced by
//! defaults, never reported.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::defaults::{
    DEFAULT_LOGIN_LAYOUT, default_field_options, default_form_document, default_register_layout,
};
use crate::model::{
    AutoComplete, FieldDefinition, FieldOption, FieldType, FormConfig, Identity, IdentityRole,
    LayoutSection, LayoutStyle, Mode,
};

// ============================================================================
// Fields
// ============================================================================

/// Normalize one field definition.
///
/// Returns `None` unless the input is an object with a non-blank `id`.
pub fn normalize_field(raw: &Value) -> Option<FieldDefinition> {
    let obj = raw.as_object()?;
    let id = str_of(obj, "id").trim();
    if id.is_empty() {
        return None;
    }

    let label = str_of(obj, "label").trim();
    let field_type = FieldType::parse(str_of(obj, "type")).unwrap_or_default();
    let enabled_modes = normalize_modes(obj.get("enabledModes"));
    let required_modes = normalize_modes(obj.get("requiredModes"))
        .into_iter()
        .filter(|mode| enabled_modes.contains(mode))
        .collect();

    Some(FieldDefinition {
        id: id.to_string(),
        label: (if label.is_empty() { id } else { label }).to_string(),
        field_type,
        placeholder: str_of(obj, "placeholder").to_string(),
        help_text: str_of(obj, "helpText").to_string(),
        enabled_modes,
        required_modes,
        default_value: str_of(obj, "defaultValue").to_string(),
        auto_complete: normalize_auto_complete(obj.get("autoComplete")),
        match_field: str_of(obj, "matchField").trim().to_string(),
        min_length: number_of(obj, "minLength"),
        max_length: number_of(obj, "maxLength"),
        min: number_of(obj, "min"),
        max: number_of(obj, "max"),
        step: number_of(obj, "step"),
        options: (field_type == FieldType::Select).then(|| normalize_options(obj, id)),
        pattern: str_of(obj, "pattern").to_string(),
        validation_message: str_of(obj, "validationMessage").to_string(),
    })
}

fn str_of<'a>(obj: &'a Map<String, Value>, key: &str) -> &'a str {
    obj.get(key).and_then(Value::as_str).unwrap_or("")
}

fn number_of(obj: &Map<String, Value>, key: &str) -> Option<serde_json::Number> {
    obj.get(key)
        .and_then(Value::as_number)
        .filter(|n| n.as_f64().is_some_and(f64::is_finite))
        .cloned()
}

/// Known modes in first-seen order, without duplicates.
fn normalize_modes(raw: Option<&Value>) -> Vec<Mode> {
    let mut modes = Vec::new();
    for mode in raw
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .filter_map(Mode::parse)
    {
        if !modes.contains(&mode) {
            modes.push(mode);
        }
    }
    modes
}

/// A plain string applies to both modes; an object is read per mode.
fn normalize_auto_complete(raw: Option<&Value>) -> AutoComplete {
    match raw {
        Some(Value::String(hint)) if !hint.is_empty() => AutoComplete {
            login: Some(hint.clone()),
            register: Some(hint.clone()),
        },
        Some(Value::Object(map)) => AutoComplete {
            login: map.get("login").and_then(Value::as_str).map(str::to_string),
            register: map
                .get("register")
                .and_then(Value::as_str)
                .map(str::to_string),
        },
        _ => AutoComplete::default(),
    }
}

fn normalize_options(obj: &Map<String, Value>, field_id: &str) -> Vec<FieldOption> {
    let preset;
    let source = match obj.get("options").and_then(Value::as_array) {
        Some(items) => items,
        None => {
            preset = default_field_options(field_id).unwrap_or(Value::Null);
            match preset.as_array() {
                Some(items) => items,
                None => return Vec::new(),
            }
        }
    };
    source
        .iter()
        .map(|option| {
            let text = |key: &str| {
                option
                    .get(key)
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .trim()
                    .to_string()
            };
            FieldOption::new(text("value"), text("label"))
        })
        .filter(|option| !option.label.is_empty())
        .collect()
}

// ============================================================================
// Layouts
// ============================================================================

/// Ids from `raw` that name known fields, deduplicated in order.
fn known_ids<'a>(
    ids: impl Iterator<Item = &'a str>,
    fields: &[FieldDefinition],
    context: &str,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for id in ids.map(str::trim) {
        if !fields.iter().any(|field| field.id == id) {
            log::debug!("dropping unknown field reference {id:?} from {context}");
            continue;
        }
        if seen.insert(id) {
            out.push(id.to_string());
        }
    }
    out
}

fn string_items(raw: Option<&Value>) -> impl Iterator<Item = &str> {
    raw.and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
}

/// Normalize the login layout against the field catalog.
///
/// An empty result falls back to the default layout, filtered against
/// the catalog.
pub fn normalize_login_layout(raw: Option<&Value>, fields: &[FieldDefinition]) -> Vec<String> {
    let layout = known_ids(string_items(raw), fields, "login layout");
    if layout.is_empty() {
        known_ids(DEFAULT_LOGIN_LAYOUT.into_iter(), fields, "default login layout")
    } else {
        layout
    }
}

fn normalize_section(raw: &Value, index: usize, fields: &[FieldDefinition]) -> Option<LayoutSection> {
    let obj = raw.as_object()?;
    let id = str_of(obj, "id").trim();
    let title = str_of(obj, "title").trim();
    Some(LayoutSection {
        id: if id.is_empty() {
            format!("section-{}", index + 1)
        } else {
            id.to_string()
        },
        title: if title.is_empty() {
            format!("섹션 {}", index + 1)
        } else {
            title.to_string()
        },
        description: str_of(obj, "description").to_string(),
        style: LayoutStyle::parse(str_of(obj, "style")).unwrap_or_default(),
        field_ids: known_ids(string_items(obj.get("fieldIds")), fields, "register section"),
    })
}

/// Normalize the register sections against the field catalog.
///
/// Non-object entries are dropped. When nothing usable remains, the default
/// sections are used with their field ids filtered against the catalog.
pub fn normalize_register_layout(
    raw: Option<&Value>,
    fields: &[FieldDefinition],
) -> Vec<LayoutSection> {
    let sections: Vec<LayoutSection> = raw
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .enumerate()
                .filter_map(|(index, section)| normalize_section(section, index, fields))
                .collect()
        })
        .unwrap_or_default();
    if !sections.is_empty() {
        return sections;
    }
    default_register_layout()
        .as_array()
        .map(|items| {
            items
                .iter()
                .enumerate()
                .filter_map(|(index, section)| normalize_section(section, index, fields))
                .collect()
        })
        .unwrap_or_default()
}

// ============================================================================
// Identity
// ============================================================================

/// Resolve every identity role against the field catalog.
///
/// Each role takes the given id if it names a field, else the role's
/// default id if that names a field, else `""`.
pub fn normalize_identity(raw: Option<&Value>, fields: &[FieldDefinition]) -> Identity {
    let resolves = |id: &str| !id.is_empty() && fields.iter().any(|field| field.id == id);
    let mut identity = Identity::default();
    for role in IdentityRole::ALL {
        let given = raw
            .and_then(|value| value.get(role.key()))
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or("");
        let resolved = if resolves(given) {
            given
        } else if resolves(role.default_field_id()) {
            if !given.is_empty() {
                log::debug!("identity {} {given:?} is unknown, using default", role.key());
            }
            role.default_field_id()
        } else {
            ""
        };
        identity.set(role, resolved);
    }
    identity
}

// ============================================================================
// Whole document
// ============================================================================

/// Normalize a whole form document.
///
/// Missing or empty field lists use the default catalog. Fields are unique
/// by id; the first occurrence wins.
pub fn normalize_form_config(raw: &Value) -> FormConfig {
    let empty = Value::Object(Map::new());
    let base = if raw.is_object() { raw } else { &empty };

    let defaults;
    let candidates = match base.get("fields").and_then(Value::as_array) {
        Some(items) if !items.is_empty() => items,
        _ => {
            defaults = default_form_document();
            match defaults.get("fields").and_then(Value::as_array) {
                Some(items) => items,
                None => return empty_config(),
            }
        }
    };

    let mut fields: Vec<FieldDefinition> = Vec::new();
    for field in candidates.iter().filter_map(normalize_field) {
        if fields.iter().any(|existing| existing.id == field.id) {
            log::debug!("dropping duplicate field id {:?}", field.id);
            continue;
        }
        fields.push(field);
    }

    FormConfig {
        login_layout: normalize_login_layout(base.get("loginLayout"), &fields),
        register_layout: normalize_register_layout(base.get("registerLayout"), &fields),
        identity: normalize_identity(base.get("identity"), &fields),
        fields,
    }
}

fn empty_config() -> FormConfig {
    FormConfig {
        fields: Vec::new(),
        login_layout: Vec::new(),
        register_layout: Vec::new(),
        identity: Identity::default(),
    }
}

impl FormConfig {
    /// This config run back through [`normalize_form_config`].
    pub fn normalized(&self) -> FormConfig {
        match serde_json::to_value(self) {
            Ok(value) => normalize_form_config(&value),
            Err(err) => {
                log::warn!("form config could not be serialized: {err}");
                self.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn catalog(ids: &[&str]) -> Vec<FieldDefinition> {
        ids.iter()
            .filter_map(|id| normalize_field(&json!({"id": id})))
            .collect()
    }

    // ------------------------------------------------------------------------
    // normalize_field
    // ------------------------------------------------------------------------

    #[test]
    fn test_field_requires_id() {
        assert!(normalize_field(&json!({"label": "x"})).is_none());
        assert!(normalize_field(&json!({"id": "   "})).is_none());
        assert!(normalize_field(&json!({"id": 5})).is_none());
        assert!(normalize_field(&json!("email")).is_none());
    }

    #[test]
    fn test_field_defaults() {
        let field = normalize_field(&json!({"id": " nickname ", "type": "checkbox"})).unwrap();
        assert_eq!(field.id, "nickname");
        assert_eq!(field.label, "nickname");
        assert_eq!(field.field_type, FieldType::Text);
        assert!(field.enabled_modes.is_empty());
        assert!(field.options.is_none());
        assert!(field.auto_complete.is_empty());
    }

    #[test]
    fn test_field_modes_are_clamped() {
        let field = normalize_field(&json!({
            "id": "code",
            "enabledModes": ["register", "admin", "register"],
            "requiredModes": ["login", "register"]
        }))
        .unwrap();
        assert_eq!(field.enabled_modes, vec![Mode::Register]);
        assert_eq!(field.required_modes, vec![Mode::Register]);
    }

    #[test]
    fn test_field_numeric_constraints() {
        let field = normalize_field(&json!({
            "id": "age",
            "type": "number",
            "min": 0,
            "max": "99",
            "step": 0.5
        }))
        .unwrap();
        assert_eq!(field.min.as_ref().and_then(|n| n.as_i64()), Some(0));
        assert!(field.max.is_none());
        assert_eq!(field.step.as_ref().and_then(|n| n.as_f64()), Some(0.5));
    }

    #[test]
    fn test_field_auto_complete_forms() {
        let both = normalize_field(&json!({"id": "a", "autoComplete": "email"})).unwrap();
        assert_eq!(both.auto_complete.get(Mode::Login), Some("email"));
        assert_eq!(both.auto_complete.get(Mode::Register), Some("email"));

        let split = normalize_field(&json!({
            "id": "b",
            "autoComplete": {"register": "new-password", "login": 3}
        }))
        .unwrap();
        assert_eq!(split.auto_complete.get(Mode::Login), None);
        assert_eq!(split.auto_complete.get(Mode::Register), Some("new-password"));
    }

    #[test]
    fn test_select_options() {
        let field = normalize_field(&json!({
            "id": "color",
            "type": "select",
            "options": [{"value": "r", "label": "빨강"}, {"value": "x", "label": " "}, "junk"]
        }))
        .unwrap();
        assert_eq!(field.options, Some(vec![FieldOption::new("r", "빨강")]));

        let preset = normalize_field(&json!({"id": "gender", "type": "select"})).unwrap();
        assert_eq!(preset.options.as_ref().map(Vec::len), Some(4));

        let none = normalize_field(&json!({"id": "other", "type": "select"})).unwrap();
        assert_eq!(none.options, Some(Vec::new()));
    }

    // ------------------------------------------------------------------------
    // Layouts and identity
    // ------------------------------------------------------------------------

    #[test]
    fn test_login_layout_filters_and_dedupes() {
        let fields = catalog(&["email", "password", "phone"]);
        let raw = json!(["phone", "ghost", "phone", "email"]);
        assert_eq!(
            normalize_login_layout(Some(&raw), &fields),
            vec!["phone", "email"]
        );
    }

    #[test]
    fn test_login_layout_ghost_falls_back() {
        let fields = catalog(&["email", "password"]);
        let raw = json!(["ghost"]);
        assert_eq!(
            normalize_login_layout(Some(&raw), &fields),
            vec!["email", "password"]
        );
        let only_email = catalog(&["email"]);
        assert_eq!(normalize_login_layout(None, &only_email), vec!["email"]);
    }

    #[test]
    fn test_register_layout_section_defaults() {
        let fields = catalog(&["email", "password"]);
        let raw = json!([
            {"fieldIds": ["email", "ghost"], "style": "neon"},
            null,
            {"id": "creds", "title": " 로그인 정보 ", "style": "card", "fieldIds": ["password"]}
        ]);
        let sections = normalize_register_layout(Some(&raw), &fields);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].id, "section-1");
        assert_eq!(sections[0].title, "섹션 1");
        assert_eq!(sections[0].style, LayoutStyle::Default);
        assert_eq!(sections[0].field_ids, vec!["email"]);
        assert_eq!(sections[1].id, "creds");
        assert_eq!(sections[1].title, "로그인 정보");
        assert_eq!(sections[1].style, LayoutStyle::Card);
    }

    #[test]
    fn test_register_layout_empty_falls_back() {
        let fields = catalog(&["email", "password", "name"]);
        let sections = normalize_register_layout(Some(&json!([])), &fields);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].id, "account-info");
        assert_eq!(sections[0].field_ids, vec!["email", "password"]);
        assert_eq!(sections[1].field_ids, vec!["name"]);
    }

    #[test]
    fn test_identity_resolution() {
        let fields = catalog(&["email", "login-id", "password"]);
        let raw = json!({"emailFieldId": "login-id", "passwordFieldId": "ghost"});
        let identity = normalize_identity(Some(&raw), &fields);
        assert_eq!(identity.email_field_id, "login-id");
        assert_eq!(identity.password_field_id, "password");
        assert_eq!(identity.confirm_email_field_id, "");
        assert_eq!(identity.display_name_field_id, "");
    }

    #[test]
    fn test_identity_non_object_uses_resolving_defaults() {
        let fields = catalog(&["email", "password"]);
        let identity = normalize_identity(Some(&json!("broken")), &fields);
        assert_eq!(identity.email_field_id, "email");
        assert_eq!(identity.confirm_password_field_id, "");
    }

    // ------------------------------------------------------------------------
    // Whole document
    // ------------------------------------------------------------------------

    #[test]
    fn test_empty_document_is_default() {
        let config = normalize_form_config(&json!(null));
        assert_eq!(config.fields.len(), 8);
        assert_eq!(config.login_layout, vec!["email", "password"]);
    }

    #[test]
    fn test_duplicate_fields_first_wins() {
        let config = normalize_form_config(&json!({
            "fields": [
                {"id": "email", "label": "첫 번째", "enabledModes": ["login", "register"]},
                {"id": "email", "label": "두 번째"},
                {"id": "password", "type": "password"}
            ]
        }));
        assert_eq!(config.fields.len(), 2);
        assert_eq!(config.field("email").unwrap().label, "첫 번째");
    }

    #[test]
    fn test_normalized_is_stable() {
        let config = normalize_form_config(&json!({
            "fields": [{"id": "email"}, {"id": "password"}, {"id": "x", "type": "select"}],
            "registerLayout": [{"fieldIds": ["x", "email"]}]
        }));
        assert_eq!(config.normalized(), config);
    }

    // ------------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------------

    fn arb_field() -> impl Strategy<Value = Value> {
        let modes = prop::collection::vec(
            prop_oneof![Just("login"), Just("register"), Just("admin")],
            0..4,
        );
        (
            prop_oneof![Just(json!("email")), Just(json!(" id ")), Just(json!("")), Just(json!(1))],
            prop_oneof![Just("text"), Just("select"), Just("number"), Just("bogus")],
            modes.clone(),
            modes,
            prop::option::of(-1000i64..1000),
            prop_oneof![
                Just(Value::Null),
                Just(json!("tel")),
                Just(json!({"login": "a"})),
                Just(json!({"register": 7}))
            ],
            prop::option::of(prop::collection::vec(("[a-z ]{0,4}", "[a-z ]{0,4}"), 0..3)),
        )
            .prop_map(|(id, kind, enabled, required, min, auto, options)| {
                let mut value = json!({
                    "id": id,
                    "label": "  라벨 ",
                    "type": kind,
                    "enabledModes": enabled,
                    "requiredModes": required,
                    "autoComplete": auto,
                });
                if let Some(min) = min {
                    value["min"] = json!(min);
                }
                if let Some(options) = options {
                    value["options"] = options
                        .into_iter()
                        .map(|(v, l)| json!({"value": v, "label": l}))
                        .collect();
                }
                value
            })
    }

    proptest! {
        #[test]
        fn test_normalize_field_is_idempotent(raw in arb_field()) {
            if let Some(once) = normalize_field(&raw) {
                let value = serde_json::to_value(&once).unwrap();
                let twice = normalize_field(&value).unwrap();
                prop_assert_eq!(twice, once);
            }
        }
    }
}

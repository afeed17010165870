//! Form schema types.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

// ============================================================================
// Enumerations
// ============================================================================

/// Which screen a field appears on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Login,
    Register,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Login, Mode::Register];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Login => "login",
            Mode::Register => "register",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == value)
    }

    /// Screen label shown to editors.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Login => "로그인",
            Mode::Register => "회원가입",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input control type of a field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Tel,
    Textarea,
    Select,
}

impl FieldType {
    pub const ALL: [FieldType; 7] = [
        FieldType::Text,
        FieldType::Email,
        FieldType::Password,
        FieldType::Number,
        FieldType::Tel,
        FieldType::Textarea,
        FieldType::Select,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Password => "password",
            FieldType::Number => "number",
            FieldType::Tel => "tel",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldType::Text => "단일행 텍스트",
            FieldType::Email => "이메일",
            FieldType::Password => "비밀번호",
            FieldType::Number => "숫자",
            FieldType::Tel => "전화번호",
            FieldType::Textarea => "여러 줄 텍스트",
            FieldType::Select => "선택 목록",
        }
    }
}

/// Visual style of a register section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStyle {
    #[default]
    Default,
    Card,
}

impl LayoutStyle {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "default" => Some(LayoutStyle::Default),
            "card" => Some(LayoutStyle::Card),
            _ => None,
        }
    }
}

/// Direction for reordering operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Which mode list of a field a toggle applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeList {
    Enabled,
    Required,
}

// ============================================================================
// Field definitions
// ============================================================================

/// Browser autocomplete hints, per mode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoComplete {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub register: Option<String>,
}

impl AutoComplete {
    pub fn get(&self, mode: Mode) -> Option<&str> {
        match mode {
            Mode::Login => self.login.as_deref(),
            Mode::Register => self.register.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.login.is_none() && self.register.is_none()
    }
}

/// One choice of a select field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A single form field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldDefinition {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub placeholder: String,
    pub help_text: String,
    pub enabled_modes: Vec<Mode>,
    /// Always a subset of `enabled_modes` once normalized.
    pub required_modes: Vec<Mode>,
    pub default_value: String,
    pub auto_complete: AutoComplete,
    /// Id of another field whose value this one must repeat.
    pub match_field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<Number>,
    /// Only present for select fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
    pub pattern: String,
    pub validation_message: String,
}

impl FieldDefinition {
    pub fn is_enabled(&self, mode: Mode) -> bool {
        self.enabled_modes.contains(&mode)
    }

    pub fn is_required(&self, mode: Mode) -> bool {
        self.is_enabled(mode) && self.required_modes.contains(&mode)
    }

    /// Label, or the id when the label is blank.
    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            &self.id
        } else {
            &self.label
        }
    }
}

// ============================================================================
// Layout and identity
// ============================================================================

/// A titled group of fields on the register screen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutSection {
    pub id: String,
    pub title: String,
    pub description: String,
    pub style: LayoutStyle,
    pub field_ids: Vec<String>,
}

/// Roles a field can play for authentication.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdentityRole {
    Email,
    ConfirmEmail,
    Password,
    ConfirmPassword,
    DisplayName,
}

impl IdentityRole {
    pub const ALL: [IdentityRole; 5] = [
        IdentityRole::Email,
        IdentityRole::ConfirmEmail,
        IdentityRole::Password,
        IdentityRole::ConfirmPassword,
        IdentityRole::DisplayName,
    ];

    /// JSON key of the role inside the identity map.
    pub fn key(&self) -> &'static str {
        match self {
            IdentityRole::Email => "emailFieldId",
            IdentityRole::ConfirmEmail => "confirmEmailFieldId",
            IdentityRole::Password => "passwordFieldId",
            IdentityRole::ConfirmPassword => "confirmPasswordFieldId",
            IdentityRole::DisplayName => "displayNameFieldId",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.key() == key)
    }

    /// Field id bound to the role in the default config.
    pub fn default_field_id(&self) -> &'static str {
        match self {
            IdentityRole::Email => "email",
            IdentityRole::ConfirmEmail => "confirmEmail",
            IdentityRole::Password => "password",
            IdentityRole::ConfirmPassword => "confirmPassword",
            IdentityRole::DisplayName => "name",
        }
    }
}

/// Field ids bound to each identity role. `""` means unbound.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Identity {
    pub email_field_id: String,
    pub confirm_email_field_id: String,
    pub password_field_id: String,
    pub confirm_password_field_id: String,
    pub display_name_field_id: String,
}

impl Identity {
    pub fn get(&self, role: IdentityRole) -> &str {
        match role {
            IdentityRole::Email => &self.email_field_id,
            IdentityRole::ConfirmEmail => &self.confirm_email_field_id,
            IdentityRole::Password => &self.password_field_id,
            IdentityRole::ConfirmPassword => &self.confirm_password_field_id,
            IdentityRole::DisplayName => &self.display_name_field_id,
        }
    }

    pub fn set(&mut self, role: IdentityRole, field_id: impl Into<String>) {
        let slot = match role {
            IdentityRole::Email => &mut self.email_field_id,
            IdentityRole::ConfirmEmail => &mut self.confirm_email_field_id,
            IdentityRole::Password => &mut self.password_field_id,
            IdentityRole::ConfirmPassword => &mut self.confirm_password_field_id,
            IdentityRole::DisplayName => &mut self.display_name_field_id,
        };
        *slot = field_id.into();
    }
}

// ============================================================================
// Form config
// ============================================================================

/// The full signup/login form document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    pub fields: Vec<FieldDefinition>,
    pub login_layout: Vec<String>,
    pub register_layout: Vec<LayoutSection>,
    pub identity: Identity,
}

impl FormConfig {
    pub fn field(&self, id: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.id == id)
    }

    pub fn field_mut(&mut self, id: &str) -> Option<&mut FieldDefinition> {
        self.fields.iter_mut().find(|field| field.id == id)
    }

    pub fn contains_field(&self, id: &str) -> bool {
        !id.is_empty() && self.field(id).is_some()
    }

    pub fn section(&self, id: &str) -> Option<&LayoutSection> {
        self.register_layout.iter().find(|section| section.id == id)
    }

    /// The field bound to an identity role, if it resolves.
    pub fn identity_field(&self, role: IdentityRole) -> Option<&FieldDefinition> {
        let id = self.identity.get(role);
        if id.is_empty() { None } else { self.field(id) }
    }

    /// Every field id placed in any register section, in order.
    pub fn register_field_ids(&self) -> impl Iterator<Item = &str> {
        self.register_layout
            .iter()
            .flat_map(|section| section.field_ids.iter().map(String::as_str))
    }

    /// Fields enabled for `mode`, in layout order for that mode.
    pub fn fields_for_mode(&self, mode: Mode) -> Vec<&FieldDefinition> {
        let ids: Vec<&str> = match mode {
            Mode::Login => self.login_layout.iter().map(String::as_str).collect(),
            Mode::Register => self.register_field_ids().collect(),
        };
        ids.into_iter()
            .filter_map(|id| self.field(id))
            .filter(|field| field.is_enabled(mode))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mode_and_type_parsing() {
        assert_eq!(Mode::parse("login"), Some(Mode::Login));
        assert_eq!(Mode::parse("admin"), None);
        assert_eq!(FieldType::parse("textarea"), Some(FieldType::Textarea));
        assert_eq!(FieldType::parse("checkbox"), None);
        assert_eq!(LayoutStyle::parse("card"), Some(LayoutStyle::Card));
        assert_eq!(LayoutStyle::parse("fancy"), None);
    }

    #[test]
    fn test_identity_role_keys() {
        for role in IdentityRole::ALL {
            assert_eq!(IdentityRole::from_key(role.key()), Some(role));
        }
        assert_eq!(IdentityRole::from_key("phoneFieldId"), None);
    }

    #[test]
    fn test_identity_get_set() {
        let mut identity = Identity::default();
        identity.set(IdentityRole::DisplayName, "nickname");
        assert_eq!(identity.get(IdentityRole::DisplayName), "nickname");
        assert_eq!(identity.get(IdentityRole::Email), "");
    }

    #[test]
    fn test_field_serialization_shape() {
        let field = FieldDefinition {
            id: "age".into(),
            label: "나이".into(),
            field_type: FieldType::Number,
            enabled_modes: vec![Mode::Register],
            min: Some(Number::from(0)),
            ..FieldDefinition::default()
        };
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(value["type"], json!("number"));
        assert_eq!(value["enabledModes"], json!(["register"]));
        assert_eq!(value["min"], json!(0));
        assert!(value.get("max").is_none());
        assert!(value.get("options").is_none());
        assert_eq!(value["autoComplete"], json!({}));
    }

    #[test]
    fn test_required_implies_enabled() {
        let field = FieldDefinition {
            required_modes: vec![Mode::Login],
            ..FieldDefinition::default()
        };
        assert!(!field.is_required(Mode::Login));
    }

    #[test]
    fn test_display_label_falls_back_to_id() {
        let field = FieldDefinition {
            id: "phone".into(),
            label: "  ".into(),
            ..FieldDefinition::default()
        };
        assert_eq!(field.display_label(), "phone");
    }
}

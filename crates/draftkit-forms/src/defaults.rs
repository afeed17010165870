//! The built-in form document.
//!
//! Everything that falls back to "the default" reads it from here: the
//! field catalog, both layouts, the identity map and select-field presets.

use chrono::Datelike;
use serde_json::{Value, json};

use crate::model::FormConfig;
use crate::normalize::normalize_form_config;

/// Login layout used when a config has none.
pub const DEFAULT_LOGIN_LAYOUT: [&str; 2] = ["email", "password"];

/// Preset options for select fields that carry none of their own.
pub fn default_field_options(field_id: &str) -> Option<Value> {
    match field_id {
        "email" => Some(json!([{"value": "", "label": "선택 안 함"}])),
        "gender" => Some(json!([
            {"value": "", "label": "선택 안 함"},
            {"value": "female", "label": "여성"},
            {"value": "male", "label": "남성"},
            {"value": "other", "label": "기타"}
        ])),
        _ => None,
    }
}

/// The default form as raw JSON.
///
/// `birthYear.max` is the current calendar year.
pub fn default_form_document() -> Value {
    let current_year = chrono::Local::now().year();
    json!({
        "fields": [
            {
                "id": "email",
                "label": "이메일",
                "type": "email",
                "placeholder": "example@email.com",
                "helpText": "비밀번호 재발급 시 사용할 이메일을 입력해주세요.",
                "enabledModes": ["login", "register"],
                "requiredModes": ["login", "register"],
                "autoComplete": {"login": "email", "register": "email"}
            },
            {
                "id": "confirmEmail",
                "label": "이메일 재입력",
                "type": "email",
                "placeholder": "이메일을 한 번 더 입력하세요",
                "enabledModes": ["register"],
                "requiredModes": ["register"],
                "matchField": "email",
                "autoComplete": {"register": "email"}
            },
            {
                "id": "password",
                "label": "비밀번호",
                "type": "password",
                "placeholder": "비밀번호",
                "enabledModes": ["login", "register"],
                "requiredModes": ["login", "register"],
                "autoComplete": {"login": "current-password", "register": "new-password"},
                "minLength": 6
            },
            {
                "id": "confirmPassword",
                "label": "비밀번호 재입력",
                "type": "password",
                "placeholder": "비밀번호를 다시 입력하세요",
                "enabledModes": ["register"],
                "requiredModes": ["register"],
                "matchField": "password",
                "autoComplete": {"register": "new-password"}
            },
            {
                "id": "name",
                "label": "이름",
                "type": "text",
                "placeholder": "선택사항",
                "enabledModes": ["register"],
                "requiredModes": [],
                "autoComplete": {"register": "name"}
            },
            {
                "id": "gender",
                "label": "성별",
                "type": "select",
                "placeholder": "선택 안 함",
                "options": default_field_options("gender"),
                "enabledModes": ["register"],
                "requiredModes": []
            },
            {
                "id": "birthYear",
                "label": "출생연도",
                "type": "number",
                "placeholder": "예: 1990",
                "min": 1900,
                "max": current_year,
                "enabledModes": ["register"],
                "requiredModes": []
            },
            {
                "id": "phone",
                "label": "전화번호",
                "type": "tel",
                "placeholder": "선택사항",
                "enabledModes": ["register"],
                "requiredModes": [],
                "autoComplete": {"register": "tel"}
            }
        ],
        "loginLayout": DEFAULT_LOGIN_LAYOUT,
        "registerLayout": default_register_layout(),
        "identity": {
            "emailFieldId": "email",
            "confirmEmailFieldId": "confirmEmail",
            "passwordFieldId": "password",
            "confirmPasswordFieldId": "confirmPassword",
            "displayNameFieldId": "name"
        }
    })
}

/// Register sections used when a config has none.
pub fn default_register_layout() -> Value {
    json!([
        {
            "id": "account-info",
            "title": "계정 정보",
            "description": "이메일과 비밀번호를 다시 한 번 입력해 일치 여부를 확인해주세요.",
            "style": "default",
            "fieldIds": ["email", "confirmEmail", "password", "confirmPassword"]
        },
        {
            "id": "optional-info",
            "title": "선택 입력 항목",
            "description": "추가 정보를 입력하면 맞춤형 서비스를 제공하는 데 도움이 됩니다.",
            "style": "card",
            "fieldIds": ["name", "gender", "birthYear", "phone"]
        }
    ])
}

/// The default form, normalized.
pub fn create_default_form_config() -> FormConfig {
    normalize_form_config(&default_form_document())
}

impl Default for FormConfig {
    fn default() -> Self {
        create_default_form_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldType, IdentityRole, LayoutStyle, Mode};

    #[test]
    fn test_default_catalog() {
        let config = create_default_form_config();
        let ids: Vec<_> = config.fields.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "email",
                "confirmEmail",
                "password",
                "confirmPassword",
                "name",
                "gender",
                "birthYear",
                "phone"
            ]
        );
        assert_eq!(config.login_layout, DEFAULT_LOGIN_LAYOUT);
        assert_eq!(config.register_layout.len(), 2);
        assert_eq!(config.register_layout[1].style, LayoutStyle::Card);
    }

    #[test]
    fn test_default_field_details() {
        let config = FormConfig::default();
        let password = config.field("password").unwrap();
        assert_eq!(password.min_length.as_ref().and_then(|n| n.as_u64()), Some(6));
        assert!(password.is_required(Mode::Login));

        let gender = config.field("gender").unwrap();
        assert_eq!(gender.field_type, FieldType::Select);
        assert_eq!(gender.options.as_ref().map(Vec::len), Some(4));

        let birth = config.field("birthYear").unwrap();
        let max = birth.max.as_ref().and_then(|n| n.as_i64()).unwrap();
        assert_eq!(max, i64::from(chrono::Local::now().year()));
    }

    #[test]
    fn test_default_identity() {
        let config = create_default_form_config();
        for role in IdentityRole::ALL {
            assert_eq!(config.identity.get(role), role.default_field_id());
        }
    }

    #[test]
    fn test_email_preset_options() {
        assert!(default_field_options("email").is_some());
        assert!(default_field_options("phone").is_none());
    }
}

//! Checks on values submitted through a configured form.

use std::collections::BTreeMap;

use regex::Regex;
use thiserror::Error;

use crate::model::{FieldDefinition, FieldType, FormConfig, Mode};

/// The first problem found in submitted values.
///
/// The `Display` text is the message shown to the person filling the form.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FieldValueIssue {
    #[error("{label} 항목을 입력해주세요.")]
    Required { field_id: String, label: String },

    #[error("{label} 값이 {target_label} 값과 일치하지 않습니다.")]
    Mismatch {
        field_id: String,
        label: String,
        target_label: String,
    },

    #[error("{label} 항목은 {min}자 이상 입력해주세요.")]
    TooShort {
        field_id: String,
        label: String,
        min: f64,
    },

    #[error("{label} 항목은 {max}자 이하로 입력해주세요.")]
    TooLong {
        field_id: String,
        label: String,
        max: f64,
    },

    #[error("{label} 항목에는 숫자를 입력해주세요.")]
    NotANumber { field_id: String, label: String },

    #[error("{label} 항목은 {min} 이상이어야 합니다.")]
    BelowMinimum {
        field_id: String,
        label: String,
        min: f64,
    },

    #[error("{label} 항목은 {max} 이하여야 합니다.")]
    AboveMaximum {
        field_id: String,
        label: String,
        max: f64,
    },

    #[error("{message}")]
    PatternMismatch {
        field_id: String,
        label: String,
        message: String,
    },
}

impl FieldValueIssue {
    /// Id of the field the issue is about.
    pub fn field_id(&self) -> &str {
        match self {
            Self::Required { field_id, .. }
            | Self::Mismatch { field_id, .. }
            | Self::TooShort { field_id, .. }
            | Self::TooLong { field_id, .. }
            | Self::NotANumber { field_id, .. }
            | Self::BelowMinimum { field_id, .. }
            | Self::AboveMaximum { field_id, .. }
            | Self::PatternMismatch { field_id, .. } => field_id,
        }
    }
}

/// Check submitted values for `mode` against the config.
///
/// Only fields enabled for `mode` are checked. Passes run in order, and the
/// first issue found is returned:
/// 1. required fields must be non-blank after trimming
/// 2. a field with `matchField` must equal its target after trimming
/// 3. length, numeric range and pattern constraints on non-blank values
pub fn check_values(
    config: &FormConfig,
    mode: Mode,
    values: &BTreeMap<String, String>,
) -> Result<(), FieldValueIssue> {
    let value_of = |id: &str| values.get(id).map(String::as_str).unwrap_or("");
    let enabled: Vec<&FieldDefinition> = config
        .fields
        .iter()
        .filter(|field| field.is_enabled(mode))
        .collect();

    for field in &enabled {
        if field.is_required(mode) && value_of(&field.id).trim().is_empty() {
            return Err(FieldValueIssue::Required {
                field_id: field.id.clone(),
                label: field.display_label().to_string(),
            });
        }
    }

    for field in &enabled {
        if field.match_field.is_empty() {
            continue;
        }
        let Some(target) = config.field(&field.match_field) else {
            continue;
        };
        if value_of(&field.id).trim() != value_of(&target.id).trim() {
            return Err(FieldValueIssue::Mismatch {
                field_id: field.id.clone(),
                label: field.display_label().to_string(),
                target_label: target.display_label().to_string(),
            });
        }
    }

    for field in &enabled {
        let value = value_of(&field.id);
        if value.trim().is_empty() {
            continue;
        }
        check_length(field, value)?;
        check_number(field, value)?;
        check_pattern(field, value)?;
    }
    Ok(())
}

fn limit(number: Option<&serde_json::Number>) -> Option<f64> {
    number.and_then(serde_json::Number::as_f64)
}

fn check_length(field: &FieldDefinition, value: &str) -> Result<(), FieldValueIssue> {
    let length = value.chars().count() as f64;
    if let Some(min) = limit(field.min_length.as_ref())
        && length < min
    {
        return Err(FieldValueIssue::TooShort {
            field_id: field.id.clone(),
            label: field.display_label().to_string(),
            min,
        });
    }
    if let Some(max) = limit(field.max_length.as_ref())
        && length > max
    {
        return Err(FieldValueIssue::TooLong {
            field_id: field.id.clone(),
            label: field.display_label().to_string(),
            max,
        });
    }
    Ok(())
}

fn check_number(field: &FieldDefinition, value: &str) -> Result<(), FieldValueIssue> {
    if field.field_type != FieldType::Number {
        return Ok(());
    }
    let label = || field.display_label().to_string();
    let number = match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => {
            return Err(FieldValueIssue::NotANumber {
                field_id: field.id.clone(),
                label: label(),
            });
        }
    };
    if let Some(min) = limit(field.min.as_ref())
        && number < min
    {
        return Err(FieldValueIssue::BelowMinimum {
            field_id: field.id.clone(),
            label: label(),
            min,
        });
    }
    if let Some(max) = limit(field.max.as_ref())
        && number > max
    {
        return Err(FieldValueIssue::AboveMaximum {
            field_id: field.id.clone(),
            label: label(),
            max,
        });
    }
    Ok(())
}

fn check_pattern(field: &FieldDefinition, value: &str) -> Result<(), FieldValueIssue> {
    if field.pattern.is_empty() {
        return Ok(());
    }
    let regex = match Regex::new(&format!("^(?:{})$", field.pattern)) {
        Ok(regex) => regex,
        Err(err) => {
            log::warn!("skipping invalid pattern on field {:?}: {err}", field.id);
            return Ok(());
        }
    };
    if regex.is_match(value) {
        return Ok(());
    }
    let message = if field.validation_message.trim().is_empty() {
        format!("{} 형식이 올바르지 않습니다.", field.display_label())
    } else {
        field.validation_message.trim().to_string()
    };
    Err(FieldValueIssue::PatternMismatch {
        field_id: field.id.clone(),
        label: field.display_label().to_string(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::create_default_form_config;
    use crate::normalize::normalize_form_config;
    use serde_json::json;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn register_ok() -> BTreeMap<String, String> {
        values(&[
            ("email", "a@b.com"),
            ("confirmEmail", " a@b.com "),
            ("password", "secret1"),
            ("confirmPassword", "secret1"),
        ])
    }

    #[test]
    fn test_valid_register_submission() {
        let config = create_default_form_config();
        assert_eq!(check_values(&config, Mode::Register, &register_ok()), Ok(()));
    }

    #[test]
    fn test_required_field() {
        let config = create_default_form_config();
        let err = check_values(&config, Mode::Login, &values(&[("email", "  ")])).unwrap_err();
        assert_eq!(err.field_id(), "email");
        assert_eq!(err.to_string(), "이메일 항목을 입력해주세요.");
    }

    #[test]
    fn test_login_ignores_register_only_fields() {
        let config = create_default_form_config();
        let submitted = values(&[("email", "a@b.com"), ("password", "secret1")]);
        assert!(check_values(&config, Mode::Login, &submitted).is_ok());
    }

    #[test]
    fn test_match_field_is_case_sensitive() {
        let config = create_default_form_config();
        let mut submitted = register_ok();
        submitted.insert("confirmEmail".into(), "A@b.com".into());
        let err = check_values(&config, Mode::Register, &submitted).unwrap_err();
        assert!(matches!(err, FieldValueIssue::Mismatch { .. }));
        assert_eq!(err.to_string(), "이메일 재입력 값이 이메일 값과 일치하지 않습니다.");
    }

    #[test]
    fn test_length_constraint() {
        let config = create_default_form_config();
        let mut submitted = register_ok();
        submitted.insert("password".into(), "12345".into());
        submitted.insert("confirmPassword".into(), "12345".into());
        let err = check_values(&config, Mode::Register, &submitted).unwrap_err();
        assert_eq!(err.to_string(), "비밀번호 항목은 6자 이상 입력해주세요.");
    }

    #[test]
    fn test_length_counts_characters() {
        let config = create_default_form_config();
        let mut submitted = register_ok();
        submitted.insert("password".into(), "비밀번호여섯".into());
        submitted.insert("confirmPassword".into(), "비밀번호여섯".into());
        assert!(check_values(&config, Mode::Register, &submitted).is_ok());
    }

    #[test]
    fn test_number_range() {
        let config = create_default_form_config();
        let mut submitted = register_ok();
        submitted.insert("birthYear".into(), "1850".into());
        let err = check_values(&config, Mode::Register, &submitted).unwrap_err();
        assert!(matches!(err, FieldValueIssue::BelowMinimum { min, .. } if min == 1900.0));

        submitted.insert("birthYear".into(), "nineteen".into());
        let err = check_values(&config, Mode::Register, &submitted).unwrap_err();
        assert!(matches!(err, FieldValueIssue::NotANumber { .. }));

        submitted.insert("birthYear".into(), "1990".into());
        assert!(check_values(&config, Mode::Register, &submitted).is_ok());
    }

    #[test]
    fn test_pattern_whole_value() {
        let config = normalize_form_config(&json!({
            "fields": [
                {"id": "email", "enabledModes": ["login", "register"]},
                {"id": "password", "enabledModes": ["login", "register"]},
                {
                    "id": "zip",
                    "label": "우편번호",
                    "enabledModes": ["register"],
                    "pattern": "[0-9]{5}",
                    "validationMessage": "우편번호 5자리를 입력해주세요."
                }
            ]
        }));
        let ok = values(&[("zip", "12345")]);
        assert!(check_values(&config, Mode::Register, &ok).is_ok());

        let partial = values(&[("zip", "123456")]);
        let err = check_values(&config, Mode::Register, &partial).unwrap_err();
        assert_eq!(err.to_string(), "우편번호 5자리를 입력해주세요.");
    }

    #[test]
    fn test_invalid_pattern_is_skipped() {
        let config = normalize_form_config(&json!({
            "fields": [{"id": "code", "enabledModes": ["register"], "pattern": "([a-z"}]
        }));
        let submitted = values(&[("code", "anything")]);
        assert!(check_values(&config, Mode::Register, &submitted).is_ok());
    }
}

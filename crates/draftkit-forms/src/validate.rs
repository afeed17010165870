//! Save-time validation of a form config.
//!
//! Normalization keeps a config consistent; validation decides whether it
//! is usable for authentication. Rules are checked in a fixed order and the
//! first broken rule is reported.

use serde::Serialize;
use thiserror::Error;

use crate::model::{FieldDefinition, FormConfig, IdentityRole, Mode};

// ============================================================================
// Types
// ============================================================================

/// The first rule a form config breaks.
///
/// The `Display` text is the message shown to editors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfigViolation {
    #[error("이메일 항목이 올바르게 설정되지 않았습니다.")]
    EmailFieldUnresolved,

    #[error("비밀번호 항목이 올바르게 설정되지 않았습니다.")]
    PasswordFieldUnresolved,

    #[error("이메일과 비밀번호 항목은 로그인과 회원가입에서 모두 사용하도록 설정해야 합니다.")]
    CredentialsNotInBothModes,

    #[error("이메일 재확인 항목이 삭제되었거나 비활성화되었습니다. 다시 선택해주세요.")]
    ConfirmEmailDangling,

    #[error("비밀번호 재확인 항목이 삭제되었거나 비활성화되었습니다. 다시 선택해주세요.")]
    ConfirmPasswordDangling,

    #[error("로그인 화면에는 이메일과 비밀번호 항목이 반드시 포함되어야 합니다.")]
    LoginLayoutMissingCredentials,

    #[error("회원가입 화면에는 이메일과 비밀번호 항목이 반드시 포함되어야 합니다.")]
    RegisterLayoutMissingCredentials,
}

impl ConfigViolation {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmailFieldUnresolved => "email-field-unresolved",
            Self::PasswordFieldUnresolved => "password-field-unresolved",
            Self::CredentialsNotInBothModes => "credentials-not-in-both-modes",
            Self::ConfirmEmailDangling => "confirm-email-dangling",
            Self::ConfirmPasswordDangling => "confirm-password-dangling",
            Self::LoginLayoutMissingCredentials => "login-layout-missing-credentials",
            Self::RegisterLayoutMissingCredentials => "register-layout-missing-credentials",
        }
    }
}

// ============================================================================
// Validation functions
// ============================================================================

/// Check a config against the save-time rules.
///
/// Checks, in order:
/// - the email and password identity roles resolve to fields
/// - both fields are enabled for login and register
/// - bound confirmation roles resolve to fields enabled for register
/// - the login layout holds both fields
/// - some register section holds each of them
pub fn validate(config: &FormConfig) -> Option<ConfigViolation> {
    let Some(email) = config.identity_field(IdentityRole::Email) else {
        return Some(ConfigViolation::EmailFieldUnresolved);
    };
    let Some(password) = config.identity_field(IdentityRole::Password) else {
        return Some(ConfigViolation::PasswordFieldUnresolved);
    };
    if !in_both_modes(email) || !in_both_modes(password) {
        return Some(ConfigViolation::CredentialsNotInBothModes);
    }
    if confirmation_dangles(config, IdentityRole::ConfirmEmail) {
        return Some(ConfigViolation::ConfirmEmailDangling);
    }
    if confirmation_dangles(config, IdentityRole::ConfirmPassword) {
        return Some(ConfigViolation::ConfirmPasswordDangling);
    }
    if !config.login_layout.contains(&email.id) || !config.login_layout.contains(&password.id) {
        return Some(ConfigViolation::LoginLayoutMissingCredentials);
    }
    let in_register = |id: &str| config.register_field_ids().any(|placed| placed == id);
    if !in_register(&email.id) || !in_register(&password.id) {
        return Some(ConfigViolation::RegisterLayoutMissingCredentials);
    }
    None
}

/// The violation message, or `""` when the config is valid.
pub fn validation_message(config: &FormConfig) -> String {
    validate(config)
        .map(|violation| violation.to_string())
        .unwrap_or_default()
}

/// Quick check that a config may be saved.
pub fn is_valid(config: &FormConfig) -> bool {
    validate(config).is_none()
}

fn in_both_modes(field: &FieldDefinition) -> bool {
    Mode::ALL.iter().all(|mode| field.is_enabled(*mode))
}

fn confirmation_dangles(config: &FormConfig, role: IdentityRole) -> bool {
    let id = config.identity.get(role);
    if id.is_empty() {
        return false;
    }
    !config
        .field(id)
        .is_some_and(|field| field.is_enabled(Mode::Register))
}

//! Draftkit Forms: configurable login and registration forms.
//!
//! A form config is a catalog of field definitions, a login layout, a list
//! of register sections and an identity map. Every config that enters the
//! system passes through [`normalize_form_config`], which repairs it into a
//! consistent shape. [`validate`] then decides whether it can be saved.
//!
//! # Modules
//!
//! - [`model`]: Field, layout and identity types
//! - [`defaults`]: The built-in form document
//! - [`normalize`]: Repairing untrusted form JSON
//! - [`validate`]: Save-time rules
//! - [`edit`]: Editor operations on a config
//! - [`values`]: Checks on submitted form values

#![doc = include_str!("../README.md")]

pub mod defaults;
pub mod edit;
pub mod model;
pub mod normalize;
pub mod validate;
pub mod values;

pub use defaults::{
    DEFAULT_LOGIN_LAYOUT, create_default_form_config, default_field_options, default_form_document,
};
pub use edit::{NEW_FIELD_LABEL, NEW_SECTION_TITLE, format_options_text, parse_options_text};
pub use model::{
    AutoComplete, FieldDefinition, FieldOption, FieldType, FormConfig, Identity, IdentityRole,
    LayoutSection, LayoutStyle, Mode, ModeList, MoveDirection,
};
pub use normalize::{
    normalize_field, normalize_form_config, normalize_identity, normalize_login_layout,
    normalize_register_layout,
};
pub use validate::{ConfigViolation, is_valid, validate, validation_message};
pub use values::{FieldValueIssue, check_values};

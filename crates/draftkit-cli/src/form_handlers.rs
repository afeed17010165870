//! Handler functions for `draftkit form` commands.

use std::collections::BTreeMap;

use draftkit_core::{Error, Result};
use draftkit_forms::{FormConfig, Mode, check_values, normalize_form_config, validate};
use serde_json::Value;

/// Normalize a stored form document and reject it if it cannot be saved.
pub fn validate_document(raw: &Value) -> Result<FormConfig> {
    let config = normalize_form_config(raw);
    match validate(&config) {
        Some(violation) => Err(Error::invalid_data(format!(
            "{}: {violation}",
            violation.code()
        ))),
        None => Ok(config),
    }
}

/// Check submitted values against a stored form document.
///
/// `values` must be a JSON object. Numbers and booleans count as their text
/// and other non-string values as blank.
pub fn check(raw_config: &Value, mode: Mode, values: &Value) -> Result<()> {
    let object = values
        .as_object()
        .ok_or_else(|| Error::invalid_data("submitted values must be a JSON object"))?;
    let values: BTreeMap<String, String> = object
        .iter()
        .map(|(id, value)| (id.clone(), value_text(value)))
        .collect();

    let config = normalize_form_config(raw_config);
    check_values(&config, mode, &values)
        .map_err(|issue| Error::invalid_data(format!("{}: {issue}", issue.field_id())))?;
    tracing::info!("{} values passed {} checks", values.len(), mode.label());
    Ok(())
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

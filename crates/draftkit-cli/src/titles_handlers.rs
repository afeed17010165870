//! Handler functions for `draftkit titles` commands.

use std::path::Path;

use draftkit_core::{Error, Result};
use draftkit_titles::{SectionTitleResolver, leaf_paths, set_value_at_path, title_field_groups};
use serde_json::{Map, Value};

use crate::io::{read_json, write_file};

/// Defaults merged with the overrides, if any.
pub fn merge(overrides: Option<&Value>) -> Value {
    let resolver = SectionTitleResolver::new();
    match overrides {
        Some(overrides) => resolver.merge(overrides),
        None => resolver.defaults().clone(),
    }
}

/// The title at `path` after merging the overrides.
pub fn get(path: &str, overrides: Option<&Value>) -> String {
    SectionTitleResolver::new().resolve(&merge(overrides), path)
}

/// Set `path` to `value` in the overrides file and return the new overrides.
///
/// A missing file starts from an empty object.
pub fn set(overrides_file: &Path, path: &str, value: &str, pretty: bool) -> Result<Value> {
    let mut overrides = if overrides_file.exists() {
        read_json(&overrides_file.to_string_lossy())?
    } else {
        Value::Object(Map::new())
    };
    if !overrides.is_object() {
        return Err(Error::invalid_data(format!(
            "{} does not hold a JSON object",
            overrides_file.display()
        )));
    }
    if path.split('.').all(str::is_empty) {
        return Err(Error::invalid_data("title path is empty"));
    }

    set_value_at_path(&mut overrides, path, Value::String(value.to_string()));
    write_file(overrides_file, &crate::io::render(&overrides, pretty)?)?;
    tracing::debug!("set {path} in {}", overrides_file.display());
    Ok(overrides)
}

/// Editable title paths, bare or grouped for an editor.
pub fn paths(groups: bool) -> Result<Value> {
    if groups {
        return Ok(serde_json::to_value(title_field_groups())?);
    }
    let resolver = SectionTitleResolver::new();
    Ok(Value::from(leaf_paths(resolver.defaults())))
}

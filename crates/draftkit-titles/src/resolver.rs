//! Merging override trees onto the defaults and resolving leaves.

use serde_json::{Map, Value};

use crate::defaults::default_section_titles;
use crate::path::get_value_from_path;

/// Resolves section titles against an immutable default tree.
///
/// The resolver never holds overrides. Callers merge once with
/// [`merge`](Self::merge) and pass the merged tree to
/// [`resolve`](Self::resolve).
#[derive(Clone, Debug, PartialEq)]
pub struct SectionTitleResolver {
    defaults: Value,
}

impl Default for SectionTitleResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTitleResolver {
    /// A resolver over the built-in default titles.
    pub fn new() -> Self {
        Self::with_defaults(default_section_titles())
    }

    /// A resolver over a custom default tree.
    ///
    /// A non-object tree is treated as empty.
    pub fn with_defaults(defaults: Value) -> Self {
        let defaults = if defaults.is_object() {
            defaults
        } else {
            log::debug!("default title tree is not an object, using an empty tree");
            Value::Object(Map::new())
        };
        Self { defaults }
    }

    /// The default tree.
    pub fn defaults(&self) -> &Value {
        &self.defaults
    }

    /// A copy of the defaults with `overrides` applied.
    ///
    /// Objects recurse, replacing a default that is not an object. Arrays
    /// and scalars replace the default outright. `null` leaves the default
    /// in place. A non-object override tree changes nothing.
    pub fn merge(&self, overrides: &Value) -> Value {
        let mut merged = self.defaults.clone();
        if let Value::Object(target) = &mut merged {
            apply_overrides(target, overrides);
        }
        merged
    }

    /// The trimmed text at `path` in `tree`, or the default text when it is
    /// missing, blank or not a string.
    pub fn resolve(&self, tree: &Value, path: &str) -> String {
        match get_value_from_path(tree, path).and_then(Value::as_str) {
            Some(text) if !text.trim().is_empty() => text.trim().to_string(),
            _ => self.default_value(path),
        }
    }

    /// The default text at `path`, or `""` when the defaults have none.
    pub fn default_value(&self, path: &str) -> String {
        get_value_from_path(&self.defaults, path)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }
}

fn apply_overrides(target: &mut Map<String, Value>, source: &Value) {
    let Some(source) = source.as_object() else {
        return;
    };
    for (key, value) in source {
        match value {
            Value::Null => {}
            Value::Object(_) => {
                let slot = target
                    .entry(key.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !slot.is_object() {
                    *slot = Value::Object(Map::new());
                }
                if let Value::Object(inner) = slot {
                    apply_overrides(inner, value);
                }
            }
            _ => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

// ============================================================================
// Convenience functions over the built-in defaults
// ============================================================================

/// Merge `overrides` onto the built-in default titles.
pub fn merge_section_titles(overrides: &Value) -> Value {
    SectionTitleResolver::new().merge(overrides)
}

/// Resolve `path` in `tree`, falling back to the built-in default.
pub fn get_section_title_value(tree: &Value, path: &str) -> String {
    SectionTitleResolver::new().resolve(tree, path)
}

/// The built-in default text at `path`.
pub fn get_default_section_title_value(path: &str) -> String {
    SectionTitleResolver::new().default_value(path)
}

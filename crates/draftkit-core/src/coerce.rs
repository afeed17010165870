//! Total conversions from untrusted JSON values.
//!
//! Hand-authored drafts carry lists as arrays, as newline-separated text, or
//! not at all. These helpers flatten all of those into clean strings and
//! never fail.

use serde_json::Value;

/// Convert a JSON value into a list of trimmed, non-blank strings.
///
/// Arrays contribute one entry per element. A string is split on line
/// breaks. Anything else yields an empty list. Scalar elements are
/// stringified; nested arrays, objects and `null` count as blank.
///
/// # Examples
///
/// ```
/// use draftkit_core::to_string_array;
/// use serde_json::json;
///
/// assert_eq!(to_string_array(&json!("a\nb\n\nc")), vec!["a", "b", "c"]);
/// assert_eq!(to_string_array(&json!([" x ", 3, null])), vec!["x", "3"]);
/// assert!(to_string_array(&json!({"a": 1})).is_empty());
/// ```
pub fn to_string_array(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => clean(items.iter().map(scalar_text)),
        Value::String(text) => clean(text.lines().map(str::to_string)),
        _ => Vec::new(),
    }
}

/// Same as [`to_string_array`] for an optional value, empty when absent.
pub fn to_string_array_opt(value: Option<&Value>) -> Vec<String> {
    value.map(to_string_array).unwrap_or_default()
}

/// Coerce a scalar JSON value into a trimmed string.
///
/// Strings are trimmed, numbers and booleans are stringified, everything
/// else becomes `""`.
pub fn coerce_string(value: &Value) -> String {
    scalar_text(value).trim().to_string()
}

/// Same as [`coerce_string`] for an optional value, `""` when absent.
pub fn coerce_string_opt(value: Option<&Value>) -> String {
    value.map(coerce_string).unwrap_or_default()
}

/// Read `key` from a JSON object and coerce it with [`coerce_string`].
pub fn string_field(raw: &Value, key: &str) -> String {
    coerce_string_opt(raw.get(key))
}

/// Read `key` from a JSON object and coerce it with [`to_string_array`].
pub fn list_field(raw: &Value, key: &str) -> Vec<String> {
    to_string_array_opt(raw.get(key))
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn clean(items: impl Iterator<Item = String>) -> Vec<String> {
    items
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_to_string_array_from_array() {
        let value = json!(["  first ", "", "second", "   "]);
        assert_eq!(to_string_array(&value), vec!["first", "second"]);
    }

    #[test]
    fn test_to_string_array_from_newline_text() {
        assert_eq!(to_string_array(&json!("a\nb\n\nc")), vec!["a", "b", "c"]);
        assert_eq!(to_string_array(&json!("a\r\n b \r\n")), vec!["a", "b"]);
        assert!(to_string_array(&json!("   ")).is_empty());
    }

    #[test]
    fn test_to_string_array_coerces_scalars() {
        let value = json!([1, true, 2.5, null, ["nested"], {"k": "v"}]);
        assert_eq!(to_string_array(&value), vec!["1", "true", "2.5"]);
    }

    #[test]
    fn test_to_string_array_rejects_other_shapes() {
        assert!(to_string_array(&json!(null)).is_empty());
        assert!(to_string_array(&json!(12)).is_empty());
        assert!(to_string_array(&json!({"a": ["b"]})).is_empty());
        assert!(to_string_array_opt(None).is_empty());
    }

    #[test]
    fn test_coerce_string() {
        assert_eq!(coerce_string(&json!("  padded ")), "padded");
        assert_eq!(coerce_string(&json!(7)), "7");
        assert_eq!(coerce_string(&json!(false)), "false");
        assert_eq!(coerce_string(&json!(null)), "");
        assert_eq!(coerce_string(&json!(["x"])), "");
        assert_eq!(coerce_string_opt(None), "");
    }

    #[test]
    fn test_field_accessors() {
        let raw = json!({"title": " T ", "tips": "x\ny"});
        assert_eq!(string_field(&raw, "title"), "T");
        assert_eq!(string_field(&raw, "missing"), "");
        assert_eq!(list_field(&raw, "tips"), vec!["x", "y"]);
        assert!(list_field(&json!("not an object"), "tips").is_empty());
    }

    // ------------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------------

    proptest! {
        #[test]
        fn test_entries_are_trimmed_and_non_blank(items in prop::collection::vec(".{0,12}", 0..8)) {
            let value = Value::Array(items.into_iter().map(Value::String).collect());
            for entry in to_string_array(&value) {
                prop_assert!(!entry.is_empty());
                prop_assert_eq!(entry.trim(), entry.as_str());
            }
        }

        #[test]
        fn test_array_output_is_a_fixed_point(text in "[a-z \n]{0,40}") {
            let once = to_string_array(&Value::String(text));
            let again = to_string_array(&json!(once.clone()));
            prop_assert_eq!(once, again);
        }
    }
}

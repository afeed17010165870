//! The shared seam for theme guides.
//!
//! Every guide variant is built the same way: an empty or preset-filled
//! starting point, and a total normalizer that rebuilds the guide from any
//! JSON value. [`Guide`] captures that pair.

use serde::Serialize;
use serde_json::Value;

use draftkit_core::{coerce_string, to_string_array};

/// Options controlling how guides are created and normalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuideOptions {
    /// Fill preset-bearing lists (age groups, conditions, programs) with
    /// their preset entries when the input has none.
    pub with_presets: bool,
}

impl GuideOptions {
    /// Options that never fill presets.
    pub fn without_presets() -> Self {
        Self {
            with_presets: false,
        }
    }

    /// Set whether presets are filled.
    pub fn with_presets(mut self, with_presets: bool) -> Self {
        self.with_presets = with_presets;
        self
    }
}

impl Default for GuideOptions {
    fn default() -> Self {
        Self { with_presets: true }
    }
}

/// A theme guide that can be created and normalized.
///
/// # Contract
///
/// - `normalize` never fails. Non-object input yields `create(options)`.
/// - List fields contain only trimmed, non-blank strings.
/// - `renormalized` is idempotent.
///
/// # Example
///
/// ```
/// use draftkit_guide::{Guide, GuideOptions, ParentingGuide};
/// use serde_json::json;
///
/// let guide = ParentingGuide::normalize(&json!("not an object"), GuideOptions::default());
/// assert_eq!(guide.age_groups.len(), 6);
///
/// let bare = ParentingGuide::create(GuideOptions::without_presets());
/// assert!(bare.age_groups.is_empty());
/// ```
pub trait Guide: Sized + Serialize {
    /// Build an empty guide, preset-filled when the options ask for it.
    fn create(options: GuideOptions) -> Self;

    /// Rebuild a guide from arbitrary JSON.
    fn normalize(raw: &Value, options: GuideOptions) -> Self;

    /// Whether the guide carries no authored content.
    ///
    /// Preset labels alone do not count as content.
    fn is_empty(&self) -> bool;

    /// Run this guide through its own normalizer without presets.
    fn renormalized(&self) -> Self {
        match serde_json::to_value(self) {
            Ok(value) => Self::normalize(&value, GuideOptions::without_presets()),
            Err(err) => {
                log::warn!("guide could not be serialized for renormalization: {err}");
                Self::create(GuideOptions::without_presets())
            }
        }
    }
}

// ============================================================================
// Field helpers shared by the guide normalizers
// ============================================================================

pub(crate) fn text(raw: &Value, key: &str) -> String {
    raw.get(key).map(coerce_string).unwrap_or_default()
}

pub(crate) fn list(raw: &Value, key: &str) -> Vec<String> {
    raw.get(key).map(to_string_array).unwrap_or_default()
}

/// Records for a list that falls back to presets when absent or empty.
///
/// Every input element is kept; non-object elements become empty records.
pub(crate) fn preset_records<T>(
    raw: &Value,
    key: &str,
    normalize: impl Fn(&Value) -> T,
    presets: impl FnOnce() -> Vec<T>,
) -> Vec<T> {
    match raw.get(key).and_then(Value::as_array) {
        Some(items) if !items.is_empty() => items.iter().map(normalize).collect(),
        _ => presets(),
    }
}

/// Records for a list without presets. Records with no content are dropped.
pub(crate) fn content_records<T>(
    raw: &Value,
    key: &str,
    normalize: impl Fn(&Value) -> T,
    has_content: impl Fn(&T) -> bool,
) -> Vec<T> {
    raw.get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().map(normalize).filter(|r| has_content(r)).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_options_default_fills_presets() {
        assert!(GuideOptions::default().with_presets);
        assert!(!GuideOptions::without_presets().with_presets);
        assert!(!GuideOptions::default().with_presets(false).with_presets);
    }

    #[test]
    fn test_text_and_list_helpers() {
        let raw = json!({"a": "  x ", "b": ["1", " ", 2]});
        assert_eq!(text(&raw, "a"), "x");
        assert_eq!(text(&raw, "missing"), "");
        assert_eq!(list(&raw, "b"), vec!["1", "2"]);
        assert_eq!(list(&raw, "a"), vec!["x"]);
    }

    #[test]
    fn test_preset_records_fallback() {
        let presets = || vec!["preset".to_string()];
        let pick = |v: &Value| coerce_string(v);

        let empty = json!({"items": []});
        assert_eq!(preset_records(&empty, "items", pick, presets), vec!["preset"]);

        let missing = json!({});
        assert_eq!(preset_records(&missing, "items", pick, presets), vec!["preset"]);

        let given = json!({"items": ["a", {}]});
        assert_eq!(preset_records(&given, "items", pick, presets), vec!["a", ""]);
    }

    #[test]
    fn test_content_records_drop_empty() {
        let raw = json!({"items": ["a", "", "  ", "b"]});
        let records = content_records(&raw, "items", coerce_string, |s: &String| !s.is_empty());
        assert_eq!(records, vec!["a", "b"]);
        assert!(content_records(&json!({"items": "a"}), "items", coerce_string, |_| true).is_empty());
    }
}

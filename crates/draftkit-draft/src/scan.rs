//! Quote-aware scans over pasted JSON text.
//!
//! Both scans track string literals the same way: a `"` toggles the
//! in-string state unless it follows a backslash, and a backslash escapes
//! exactly one character.

use draftkit_core::{Error, Result};

/// Remove raw `\n` and `\r` characters inside string literals.
///
/// Everything outside string literals, and escaped sequences such as `\\n`
/// inside them, is left unchanged.
pub fn sanitize_json_newlines(text: &str) -> String {
    let mut sanitized = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;
    for ch in text.chars() {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == '"' {
            in_string = !in_string;
        } else if in_string && (ch == '\n' || ch == '\r') {
            continue;
        }
        sanitized.push(ch);
    }
    sanitized
}

/// Split text into its top-level `{...}` objects.
///
/// Text between objects is ignored. Fails on an unmatched `}`, on an
/// unterminated string or object, and when no object is found.
pub fn split_json_objects(text: &str) -> Result<Vec<String>> {
    let trimmed = text.trim();
    let mut objects = Vec::new();
    let mut depth = 0usize;
    let mut start = None;
    let mut in_string = false;
    let mut escaped = false;

    for (index, ch) in trimmed.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '"' => in_string = !in_string,
            _ if in_string => {}
            '{' => {
                if depth == 0 {
                    start = Some(index);
                }
                depth += 1;
            }
            '}' => {
                if depth == 0 {
                    return Err(Error::malformed(format!(
                        "unmatched closing brace at byte {index}"
                    )));
                }
                depth -= 1;
                if depth == 0
                    && let Some(begin) = start.take()
                {
                    let object = trimmed[begin..=index].trim();
                    if !object.is_empty() {
                        objects.push(object.to_string());
                    }
                }
            }
            _ => {}
        }
    }

    if in_string || depth != 0 {
        return Err(Error::malformed("unterminated string or object"));
    }
    if objects.is_empty() {
        return Err(Error::malformed(
            "no JSON object found; expected text like {\"theme\": ...}",
        ));
    }
    log::debug!("split pasted text into {} object(s)", objects.len());
    Ok(objects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ------------------------------------------------------------------------
    // sanitize_json_newlines
    // ------------------------------------------------------------------------

    #[test]
    fn test_sanitize_removes_newlines_inside_strings() {
        let text = "{\"title\": \"a\nb\r\nc\"}";
        assert_eq!(sanitize_json_newlines(text), "{\"title\": \"abc\"}");
    }

    #[test]
    fn test_sanitize_keeps_newlines_outside_strings() {
        let text = "{\n  \"a\": 1,\r\n  \"b\": \"x\"\n}";
        assert_eq!(sanitize_json_newlines(text), text);
    }

    #[test]
    fn test_sanitize_respects_escapes() {
        let text = "{\"a\": \"quote \\\" still\ninside\", \"b\": \"esc \\\\n\"}";
        let expected = "{\"a\": \"quote \\\" stillinside\", \"b\": \"esc \\\\n\"}";
        assert_eq!(sanitize_json_newlines(text), expected);
    }

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(sanitize_json_newlines(""), "");
    }

    // ------------------------------------------------------------------------
    // split_json_objects
    // ------------------------------------------------------------------------

    #[test]
    fn test_split_concatenated_objects() {
        let parts = split_json_objects(r#"{"a":1}{"b":2}"#).unwrap();
        assert_eq!(parts, vec![r#"{"a":1}"#, r#"{"b":2}"#]);
    }

    #[test]
    fn test_split_ignores_braces_in_strings_and_separators() {
        let text = r#"  {"a":"}{"} ,
            garbage {"b":{"c":"\"}"}}  "#;
        let parts = split_json_objects(text).unwrap();
        assert_eq!(parts, vec![r#"{"a":"}{"}"#, r#"{"b":{"c":"\"}"}}"#]);
    }

    #[test]
    fn test_split_unmatched_close() {
        let err = split_json_objects(r#"{"a":1}}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }

    #[test]
    fn test_split_unterminated() {
        assert!(split_json_objects(r#"{"a":1"#).is_err());
        assert!(split_json_objects(r#"{"a":"1}"#).is_err());
    }

    #[test]
    fn test_split_no_object() {
        let err = split_json_objects("   [1, 2]  ").unwrap_err();
        assert!(err.to_string().contains("no JSON object found"));
        assert!(split_json_objects("").is_err());
    }

    proptest! {
        #[test]
        fn prop_sanitize_only_drops_newlines(text in "[a-z\"\\\\{}\n\r ]{0,40}") {
            let sanitized = sanitize_json_newlines(&text);
            let kept: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
            let stripped: String = sanitized.chars().filter(|c| *c != '\n' && *c != '\r').collect();
            prop_assert_eq!(kept, stripped);
            prop_assert!(sanitized.len() <= text.len());
        }

        #[test]
        fn prop_split_recovers_serialized_objects(values in proptest::collection::vec("[a-z{}\" ]{0,6}", 1..5)) {
            let objects: Vec<String> = values
                .iter()
                .map(|v| serde_json::json!({"v": v}).to_string())
                .collect();
            let parts = split_json_objects(&objects.join("\n")).unwrap();
            prop_assert_eq!(parts, objects);
        }
    }
}

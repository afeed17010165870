//! Dot-path access into JSON trees.
//!
//! A path is split on `.` with empty segments ignored, so `"a..b."` and
//! `"a.b"` address the same leaf. A path with no segments addresses nothing.

use serde_json::{Map, Value};

/// Split a dot path into its non-empty segments.
pub fn segments(path: &str) -> Vec<&str> {
    path.split('.').filter(|segment| !segment.is_empty()).collect()
}

/// The value at `path`, if every segment exists.
///
/// Objects are walked by key and arrays by decimal index.
pub fn get_value_from_path<'a>(source: &'a Value, path: &str) -> Option<&'a Value> {
    let parts = segments(path);
    if parts.is_empty() {
        return None;
    }
    parts.into_iter().try_fold(source, |cursor, segment| match cursor {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Assign `value` at `path`, creating intermediate objects as needed.
///
/// Any non-object found along the way, including `target` itself, is
/// replaced by an empty object. An empty path leaves `target` untouched.
pub fn set_value_at_path(target: &mut Value, path: &str, value: Value) {
    let parts = segments(path);
    if parts.is_empty() {
        return;
    }
    assign(target, &parts, value);
}

fn assign(node: &mut Value, parts: &[&str], value: Value) {
    let Some((first, rest)) = parts.split_first() else {
        *node = value;
        return;
    };
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    if let Value::Object(map) = node {
        let child = map.entry(first.to_string()).or_insert(Value::Null);
        assign(child, rest, value);
    }
}

/// Dot paths of every string leaf, depth first in key order.
pub fn leaf_paths(tree: &Value) -> Vec<String> {
    let mut paths = Vec::new();
    collect_leaves(tree, &mut String::new(), &mut paths);
    paths
}

fn collect_leaves(node: &Value, prefix: &mut String, paths: &mut Vec<String>) {
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                let mark = prefix.len();
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(key);
                collect_leaves(child, prefix, paths);
                prefix.truncate(mark);
            }
        }
        Value::String(_) if !prefix.is_empty() => paths.push(prefix.clone()),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_segments_skip_empty() {
        assert_eq!(segments("a..b."), vec!["a", "b"]);
        assert!(segments("").is_empty());
        assert!(segments("...").is_empty());
    }

    #[test]
    fn test_get_value_from_path() {
        let tree = json!({"a": {"b": {"c": "leaf"}, "list": ["x", "y"]}});
        assert_eq!(get_value_from_path(&tree, "a.b.c"), Some(&json!("leaf")));
        assert_eq!(get_value_from_path(&tree, "a.list.1"), Some(&json!("y")));
        assert_eq!(get_value_from_path(&tree, "a.b.c.d"), None);
        assert_eq!(get_value_from_path(&tree, "a.missing"), None);
        assert_eq!(get_value_from_path(&tree, ""), None);
    }

    #[test]
    fn test_set_value_creates_intermediates() {
        let mut tree = json!({});
        set_value_at_path(&mut tree, "themes.health.overview.title", json!("개요"));
        assert_eq!(
            tree,
            json!({"themes": {"health": {"overview": {"title": "개요"}}}})
        );
    }

    #[test]
    fn test_set_value_replaces_scalars_on_the_way() {
        let mut tree = json!({"general": "oops"});
        set_value_at_path(&mut tree, "general.sources.title", json!("자료"));
        assert_eq!(tree, json!({"general": {"sources": {"title": "자료"}}}));

        let mut scalar = json!(3);
        set_value_at_path(&mut scalar, "a", json!(true));
        assert_eq!(scalar, json!({"a": true}));
    }

    #[test]
    fn test_set_value_empty_path_is_noop() {
        let mut tree = json!({"a": 1});
        set_value_at_path(&mut tree, "..", json!(2));
        assert_eq!(tree, json!({"a": 1}));
    }

    #[test]
    fn test_leaf_paths_in_order() {
        let tree = json!({
            "b": {"title": "t", "count": 3},
            "a": {"badge": "x", "list": ["ignored"]}
        });
        assert_eq!(leaf_paths(&tree), vec!["b.title", "a.badge"]);
        assert!(leaf_paths(&json!("root")).is_empty());
    }
}

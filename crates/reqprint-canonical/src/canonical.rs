//! Canonical line-oriented serialization
//!
//! Turns an arbitrary [`Value`] into a deterministic multi-line string.
//! Keys are sorted at every nesting level, so two collections built
//! from the same pairs in any insertion order serialize identically.

use reqprint_core::Value;

/// Serialize a value to its canonical form.
///
/// # Rules
///
/// - Non-keyed values pass through their default string conversion
///   (`"NaN"`, `"0"`, `"undefined"`, `"null"`, the string itself).
/// - Keyed collections become one line per leaf: at each level the own
///   entries are sorted by plain lexicographic key comparison, the
///   first descendant line is prefixed with its parent key, and the
///   remaining descendant lines follow verbatim.
/// - An empty collection serializes to the empty string at top level,
///   and to a bare `"<key>,"` line when nested as a child.
///
/// The key sort is deliberately naive string comparison, never
/// numeric: multi-digit array indices order as `"0", "1", "10", "2"`.
///
/// # Example
///
/// ```rust
/// use reqprint_canonical::serialize;
/// use reqprint_core::Value;
///
/// let value = Value::object([("foo", Value::from("bar"))]);
/// assert_eq!(serialize(&value), "foo,bar");
/// ```
pub fn serialize(value: &Value) -> String {
    if value.is_keyed() {
        build_lines(value).join("\n")
    } else {
        value.leaf_string()
    }
}

/// Emit the canonical lines for one keyed collection.
fn build_lines(value: &Value) -> Vec<String> {
    let mut entries = value.own_entries().unwrap_or_default();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut lines = Vec::new();
    for (key, child) in entries {
        let mut sub = if child.is_keyed() {
            build_lines(child)
        } else {
            vec![child.leaf_string()]
        };
        let head = if sub.is_empty() {
            String::new()
        } else {
            sub.remove(0)
        };
        lines.push(format!("{},{}", key, head));
        lines.append(&mut sub);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_simple_object() {
        let value = Value::from(json!({ "foo": "bar" }));
        assert_eq!(serialize(&value), "foo,bar");
    }

    #[test]
    fn test_multi_level_object() {
        let value = Value::object([
            (
                "foo",
                Value::object([
                    ("bar", Value::pattern("bar")),
                    ("lorem", Value::from(json!({ "ipsum": "ipsum" }))),
                ]),
            ),
            (
                "dolor",
                Value::from(json!({ "sit": 0, "met": 15.45 })),
            ),
        ]);

        assert_eq!(
            serialize(&value),
            "dolor,met,15.45\nsit,0\nfoo,bar,\nlorem,ipsum,ipsum"
        );
    }

    #[test]
    fn test_leaf_identities() {
        assert_eq!(serialize(&Value::Number(f64::NAN)), "NaN");
        assert_eq!(serialize(&Value::Number(0.0)), "0");
        assert_eq!(serialize(&Value::Undefined), "undefined");
        assert_eq!(serialize(&Value::Null), "null");
        assert_eq!(serialize(&Value::from("foo=bar")), "foo=bar");
    }

    #[test]
    fn test_empty_collection_is_empty_string() {
        assert_eq!(serialize(&Value::Object(Vec::new())), "");
        assert_eq!(serialize(&Value::Array(Vec::new())), "");
        assert_eq!(serialize(&Value::pattern("bar")), "");
    }

    #[test]
    fn test_nested_empty_collection_keeps_its_key() {
        let value = Value::object([("foo", Value::Object(Vec::new()))]);
        assert_eq!(serialize(&value), "foo,");
    }

    #[test]
    fn test_insertion_order_is_irrelevant() {
        let a = Value::object([
            ("b", Value::from(2.0)),
            ("a", Value::from(1.0)),
            ("c", Value::from(3.0)),
        ]);
        let b = Value::object([
            ("c", Value::from(3.0)),
            ("a", Value::from(1.0)),
            ("b", Value::from(2.0)),
        ]);

        assert_eq!(serialize(&a), serialize(&b));
        assert_eq!(serialize(&a), "a,1\nb,2\nc,3");
    }

    #[test]
    fn test_array_indices_sort_lexicographically() {
        let items: Vec<Value> = (0..11).map(|i| Value::from(f64::from(i))).collect();
        let value = Value::Array(items);

        // "10" sorts between "1" and "2"
        assert_eq!(
            serialize(&value),
            "0,0\n1,1\n10,10\n2,2\n3,3\n4,4\n5,5\n6,6\n7,7\n8,8\n9,9"
        );
    }

    #[test]
    fn test_mixed_types_in_one_collection() {
        let value = Value::object([
            ("num", Value::from(12020.0)),
            ("flag", Value::from(true)),
            ("none", Value::Null),
            ("text", Value::from("plain")),
        ]);

        assert_eq!(serialize(&value), "flag,true\nnone,null\nnum,12020\ntext,plain");
    }
}

//! The structured value model consumed by the canonical serializer.
//!
//! `Value` covers every input shape the fingerprint pipeline accepts:
//! plain leaves (strings, numbers including NaN, booleans, null,
//! undefined) and keyed collections (objects, arrays addressed by
//! stringified indices, and pattern values that enumerate no entries
//! of their own). The serializer never inspects variants directly; it
//! goes through [`Value::own_entries`] and [`Value::leaf_string`], so
//! the enumeration rules live here in one place.

use serde::{Deserialize, Deserializer};

/// A structured input value.
///
/// Insertion order of object entries is preserved on construction and
/// ignored at serialization time — two objects built from the same
/// pairs in any order canonicalize identically.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An absent value. Serializes to `"undefined"`, counts as falsy.
    Undefined,
    /// An explicit null. Serializes to `"null"`, counts as falsy.
    Null,
    Bool(bool),
    /// Any numeric value, including NaN.
    Number(f64),
    String(String),
    /// Ordered items, enumerated under stringified indices.
    Array(Vec<Value>),
    /// Keyed entries in insertion order.
    Object(Vec<(String, Value)>),
    /// A pattern/regex-like value: keyed for enumeration purposes, but
    /// exposing zero entries of its own.
    Pattern(String),
}

impl Value {
    /// Build an object value from key/value pairs.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a pattern value from its source text.
    pub fn pattern(source: impl Into<String>) -> Self {
        Value::Pattern(source.into())
    }

    /// Whether this value is a keyed collection.
    ///
    /// Patterns count as keyed: they enumerate like a collection, just
    /// with zero entries.
    pub fn is_keyed(&self) -> bool {
        matches!(
            self,
            Value::Array(_) | Value::Object(_) | Value::Pattern(_)
        )
    }

    /// Own enumerable entries, in insertion order.
    ///
    /// Returns `None` for plain leaves. Arrays enumerate under their
    /// stringified indices; patterns enumerate as empty.
    pub fn own_entries(&self) -> Option<Vec<(String, &Value)>> {
        match self {
            Value::Object(entries) => {
                Some(entries.iter().map(|(k, v)| (k.clone(), v)).collect())
            }
            Value::Array(items) => Some(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), v))
                    .collect(),
            ),
            Value::Pattern(_) => Some(Vec::new()),
            _ => None,
        }
    }

    /// Default string conversion for non-keyed values.
    ///
    /// Keyed collections have no leaf form — the serializer renders
    /// them line by line instead — and return an empty string.
    pub fn leaf_string(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            // f64 Display: NaN -> "NaN", 0.0 -> "0", 15.45 -> "15.45"
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::Array(_) | Value::Object(_) | Value::Pattern(_) => String::new(),
        }
    }

    /// Truthiness used for feed-section gating.
    ///
    /// Undefined, null, `false`, `0`, NaN, and the empty string are
    /// falsy. Collections are always truthy; empty ones are filtered
    /// later by the empty-serialization rule.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => !n.is_nan() && *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) | Value::Pattern(_) => true,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

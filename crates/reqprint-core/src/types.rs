//! Request and extraction result types.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::value::Value;

/// An HTTP-like request, as consumed by the fingerprint pipeline.
///
/// Every field is optional: a missing field contributes nothing to the
/// assembled feed, it never causes an error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Request {
    /// Request method, e.g. `"POST"`.
    pub method: Option<String>,

    /// Request URL; may carry a `?query` component.
    pub url: Option<String>,

    /// Raw query string without the leading `?`. The URL's own query
    /// component takes precedence when both are present.
    pub query: Option<String>,

    /// Request body.
    pub body: Option<Value>,

    /// Header mapping. Keys are conventionally lowercase but any case
    /// is accepted; a `cookie` entry holds a `; `-joined string of
    /// `name=value` pairs.
    pub headers: Option<BTreeMap<String, String>>,
}

impl Request {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.as_ref().and_then(|headers| {
            headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str())
        })
    }
}

/// One entry of the extracted header mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderEntry {
    /// A plain header value.
    Text(String),
    /// The folded cookie mapping that replaces the raw `cookie` header.
    Cookies(BTreeMap<String, String>),
}

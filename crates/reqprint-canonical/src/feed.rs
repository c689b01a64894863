//! Feed assembly and the fingerprinting front door
//!
//! A feed is the labeled, newline-joined text representing one request:
//!
//! ```text
//! method:
//! post
//! pathname:
//! /foo
//! query:
//! q,1
//! data:
//! foo=bar
//! headers:
//! content-type,application/json
//! ```
//!
//! Sections are emitted in fixed order and omitted entirely when their
//! value is absent, so equivalent requests assemble byte-identical
//! feeds regardless of which optional fields they carry.

use std::collections::BTreeMap;

use reqprint_core::{extract_headers, Config, HeaderEntry, Request, Value};
use url::form_urlencoded;

use crate::canonical::serialize;
use crate::digest::digest_feed;
use crate::error::FingerprintError;

/// Computes order-independent fingerprints for requests.
///
/// Holds one immutable [`Config`]; every call is a pure function of
/// the request and that configuration, so a single instance may serve
/// concurrent callers.
///
/// # Example
///
/// ```rust
/// use reqprint_canonical::Fingerprinter;
/// use reqprint_core::{Config, Request};
///
/// let fingerprinter = Fingerprinter::new(Config::default());
/// let request = Request {
///     method: Some("POST".to_string()),
///     ..Request::default()
/// };
///
/// let fingerprint = fingerprinter.fingerprint(&request).unwrap();
/// assert_eq!(fingerprint.len(), 64);
/// ```
#[derive(Debug, Clone)]
pub struct Fingerprinter {
    config: Config,
}

impl Fingerprinter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration this instance was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Format one labeled section.
    ///
    /// Returns the empty string when the value is falsy or serializes
    /// to nothing — an absent section contributes no separator to the
    /// feed. Presence is always decided from the raw value and the
    /// default serializer; a configured override only shapes the
    /// emitted text.
    pub fn field_feed(&self, label: &str, value: &Value) -> String {
        if !value.is_truthy() {
            return String::new();
        }
        let default_text = serialize(value);
        if default_text.is_empty() {
            return String::new();
        }
        let text = match &self.config.serializer {
            Some(serializer) => serializer(value),
            None => default_text,
        };
        if text.is_empty() {
            return String::new();
        }
        format!("{}\n{}", label, text)
    }

    /// Assemble the full feed for a request.
    ///
    /// Sections in order: `method:`, `pathname:`, `query:`, `data:`,
    /// `headers:`. The method is lowercased before serialization. The
    /// query string comes from the URL's `?` component when present,
    /// falling back to the request's own `query` field.
    pub fn feed(&self, request: &Request) -> String {
        let method = request
            .method
            .as_deref()
            .map(|m| m.to_ascii_lowercase())
            .unwrap_or_default();

        let (pathname, url_query) = split_url(request.url.as_deref());
        let query = url_query.or(request.query.as_deref());

        let headers = extract_headers(
            request,
            self.config.headers.as_deref(),
            self.config.cookies.as_deref(),
            self.config.fold_cookies,
        );

        let sections = [
            self.field_feed("method:", &Value::String(method)),
            self.field_feed("pathname:", &Value::String(pathname.to_string())),
            self.field_feed("query:", &parse_query(query.unwrap_or(""))),
            self.field_feed("data:", request.body.as_ref().unwrap_or(&Value::Undefined)),
            self.field_feed("headers:", &headers_value(headers)),
        ];

        let present: Vec<String> = sections
            .into_iter()
            .filter(|section| !section.is_empty())
            .collect();
        present.join("\n")
    }

    /// Reduce a request to its fingerprint.
    ///
    /// In expand mode the raw feed string is returned unchanged;
    /// otherwise the feed's bytes are digested and encoded per the
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FingerprintError`] when the configured algorithm or
    /// encoding name is unsupported.
    pub fn fingerprint(&self, request: &Request) -> Result<String, FingerprintError> {
        let feed = self.feed(request);
        if self.config.expand {
            return Ok(feed);
        }
        digest_feed(&feed, &self.config.algorithm, &self.config.encoding)
    }
}

/// Split a URL into its path component and raw query component.
fn split_url(url: Option<&str>) -> (&str, Option<&str>) {
    match url {
        Some(url) => match url.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (url, None),
        },
        None => ("", None),
    }
}

/// Decode a raw query string into a keyed value.
///
/// `+` decodes to a space and percent-escapes are resolved. Repeated
/// names promote to an array in first-seen order.
fn parse_query(raw: &str) -> Value {
    let mut entries: Vec<(String, Value)> = Vec::new();
    for (name, value) in form_urlencoded::parse(raw.as_bytes()) {
        let name = name.into_owned();
        let value = Value::String(value.into_owned());
        match entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, Value::Array(items))) => items.push(value),
            Some((_, slot)) => {
                let first = std::mem::replace(slot, Value::Undefined);
                *slot = Value::Array(vec![first, value]);
            }
            None => entries.push((name, value)),
        }
    }
    Value::Object(entries)
}

/// Convert the extracted header mapping into a serializable value.
fn headers_value(headers: BTreeMap<String, HeaderEntry>) -> Value {
    let entries = headers
        .into_iter()
        .map(|(name, entry)| {
            let value = match entry {
                HeaderEntry::Text(text) => Value::String(text),
                HeaderEntry::Cookies(cookies) => Value::Object(
                    cookies
                        .into_iter()
                        .map(|(n, v)| (n, Value::String(v)))
                        .collect(),
                ),
            };
            (name, value)
        })
        .collect();
    Value::Object(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn expanded() -> Fingerprinter {
        Fingerprinter::new(Config {
            expand: true,
            ..Config::default()
        })
    }

    #[test]
    fn test_field_feed_formats_label_and_text() {
        let fingerprinter = expanded();
        assert_eq!(fingerprinter.field_feed("foo", &Value::from("bar")), "foo\nbar");
    }

    #[test]
    fn test_field_feed_gates_falsy_values() {
        let fingerprinter = expanded();
        for value in [
            Value::Undefined,
            Value::Null,
            Value::Bool(false),
            Value::Number(0.0),
            Value::Number(f64::NAN),
            Value::String(String::new()),
        ] {
            assert_eq!(fingerprinter.field_feed("foo", &value), "");
        }
    }

    #[test]
    fn test_field_feed_gates_empty_collections() {
        let fingerprinter = expanded();
        assert_eq!(fingerprinter.field_feed("foo", &Value::Object(Vec::new())), "");
        assert_eq!(fingerprinter.field_feed("foo", &Value::pattern("bar")), "");
    }

    #[test]
    fn test_field_feed_override_shapes_text_not_presence() {
        let fingerprinter = Fingerprinter::new(Config {
            serializer: Some(std::sync::Arc::new(|value: &Value| {
                format!("[{}]", serialize(value))
            })),
            ..Config::default()
        });

        assert_eq!(
            fingerprinter.field_feed("foo", &Value::from("bar")),
            "foo\n[bar]"
        );
        // The override would produce "[]" here, but presence follows
        // the default serializer.
        assert_eq!(fingerprinter.field_feed("foo", &Value::Object(Vec::new())), "");
        assert_eq!(fingerprinter.field_feed("foo", &Value::Number(0.0)), "");
    }

    #[test]
    fn test_split_url() {
        assert_eq!(split_url(Some("/foo?q=1")), ("/foo", Some("q=1")));
        assert_eq!(split_url(Some("/foo")), ("/foo", None));
        assert_eq!(split_url(Some("?q=1")), ("", Some("q=1")));
        assert_eq!(split_url(None), ("", None));
    }

    #[test]
    fn test_parse_query_decodes_plus_and_percent() {
        let value = parse_query("q=foo+bar&lang=en%2Dus");
        assert_eq!(
            value,
            Value::object([
                ("q", Value::from("foo bar")),
                ("lang", Value::from("en-us")),
            ])
        );
    }

    #[test]
    fn test_parse_query_promotes_repeats_to_array() {
        let value = parse_query("q=1&q=2&other=x");
        assert_eq!(
            value,
            Value::object([
                (
                    "q",
                    Value::Array(vec![Value::from("1"), Value::from("2")])
                ),
                ("other", Value::from("x")),
            ])
        );
    }

    #[test]
    fn test_parse_query_keeps_bare_names() {
        let value = parse_query("flag");
        assert_eq!(value, Value::object([("flag", Value::from(""))]));
    }

    #[test]
    fn test_parse_query_empty() {
        assert_eq!(parse_query(""), Value::Object(Vec::new()));
    }

    #[test]
    fn test_fingerprinter_is_send_and_sync() {
        // Compile-time check: one instance may serve concurrent callers.
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Fingerprinter>();
    }
}

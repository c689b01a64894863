//! Fingerprinter configuration.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// Default digest algorithm.
pub const DEFAULT_ALGORITHM: &str = "sha256";

/// Default output encoding.
pub const DEFAULT_ENCODING: &str = "hex";

/// Serializer override, invoked wherever the default canonical
/// serializer would be used for section text. Presence gating is not
/// affected by the override (see the feed assembler).
pub type SerializerFn = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// Immutable configuration for one fingerprinter instance.
///
/// Constructed once, read-only thereafter. Allow-list semantics:
/// `None` passes everything through, `Some(vec![])` drops everything.
///
/// Algorithm and encoding names stay as strings here; they are
/// resolved when the digest stage runs, so an unsupported name
/// surfaces as an error on the fingerprinting call, not at
/// construction.
#[derive(Clone)]
pub struct Config {
    /// Digest algorithm name, e.g. `"sha256"` or `"md5"`.
    pub algorithm: String,

    /// Output text encoding, `"hex"` or `"base64"`.
    pub encoding: String,

    /// When true, return the raw feed string instead of a digest.
    pub expand: bool,

    /// Header allow-list.
    pub headers: Option<Vec<String>>,

    /// Cookie allow-list.
    pub cookies: Option<Vec<String>>,

    /// Whether the `cookie` header is folded into a parsed name/value
    /// mapping in the extracted headers. On by default.
    pub fold_cookies: bool,

    /// Canonical-serializer override for section text.
    pub serializer: Option<SerializerFn>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithm: DEFAULT_ALGORITHM.to_string(),
            encoding: DEFAULT_ENCODING.to_string(),
            expand: false,
            headers: None,
            cookies: None,
            fold_cookies: true,
            serializer: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("algorithm", &self.algorithm)
            .field("encoding", &self.encoding)
            .field("expand", &self.expand)
            .field("headers", &self.headers)
            .field("cookies", &self.cookies)
            .field("fold_cookies", &self.fold_cookies)
            .field("serializer", &self.serializer.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

//! Error types for reqprint-canonical

use thiserror::Error;

/// Errors that can occur when reducing a feed to a fingerprint.
///
/// These are configuration errors, surfaced when the digest stage is
/// invoked rather than when the configuration is built. Nothing else
/// in the pipeline can fail: malformed or absent request fields
/// degrade to absent feed sections.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FingerprintError {
    #[error("Unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Unsupported output encoding: {0}")]
    UnsupportedEncoding(String),
}

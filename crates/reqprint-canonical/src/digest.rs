//! Digest and encoding dispatch for assembled feeds

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

use crate::error::FingerprintError;

/// Digest raw bytes with the named algorithm.
///
/// Names are matched ASCII case-insensitively. Supported: `sha224`,
/// `sha256`, `sha384`, `sha512`, `md5`.
///
/// # Errors
///
/// Returns [`FingerprintError::UnsupportedAlgorithm`] for any other
/// name, at call time.
pub fn digest_bytes(algorithm: &str, data: &[u8]) -> Result<Vec<u8>, FingerprintError> {
    match algorithm.to_ascii_lowercase().as_str() {
        "sha224" => Ok(Sha224::digest(data).to_vec()),
        "sha256" => Ok(Sha256::digest(data).to_vec()),
        "sha384" => Ok(Sha384::digest(data).to_vec()),
        "sha512" => Ok(Sha512::digest(data).to_vec()),
        "md5" => Ok(md5::compute(data).0.to_vec()),
        _ => Err(FingerprintError::UnsupportedAlgorithm(
            algorithm.to_string(),
        )),
    }
}

/// Encode digest bytes with the named output encoding.
///
/// Supported: `hex` (lowercase) and `base64` (standard alphabet,
/// padded).
///
/// # Errors
///
/// Returns [`FingerprintError::UnsupportedEncoding`] for any other
/// name.
pub fn encode_bytes(encoding: &str, bytes: &[u8]) -> Result<String, FingerprintError> {
    match encoding.to_ascii_lowercase().as_str() {
        "hex" => Ok(hex::encode(bytes)),
        "base64" => Ok(BASE64.encode(bytes)),
        _ => Err(FingerprintError::UnsupportedEncoding(encoding.to_string())),
    }
}

/// Digest a feed string and encode the result.
///
/// The empty feed digests to the algorithm's well-known empty-input
/// constant.
///
/// # Example
///
/// ```rust
/// use reqprint_canonical::digest_feed;
///
/// let fingerprint = digest_feed("", "sha256", "hex").unwrap();
/// assert_eq!(
///     fingerprint,
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
pub fn digest_feed(
    feed: &str,
    algorithm: &str,
    encoding: &str,
) -> Result<String, FingerprintError> {
    let digest = digest_bytes(algorithm, feed.as_bytes())?;
    encode_bytes(encoding, &digest)
}

//! # reqprint-canonical
//!
//! Deterministic serialization and digesting for request fingerprints.
//!
//! This crate provides:
//! - Canonical line-oriented serialization with sorted keys
//! - Feed assembly from a request's method, path, query, body, and
//!   headers
//! - Digest and encoding dispatch for reducing feeds to fingerprints
//!
//! ## Canonical form rules
//!
//! 1. Keys sorted by plain lexicographic comparison at every level —
//!    never numeric, never locale-aware
//! 2. Arrays enumerate under stringified indices and sort the same way
//! 3. Only the first descendant line at each branch carries its parent
//!    key; deeper sibling lines follow verbatim
//! 4. A collection with zero own entries contributes `"<key>,"` as a
//!    child and the empty string at top level
//!
//! ## Example
//!
//! ```rust
//! use reqprint_canonical::Fingerprinter;
//! use reqprint_core::{Config, Request, Value};
//!
//! let fingerprinter = Fingerprinter::new(Config {
//!     expand: true,
//!     ..Config::default()
//! });
//!
//! let request = Request {
//!     method: Some("POST".to_string()),
//!     body: Some(Value::object([("foo", Value::from("bar"))])),
//!     ..Request::default()
//! };
//!
//! assert_eq!(
//!     fingerprinter.fingerprint(&request).unwrap(),
//!     "method:\npost\ndata:\nfoo,bar"
//! );
//! ```
//!
//! Two structurally equivalent requests always assemble the same feed
//! regardless of property-insertion order, so equal inputs stay equal
//! digests under any fixed algorithm and encoding.

mod canonical;
mod digest;
mod error;
mod feed;

pub use canonical::*;
pub use digest::*;
pub use error::*;
pub use feed::*;

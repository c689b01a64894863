//! # reqprint-core
//!
//! Request model, configuration, and field extractors for reqprint.
//!
//! This crate provides:
//! - The [`Value`] model consumed by the canonical serializer
//! - The [`Request`] input type and [`Config`] record
//! - Header and cookie extraction
//!
//! Everything here is a pure function of its inputs: missing fields
//! degrade to empty results, never errors. The serialization and
//! digest stages live in `reqprint-canonical`.
//!
//! ## Example
//!
//! ```rust
//! use reqprint_core::{extract_cookies, Request};
//!
//! let request: Request = serde_json::from_str(
//!     r#"{ "headers": { "cookie": "foo=foo; bar=bar; lorem=lorem" } }"#,
//! ).unwrap();
//!
//! let allow = vec!["foo".to_string(), "bar".to_string()];
//! let cookies = extract_cookies(&request, Some(&allow));
//! assert_eq!(cookies.len(), 2);
//! ```

pub mod config;
pub mod extract;
pub mod types;
pub mod value;

pub use config::*;
pub use extract::*;
pub use types::*;
pub use value::*;

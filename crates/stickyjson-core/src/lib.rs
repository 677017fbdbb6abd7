//! # stickyjson-core
//!
//! An in-memory JSON value tree with a deliberately "sticky" accessor
//! protocol: navigating through a tree of unknown shape never fails eagerly.
//! A bad step (missing key, out-of-range index, wrong shape) produces a value
//! that carries the error forward through any number of further navigations,
//! and the failure surfaces exactly once — at the terminal extraction. The
//! first failing step wins; later steps never overwrite it.
//!
//! Byte-level JSON parsing is delegated to `serde_json`; this crate converts
//! its decoded output into the typed tree, gives read/write access to it, and
//! renders it back to compact JSON text.
//!
//! ## Quick start
//!
//! ```rust
//! use stickyjson_core::{from_str, serialize};
//!
//! let root = from_str(r#"{"name":"Alice","scores":[95,87,92]}"#).unwrap();
//!
//! // Chain as deep as you like, check once at the end.
//! assert_eq!(root.get("name").as_str().unwrap(), "Alice");
//! assert_eq!(root.get("scores").at(2).as_f64().unwrap(), 92.0);
//!
//! // The first failing step is the one reported.
//! let err = root.get("nope").at(0).as_str().unwrap_err();
//! assert_eq!(err.to_string(), "unknown key \"nope\"");
//!
//! // Compact, deterministic rendering (keys sorted).
//! assert_eq!(serialize(&root), r#"{"name":"Alice","scores":[95,87,92]}"#);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` tree and its accessor protocol
//! - [`serializer`] — compact JSON text rendering with single-pass escaping
//! - [`bridge`] — conversion from `serde_json`'s decoded tree, plus text and
//!   file entry points
//! - [`error`] — deferred accessor errors and immediate decode errors

pub mod bridge;
pub mod error;
pub mod serializer;
pub mod value;

pub use bridge::{from_decoded, from_path, from_str};
pub use error::{AccessError, DecodeError};
pub use serializer::serialize;
pub use value::{Value, ValueKind};

//! Error types for tree navigation and the decode boundary.
//!
//! Two disjoint families:
//!
//! - [`AccessError`] — navigation/extraction failures inside a [`Value`] tree.
//!   These are *deferred*: navigation stores the error inside an `Errored`
//!   value and it only surfaces when a terminal extractor is called.
//! - [`DecodeError`] — failures at the decoder-bridge boundary (malformed
//!   text, unreadable file, unrepresentable decoded content). These are raised
//!   immediately and never carried inside a tree.
//!
//! [`Value`]: crate::value::Value

use crate::value::ValueKind;
use thiserror::Error;

/// A navigation or extraction failure inside a value tree.
///
/// Pure data; comparison is identity of kind and payload. The set is closed —
/// every way an accessor can fail is one of these five.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// A terminal extractor or mutator was called on a value of the wrong tag.
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: ValueKind,
        actual: ValueKind,
    },

    /// Key navigation was attempted on something that is not an object.
    #[error("cannot access key {key:?} on {actual}")]
    KeyNotObject { key: String, actual: ValueKind },

    /// Index navigation was attempted on something that is not an array.
    #[error("cannot access index {index} on {actual}")]
    IndexNotArray { index: usize, actual: ValueKind },

    /// The object has no member under this key.
    #[error("unknown key {key:?}")]
    UnknownKey { key: String },

    /// The index is not strictly less than the array's current length.
    #[error("index {index} out of range")]
    IndexOutOfRange { index: usize },
}

/// A failure at the decode boundary. Raised synchronously to the caller of the
/// bridge; malformed input is not transient, so there is no retry path.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The input text was not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The file behind a path entry point could not be read.
    #[error("read error: {0}")]
    Read(#[from] std::io::Error),

    /// A decoded map key was not representable as a string. Cannot occur for
    /// JSON-sourced input (JSON keys are always strings), but decoder
    /// frontends are not guaranteed to share that property.
    #[error("object key is not a string: {0}")]
    Key(String),

    /// A decoded node of a kind the value model cannot represent, e.g. a
    /// number outside the f64 range.
    #[error("unsupported decoded content: {0}")]
    Content(String),
}

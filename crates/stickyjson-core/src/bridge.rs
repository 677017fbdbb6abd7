//! Bridge from a generically-decoded JSON tree into the typed [`Value`] model.
//!
//! Byte-level lexing and parsing are delegated entirely to `serde_json`; this
//! module consumes its loosely-typed `serde_json::Value` output (the "decoded
//! node") and converts it recursively. Convenience entry points cover the two
//! common byte sources:
//!
//! - [`from_str`] — JSON text already in memory
//! - [`from_path`] — a file on disk
//!
//! Errors here are immediate and synchronous ([`DecodeError`]), unlike the
//! deferred errors of the accessor protocol — malformed input is not
//! transient, so the caller gets the failure at the boundary with no retry.
//!
//! # Example
//! ```
//! use stickyjson_core::from_str;
//!
//! let root = from_str(r#"{"name":"Alice","scores":[95,87,92]}"#).unwrap();
//! assert_eq!(root.get("name").as_str().unwrap(), "Alice");
//! assert_eq!(root.get("scores").at(1).as_f64().unwrap(), 87.0);
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::DecodeError;
use crate::value::Value;

/// Decode JSON text into a value tree.
pub fn from_str(text: &str) -> Result<Value, DecodeError> {
    let decoded: serde_json::Value = serde_json::from_str(text)?;
    from_decoded(&decoded)
}

/// Read a file and decode its contents into a value tree.
pub fn from_path(path: impl AsRef<Path>) -> Result<Value, DecodeError> {
    let text = std::fs::read_to_string(path)?;
    from_str(&text)
}

/// Convert one decoded node (and everything below it) into the typed model.
///
/// The boolean arm is matched before the numeric arm. `serde_json` keeps the
/// two apart, but decoders that model booleans as a numeric subtype do not —
/// checking numbers first would silently fold every boolean into `1`/`0`, so
/// the dispatch order is load-bearing for any frontend swapped in here.
pub fn from_decoded(node: &serde_json::Value) -> Result<Value, DecodeError> {
    match node {
        serde_json::Value::Object(map) => {
            let mut members = BTreeMap::new();
            for (key, child) in map {
                // serde_json keys are always strings; a frontend without that
                // guarantee would surface DecodeError::Key here instead.
                members.insert(key.clone(), from_decoded(child)?);
            }
            Ok(Value::Object(members))
        }
        serde_json::Value::Array(items) => {
            let mut elements = Vec::with_capacity(items.len());
            for child in items {
                elements.push(from_decoded(child)?);
            }
            Ok(Value::Array(elements))
        }
        serde_json::Value::Bool(b) => Ok(Value::boolean(*b)),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) => Ok(Value::number(f)),
            None => Err(DecodeError::Content(format!(
                "number not representable as f64: {n}"
            ))),
        },
        serde_json::Value::String(s) => Ok(Value::string(s.clone())),
        serde_json::Value::Null => Ok(Value::null()),
    }
}

//! The JSON value tree and its sticky accessor protocol.
//!
//! [`Value`] is a tagged union over the JSON shapes (object, array, string,
//! number, boolean, null) plus one internal variant, `Errored`, that carries a
//! deferred [`AccessError`]. The accessor protocol is uniform across variants:
//!
//! - **Navigation** ([`Value::get`], [`Value::at`]) never fails eagerly. A
//!   miss or a wrong-tag receiver produces an `Errored` value, and an
//!   `Errored` receiver propagates its stored error unchanged (first error
//!   wins). This lets callers chain arbitrarily deep paths and check once.
//! - **Terminal extractors** ([`Value::as_str`], [`Value::as_f64`], ...) are
//!   the single point where the accumulated or type-mismatch error surfaces.
//! - **Mutators** ([`Value::insert`], [`Value::push`], ...) fail eagerly with
//!   a `Result` — mutation reports failure rather than silently no-opping.
//!
//! Objects use a `BTreeMap`, so key iteration (and therefore serialization)
//! is deterministic. Key *order* is not part of the model's contract.
//!
//! `Value` deliberately does not implement `PartialEq`: deep structural
//! equality for composite values is not provided. Compare serialized text
//! instead.
//!
//! # Example
//! ```
//! use stickyjson_core::Value;
//!
//! let mut root = Value::object();
//! root.insert("name", Value::string("Alice")).unwrap();
//! assert_eq!(root.get("name").as_str().unwrap(), "Alice");
//!
//! // A bad path stays silent until extraction, and reports the first miss.
//! let err = root.get("scores").at(2).as_f64().unwrap_err();
//! assert_eq!(err.to_string(), "unknown key \"scores\"");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::error::AccessError;

/// The tag of a [`Value`] variant, used in error payloads and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
    Errored,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Object => "object",
            ValueKind::Array => "array",
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Null => "null",
            ValueKind::Errored => "errored",
        };
        f.write_str(name)
    }
}

/// A node in a JSON tree.
///
/// `Object` and `Array` exclusively own their children; dropping the root
/// drops the whole tree. A value's tag never changes after construction —
/// container *contents* and scalar *payloads* are mutable, the tag is not.
///
/// `Errored` is produced only by navigation ([`Value::get`] / [`Value::at`]);
/// user code never constructs it directly.
#[derive(Debug, Clone)]
pub enum Value {
    /// String-keyed members, sorted key iteration.
    Object(BTreeMap<String, Value>),
    /// Ordered elements.
    Array(Vec<Value>),
    String(String),
    /// IEEE-754 double; integers wider than f64 are not representable.
    Number(f64),
    Boolean(bool),
    Null,
    /// Carrier for a deferred navigation error. Every operation on it yields
    /// the stored error, never a fresh one.
    Errored(AccessError),
}

// ============================================================================
// Construction & inspection
// ============================================================================

impl Value {
    /// New empty object.
    pub fn object() -> Self {
        Value::Object(BTreeMap::new())
    }

    /// New empty array.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// New string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// New number value.
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    /// New boolean value.
    pub fn boolean(b: bool) -> Self {
        Value::Boolean(b)
    }

    /// New null value.
    pub fn null() -> Self {
        Value::Null
    }

    /// This value's tag.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Object(_) => ValueKind::Object,
            Value::Array(_) => ValueKind::Array,
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Null => ValueKind::Null,
            Value::Errored(_) => ValueKind::Errored,
        }
    }

    /// True if this value carries a deferred navigation error.
    pub fn is_errored(&self) -> bool {
        matches!(self, Value::Errored(_))
    }

    /// The deferred error, if any. Check this before serializing a navigated
    /// value for wire use.
    pub fn error(&self) -> Option<&AccessError> {
        match self {
            Value::Errored(err) => Some(err),
            _ => None,
        }
    }

    /// The error to report for an extraction with the given expectation:
    /// a stored error always wins over a fresh mismatch.
    fn extraction_error(&self, expected: ValueKind) -> AccessError {
        match self {
            Value::Errored(err) => err.clone(),
            other => AccessError::TypeMismatch {
                expected,
                actual: other.kind(),
            },
        }
    }
}

// ============================================================================
// Navigation (sticky — never fails eagerly)
// ============================================================================

impl Value {
    /// Navigate to the member under `key`, returning an owned copy.
    ///
    /// - On an object with the key present: a clone of the child.
    /// - On an object without the key: `Errored(UnknownKey)`.
    /// - On any non-object, non-errored value: `Errored(KeyNotObject)`.
    /// - On an errored value: the stored error, unchanged.
    pub fn get(&self, key: &str) -> Value {
        match self {
            Value::Object(map) => match map.get(key) {
                Some(child) => child.clone(),
                None => Value::Errored(AccessError::UnknownKey {
                    key: key.to_string(),
                }),
            },
            Value::Errored(err) => Value::Errored(err.clone()),
            other => Value::Errored(AccessError::KeyNotObject {
                key: key.to_string(),
                actual: other.kind(),
            }),
        }
    }

    /// Navigate to the element at `index`, returning an owned copy.
    ///
    /// Mirrors [`Value::get`]: in-range hit clones the element, out-of-range
    /// yields `Errored(IndexOutOfRange)`, non-arrays yield
    /// `Errored(IndexNotArray)`, and an errored receiver propagates its
    /// stored error.
    pub fn at(&self, index: usize) -> Value {
        match self {
            Value::Array(items) => match items.get(index) {
                Some(child) => child.clone(),
                None => Value::Errored(AccessError::IndexOutOfRange { index }),
            },
            Value::Errored(err) => Value::Errored(err.clone()),
            other => Value::Errored(AccessError::IndexNotArray {
                index,
                actual: other.kind(),
            }),
        }
    }

    /// Mutable navigation to the member under `key`. Unlike [`Value::get`]
    /// this fails eagerly — a mutation path must be valid end to end.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut Value, AccessError> {
        match self {
            Value::Object(map) => map.get_mut(key).ok_or_else(|| AccessError::UnknownKey {
                key: key.to_string(),
            }),
            Value::Errored(err) => Err(err.clone()),
            other => Err(AccessError::KeyNotObject {
                key: key.to_string(),
                actual: other.kind(),
            }),
        }
    }

    /// Mutable navigation to the element at `index`. Eager, like
    /// [`Value::get_mut`].
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Value, AccessError> {
        match self {
            Value::Array(items) => {
                if index < items.len() {
                    Ok(&mut items[index])
                } else {
                    Err(AccessError::IndexOutOfRange { index })
                }
            }
            Value::Errored(err) => Err(err.clone()),
            other => Err(AccessError::IndexNotArray {
                index,
                actual: other.kind(),
            }),
        }
    }
}

// ============================================================================
// Terminal extractors
// ============================================================================

impl Value {
    /// The object's members, or `TypeMismatch` / the stored error.
    pub fn as_object(&self) -> Result<&BTreeMap<String, Value>, AccessError> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(other.extraction_error(ValueKind::Object)),
        }
    }

    /// The array's elements, or `TypeMismatch` / the stored error.
    pub fn as_array(&self) -> Result<&[Value], AccessError> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.extraction_error(ValueKind::Array)),
        }
    }

    /// The string payload, or `TypeMismatch` / the stored error.
    pub fn as_str(&self) -> Result<&str, AccessError> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.extraction_error(ValueKind::String)),
        }
    }

    /// The numeric payload, or `TypeMismatch` / the stored error.
    pub fn as_f64(&self) -> Result<f64, AccessError> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(other.extraction_error(ValueKind::Number)),
        }
    }

    /// The numeric payload as an integer, truncated toward zero
    /// (`3.9` → `3`, `-3.9` → `-3`). Non-finite doubles fail with
    /// `TypeMismatch`.
    pub fn as_i64(&self) -> Result<i64, AccessError> {
        match self {
            Value::Number(n) if n.is_finite() => Ok(n.trunc() as i64),
            other => Err(other.extraction_error(ValueKind::Number)),
        }
    }

    /// The boolean payload, or `TypeMismatch` / the stored error.
    pub fn as_bool(&self) -> Result<bool, AccessError> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(other.extraction_error(ValueKind::Boolean)),
        }
    }

    /// Succeeds only on null; otherwise `TypeMismatch` / the stored error.
    pub fn as_null(&self) -> Result<(), AccessError> {
        match self {
            Value::Null => Ok(()),
            other => Err(other.extraction_error(ValueKind::Null)),
        }
    }
}

// ============================================================================
// Mutation (eager — reports failure, never silently no-ops)
// ============================================================================

impl Value {
    /// Insert or replace the member under `key`. Objects only.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Result<(), AccessError> {
        match self {
            Value::Object(map) => {
                map.insert(key.into(), value);
                Ok(())
            }
            other => Err(other.extraction_error(ValueKind::Object)),
        }
    }

    /// Append an element. Arrays only.
    pub fn push(&mut self, value: Value) -> Result<(), AccessError> {
        match self {
            Value::Array(items) => {
                items.push(value);
                Ok(())
            }
            other => Err(other.extraction_error(ValueKind::Array)),
        }
    }

    /// Replace the element at `index` in place. Arrays only; the index must
    /// be strictly less than the current length (no auto-extension), and the
    /// length never changes.
    pub fn set_at(&mut self, index: usize, value: Value) -> Result<(), AccessError> {
        match self {
            Value::Array(items) => {
                if index < items.len() {
                    items[index] = value;
                    Ok(())
                } else {
                    Err(AccessError::IndexOutOfRange { index })
                }
            }
            other => Err(other.extraction_error(ValueKind::Array)),
        }
    }

    /// Replace the string payload. Strings only; the tag is fixed.
    pub fn set_string(&mut self, s: impl Into<String>) -> Result<(), AccessError> {
        match self {
            Value::String(payload) => {
                *payload = s.into();
                Ok(())
            }
            other => Err(other.extraction_error(ValueKind::String)),
        }
    }

    /// Replace the numeric payload. Numbers only.
    pub fn set_number(&mut self, n: f64) -> Result<(), AccessError> {
        match self {
            Value::Number(payload) => {
                *payload = n;
                Ok(())
            }
            other => Err(other.extraction_error(ValueKind::Number)),
        }
    }

    /// Replace the boolean payload. Booleans only.
    pub fn set_boolean(&mut self, b: bool) -> Result<(), AccessError> {
        match self {
            Value::Boolean(payload) => {
                *payload = b;
                Ok(())
            }
            other => Err(other.extraction_error(ValueKind::Boolean)),
        }
    }
}

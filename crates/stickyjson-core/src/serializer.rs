//! Compact JSON text rendering for [`Value`] trees.
//!
//! Output is canonical and compact: no inserted whitespace, object keys in
//! sorted order (a property of the underlying `BTreeMap`, so repeated calls
//! on the same tree always render identically). The output is *not*
//! byte-identical to whatever text a tree was decoded from — whitespace is
//! normalized away, key order may differ, and numeric formatting follows the
//! f64 `Display` rendering rather than the original digits.
//!
//! An `Errored` value renders its error's description text, unquoted. That is
//! a debugging aid, not legal JSON — check [`Value::is_errored`] before
//! serializing navigated values for a JSON consumer.
//!
//! # Example
//! ```
//! use stickyjson_core::{serialize, Value};
//!
//! let mut root = Value::object();
//! root.insert("id", Value::number(7.0)).unwrap();
//! root.insert("tags", Value::array()).unwrap();
//! assert_eq!(serialize(&root), r#"{"id":7,"tags":[]}"#);
//! ```

use std::fmt::Write;

use crate::value::Value;

/// Render a value tree as compact JSON text.
pub fn serialize(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

/// Recursive dispatch over the tree.
fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write_number(*n, out),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, child)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(key, out);
                out.push(':');
                write_value(child, out);
            }
            out.push('}');
        }
        // Debugging aid, not legal JSON.
        Value::Errored(err) => {
            let _ = write!(out, "{err}");
        }
    }
}

/// Render a number. f64 `Display` emits the shortest form that parses back to
/// the same double, so integral doubles render without a fractional part
/// (`3.0` → `3`). JSON has no non-finite numbers; NaN and the infinities
/// render as `null`.
fn write_number(n: f64, out: &mut String) {
    if n.is_finite() {
        let _ = write!(out, "{n}");
    } else {
        out.push_str("null");
    }
}

/// Render a string in double quotes with escaping applied.
///
/// Single left-to-right pass with a per-character table. The escapes are the
/// backslash, the double quote, LF, TAB, CR, and the solidus — the solidus
/// escape (`/` → `\/`) is legal JSON but not required; it is kept for
/// compatibility with the output format this replaces. Escaping must not be
/// done as sequential find/replace passes over the whole string: a later pass
/// would re-scan backslashes inserted by an earlier one and double-escape.
fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '/' => out.push_str("\\/"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

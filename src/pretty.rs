//! Pretty, key-sorted re-serialization on the generic JSON value tree.
//!
//! The primary serde encoder emits object members in field-declaration
//! order and exposes no key-sorting option, so the canonical form is
//! produced in two passes: parse the compact encoding into a generic
//! `serde_json::Value`, sort object keys at every nesting level, then
//! re-serialize with indentation. serde_json never escapes the forward
//! slash, so `/` survives unescaped in string values.

use crate::errors::JsonModelError;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

/// Formatting options for the pretty, key-sorted form.
///
/// A [`JsonModel`](crate::JsonModel) implementor may override
/// `pretty_options()` to customize these; the default is two-space
/// indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrettyOptions {
    /// Indentation string applied once per nesting level.
    pub indent: &'static str,
}

impl Default for PrettyOptions {
    fn default() -> Self {
        Self { indent: "  " }
    }
}

/// Re-serialize JSON bytes as indented JSON with object keys sorted
/// lexicographically by code point at every nesting level.
pub fn pretty_sort_slice(
    bytes: &[u8],
    options: &PrettyOptions,
) -> Result<Vec<u8>, JsonModelError> {
    let value: Value = serde_json::from_slice(bytes)?;
    write_pretty(&sort_keys(value), options)
}

/// Recursively rebuild the value with object keys in code-point order.
///
/// Sorting happens on the generic tree, never on the map backing's
/// iteration order, so the result is stable regardless of how the tree
/// was produced.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            let mut sorted = Map::new();
            for (key, child) in entries {
                sorted.insert(key, sort_keys(child));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        scalar => scalar,
    }
}

fn write_pretty(value: &Value, options: &PrettyOptions) -> Result<Vec<u8>, JsonModelError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(options.indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sorts_keys_at_every_level() {
        let input = br#"{"b":{"z":1,"a":2},"a":[{"y":1,"x":2}]}"#;
        let out = pretty_sort_slice(input, &PrettyOptions::default()).unwrap();
        let text = String::from_utf8(out).unwrap();

        let a_pos = text.find("\"a\"").unwrap();
        let b_pos = text.find("\"b\"").unwrap();
        assert!(a_pos < b_pos);
        let x_pos = text.find("\"x\"").unwrap();
        let y_pos = text.find("\"y\"").unwrap();
        assert!(x_pos < y_pos);
    }

    #[test]
    fn default_indent_is_two_spaces() {
        let out = pretty_sort_slice(br#"{"k":1}"#, &PrettyOptions::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\n  \"k\": 1\n}");
    }

    #[test]
    fn custom_indent_is_honored() {
        let options = PrettyOptions { indent: "    " };
        let out = pretty_sort_slice(br#"{"k":1}"#, &options).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\n    \"k\": 1\n}");
    }

    #[test]
    fn forward_slash_stays_unescaped() {
        let out = pretty_sort_slice(br#"{"url":"http://a/b"}"#, &PrettyOptions::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("http://a/b"));
        assert!(!text.contains("\\/"));
    }

    #[test]
    fn malformed_input_is_a_codec_error() {
        let err = pretty_sort_slice(b"{not json", &PrettyOptions::default()).unwrap_err();
        assert!(matches!(err, JsonModelError::Codec(_)));
    }
}

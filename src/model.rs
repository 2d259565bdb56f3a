//! The `JsonModel` capability trait.
//!
//! Any type that is serde-codable can adopt the trait with an empty impl
//! block; every operation has a default body. The adapter holds no state
//! across calls: each operation is a single synchronous request/response
//! delegating the actual JSON work to serde_json.

use crate::errors::JsonModelError;
use crate::pretty::{self, PrettyOptions};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// JSON conversion capability for serde data models.
///
/// ```
/// use json_model::JsonModel;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize, Debug, PartialEq)]
/// struct Package {
///     name: String,
///     count: u32,
/// }
///
/// impl JsonModel for Package {}
///
/// let pkg = Package { name: "a/b".into(), count: 2 };
/// assert_eq!(pkg.to_json_string().unwrap(), r#"{"name":"a/b","count":2}"#);
///
/// let back = Package::from_json_str(r#"{"name":"a/b","count":2}"#).unwrap();
/// assert_eq!(back, pkg);
/// ```
pub trait JsonModel: Serialize + DeserializeOwned {
    /// Formatting used by the pretty, key-sorted operations.
    ///
    /// Override to customize; the default is two-space indentation.
    fn pretty_options() -> PrettyOptions {
        PrettyOptions::default()
    }

    /// Decode a new instance from a byte sequence containing JSON text.
    fn from_json_slice(bytes: &[u8]) -> Result<Self, JsonModelError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Encode to compact JSON bytes.
    fn to_json_vec(&self) -> Result<Vec<u8>, JsonModelError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Encode to indented JSON bytes with object keys sorted
    /// lexicographically at every nesting level.
    ///
    /// The primary encoder cannot sort keys, so the compact encoding is
    /// re-parsed into a generic value and re-serialized with formatting
    /// options. See [`crate::pretty`].
    fn to_json_vec_pretty_sorted(&self) -> Result<Vec<u8>, JsonModelError> {
        pretty::pretty_sort_slice(&self.to_json_vec()?, &Self::pretty_options())
    }

    /// Decode a new instance from JSON text.
    fn from_json_str(s: &str) -> Result<Self, JsonModelError> {
        Self::from_json_slice(s.as_bytes())
    }

    /// Decode a new instance from OS-native text, which is not guaranteed
    /// to be valid UTF-8.
    ///
    /// Fails with [`JsonModelError::StringDecodeToDataFailed`] when the
    /// text cannot be converted to a UTF-8 byte sequence.
    fn from_json_os_text(text: &OsStr) -> Result<Self, JsonModelError> {
        let s = text
            .to_str()
            .ok_or(JsonModelError::StringDecodeToDataFailed)?;
        Self::from_json_str(s)
    }

    /// Encode to a compact JSON string.
    ///
    /// Fails with [`JsonModelError::DataEncodeToStringFailed`] if the
    /// produced bytes are not valid UTF-8, which does not occur with a
    /// conformant codec.
    fn to_json_string(&self) -> Result<String, JsonModelError> {
        String::from_utf8(self.to_json_vec()?)
            .map_err(|_| JsonModelError::DataEncodeToStringFailed)
    }

    /// Encode to an indented, key-sorted JSON string.
    fn to_json_string_pretty_sorted(&self) -> Result<String, JsonModelError> {
        String::from_utf8(self.to_json_vec_pretty_sorted()?)
            .map_err(|_| JsonModelError::DataEncodeToStringFailed)
    }

    /// Decode a new instance from a JSON file.
    fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, JsonModelError> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .map_err(|e| JsonModelError::Io(e, format!("Failed to read {}", path.display())))?;
        Self::from_json_slice(&bytes)
    }

    /// Write the compact JSON encoding to a file, replacing its contents.
    fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<(), JsonModelError> {
        write_bytes(path.as_ref(), &self.to_json_vec()?)
    }

    /// Write the indented, key-sorted JSON encoding to a file, replacing
    /// its contents.
    fn to_json_file_pretty_sorted<P: AsRef<Path>>(&self, path: P) -> Result<(), JsonModelError> {
        write_bytes(path.as_ref(), &self.to_json_vec_pretty_sorted()?)
    }
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), JsonModelError> {
    fs::write(path, bytes)
        .map_err(|e| JsonModelError::Io(e, format!("Failed to write {}", path.display())))
}

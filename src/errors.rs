//! Defines the custom error types for the adapter.
//!
//! This uses `thiserror` as specified in `Cargo.toml` for clean,
//! boilerplate-free error handling.

use thiserror::Error;

/// Errors surfaced by [`JsonModel`](crate::JsonModel) operations.
///
/// The adapter defines exactly two failure kinds of its own, both at the
/// text/bytes boundary. Codec and I/O failures are not wrapped into new
/// kinds; they pass through with their sources intact.
#[derive(Error, Debug)]
pub enum JsonModelError {
    #[error("String Decode Error: input text is not valid UTF-8")]
    StringDecodeToDataFailed,

    #[error("String Encode Error: produced bytes are not valid UTF-8")]
    DataEncodeToStringFailed,

    #[error("JSON Codec Error: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("I/O Error: {1} - {0}")]
    Io(#[source] std::io::Error, String),
}

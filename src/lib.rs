//! Main library for json-model.
//!
//! This crate is a thin convenience layer over serde_json: the
//! [`JsonModel`] trait gives any serde-codable type JSON conversion
//! to/from bytes, strings, and files, plus a pretty, key-sorted form
//! produced on the generic value tree. All parsing and encoding is
//! delegated to serde_json; the adapter adds only the wrapper operations
//! and two boundary error kinds.

pub mod errors;
pub mod model;
pub mod pretty;

pub use errors::JsonModelError;
pub use model::JsonModel;
pub use pretty::PrettyOptions;

use log::info;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// Output style for a reformat run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// Compact JSON, member order preserved.
    Compact,
    /// Indented JSON with keys sorted at every nesting level.
    PrettySorted,
}

/// Top-level configuration for a reformat run.
#[derive(Debug)]
pub struct Config {
    pub input_file: PathBuf,
    /// Omitted means the result goes to stdout.
    pub output_file: Option<PathBuf>,
    pub style: OutputStyle,
}

/// The main entry point for the reformat logic.
///
/// Reads the input file, re-serializes it in the requested style, and
/// writes the result to the output file or stdout.
pub fn run(config: Config) -> Result<(), JsonModelError> {
    let start_time = Instant::now();
    info!("Reformatting: {}", config.input_file.display());
    info!("  Style: {:?}", config.style);

    let bytes = fs::read(&config.input_file).map_err(|e| {
        JsonModelError::Io(
            e,
            format!("Failed to read {}", config.input_file.display()),
        )
    })?;

    let output = match config.style {
        OutputStyle::Compact => {
            let value: serde_json::Value = serde_json::from_slice(&bytes)?;
            serde_json::to_vec(&value)?
        }
        OutputStyle::PrettySorted => pretty::pretty_sort_slice(&bytes, &PrettyOptions::default())?,
    };

    match &config.output_file {
        Some(path) => {
            fs::write(path, &output)
                .map_err(|e| JsonModelError::Io(e, format!("Failed to write {}", path.display())))?;
            info!("  Output: {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&output)
                .and_then(|_| stdout.write_all(b"\n"))
                .map_err(|e| JsonModelError::Io(e, "Failed to write to stdout".to_string()))?;
        }
    }

    info!("Done. (Took {:.2?})", start_time.elapsed());
    Ok(())
}

use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while writing structured records as JSON.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to serialize the value.
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Failed to write output file.
    #[error("failed to write JSON file: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize `value` into JSON bytes.
///
/// `pretty` switches from compact output to two-space indentation. Both forms
/// end with a newline and carry the same content.
pub fn write<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<Vec<u8>, WriteError> {
    let mut bytes = if pretty {
        serde_json::to_vec_pretty(value)?
    } else {
        serde_json::to_vec(value)?
    };
    bytes.push(b'\n');
    Ok(bytes)
}

/// Serialize `value` and write it to `path`.
pub fn write_file<T: Serialize + ?Sized>(
    value: &T,
    path: &Path,
    pretty: bool,
) -> Result<(), WriteError> {
    let bytes = write(value, pretty)?;
    fs::write(path, bytes)?;
    Ok(())
}

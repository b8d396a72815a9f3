use crate::error::{ConfigError, Result};
use serde_json::Value;
use std::path::Path;

/// Loads a JSON document from a file.
///
/// The file is closed before this function returns.
///
/// # Arguments
///
/// * `path` - The file path to read from.
///
/// # Returns
///
/// * `Ok(Value)` containing the parsed document.
/// * `Err` if the file cannot be opened or is not valid JSON.
pub fn load_document(path: &Path) -> Result<Value> {
    let file = std::fs::File::open(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = std::io::BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| ConfigError::Malformed {
        what: "document",
        source,
    })
}

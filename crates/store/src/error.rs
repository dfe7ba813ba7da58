use std::path::PathBuf;
use thiserror::Error;

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The group file exists but could not be read.
    #[error("failed to read group file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The group file or its directory could not be written.
    #[error("failed to write group file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The group file is not a JSON object of strings.
    #[error("failed to parse group file {path}: {source}")]
    ParseGroup {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The group could not be encoded as JSON.
    #[error("failed to serialize group {path}: {source}")]
    EncodeGroup {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// A stored value could not be decoded into the requested type.
    #[error("failed to deserialize value for key '{key}': {source}")]
    Decode {
        key: String,
        source: serde_json::Error,
    },
    /// A value could not be encoded as JSON.
    #[error("failed to serialize value for key '{key}': {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
}

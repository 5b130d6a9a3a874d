//! Error types for solid-demo
//!
//! Library code uses `thiserror`; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for solid-demo operations
pub type DemoResult<T> = Result<T, DemoError>;

/// Main error type for solid-demo operations
#[derive(Error, Debug)]
pub enum DemoError {
    /// Writing to an output sink failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a JSON output line failed
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Configuration file passed on the command line does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },
}

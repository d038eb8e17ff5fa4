//! Error types for redaction options loading.

use thiserror::Error;

/// Result type for redaction options operations.
pub type Result<T> = std::result::Result<T, RedactError>;

/// Errors that can occur while loading or saving redaction options.
///
/// The redaction function itself is total: every URL and options
/// combination has defined behavior, so only the options file surface
/// can fail.
#[derive(Error, Debug)]
pub enum RedactError {
    /// I/O error reading or writing an options file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed options JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

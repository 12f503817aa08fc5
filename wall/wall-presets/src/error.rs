//! Error types for preset storage.

use thiserror::Error;

/// Result type for preset storage operations.
pub type PresetResult<T> = Result<T, PresetError>;

/// Errors that can occur while loading or saving presets.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PresetError {
    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a preset file.
    #[error("preset file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

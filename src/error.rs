//! Error types for the run segmentation library.
//!
//! The segmentation core itself is infallible: any glyph sequence in, a run
//! sequence out. Errors arise only at the collaborator boundaries: reading
//! glyph dumps, serializing output, writing files.

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the input/output boundaries.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed glyph dump supplied by the decoding collaborator
    #[error("Invalid glyph dump: {0}")]
    InvalidInput(String),
}

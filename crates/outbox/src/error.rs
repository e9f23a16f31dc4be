//! Error types for message operations.

/// Result type alias for message operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Message error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Attachment file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Base64 decode error.
    #[error("Base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),
}

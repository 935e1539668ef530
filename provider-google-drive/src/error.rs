//! Error types for Google Drive provider

use bridge_traits::error::BridgeError;
use thiserror::Error;

/// Google Drive provider errors
///
/// The taxonomy exists for logging and tests; at the `DocumentProvider`
/// boundary everything collapses into the single opaque `BridgeError`
/// category the core expects.
#[derive(Error, Debug)]
pub enum GoogleDriveError {
    /// The bearer token was rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Drive returned a non-2xx status not covered by a specific variant
    #[error("Google Drive API error (status {status_code}): {message}")]
    ApiError { status_code: u16, message: String },

    /// The requested file id does not exist (or is not visible)
    #[error("File not found: {file_id}")]
    FileNotFound { file_id: String },

    /// The response body did not match the expected shape
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Transport-level failure, passed through
    #[error(transparent)]
    BridgeError(#[from] BridgeError),
}

/// Result type for Google Drive operations
pub type Result<T> = std::result::Result<T, GoogleDriveError>;

impl From<GoogleDriveError> for BridgeError {
    fn from(error: GoogleDriveError) -> Self {
        match error {
            // Don't double-wrap transport failures
            GoogleDriveError::BridgeError(e) => e,
            other => BridgeError::OperationFailed(other.to_string()),
        }
    }
}

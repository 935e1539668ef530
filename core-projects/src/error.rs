//! Error types for the document-project core

use thiserror::Error;

/// Document-project errors
///
/// Provider failures are a single opaque category: whatever the bridge
/// raised is carried through unmodified. No operation retries or returns
/// a partial result.
#[derive(Error, Debug)]
pub enum ProjectError {
    /// The remote provider or transport failed
    #[error("Provider operation failed: {0}")]
    Provider(#[from] bridge_traits::error::BridgeError),

    /// The tracked-project store failed
    #[error("Repository error: {0}")]
    Repository(#[from] sqlx::Error),

    /// A stored row could not be interpreted
    #[error("Invalid stored record: {0}")]
    InvalidRecord(String),

    /// Bootstrap error
    #[error("Configuration error: {0}")]
    Config(#[from] core_runtime::Error),
}

/// Result type for document-project operations
pub type Result<T> = std::result::Result<T, ProjectError>;

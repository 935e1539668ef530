use thiserror::Error;

/// Failure surfaced by a bridge capability
///
/// Deliberately coarse: callers above the bridge treat any failure as
/// one opaque category and propagate it unmodified.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Bridge operation failed: {0}")]
    OperationFailed(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;

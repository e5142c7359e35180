//! Client-side error definitions.

use thiserror::Error;

/// Errors a remote call can end with
///
/// A room that does not exist is not an error; lookups return `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RpcError {
    /// The server rejected the arguments; retrying with the same input fails again
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The server could not be reached, the name is not bound, or the reply was unusable
    #[error("Communication error: {0}")]
    Communication(String),
}

impl From<reqwest::Error> for RpcError {
    fn from(error: reqwest::Error) -> Self {
        RpcError::Communication(error.to_string())
    }
}

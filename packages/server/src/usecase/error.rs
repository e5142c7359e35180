//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{RepositoryError, ValueObjectError};

/// Errors returned by calculator operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// The caller supplied malformed input; retrying with the same input fails again
    #[error("{0}")]
    InvalidInput(#[from] ValueObjectError),
}

/// Errors returned by room directory operations
///
/// An unknown room is not an error; lookups return `Ok(None)` for it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoomLookupError {
    /// The room store failed
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

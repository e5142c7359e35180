//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// RoomNumber validation error
    #[error("RoomNumber cannot be empty")]
    RoomNumberEmpty,

    /// RoomNumber too long error
    #[error("RoomNumber cannot exceed {max} characters (got {actual})")]
    RoomNumberTooLong { max: usize, actual: usize },

    /// Marks count error
    #[error("Marks array must have exactly {expected} elements (got {actual})")]
    MarksWrongLength { expected: usize, actual: usize },

    /// Single mark out of range error
    #[error("Each mark must be between {min} and {max}. Found: {found}")]
    MarkOutOfRange { min: i32, max: i32, found: i64 },
}

/// Errors raised by repository implementations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store could not be read
    #[error("Room store unavailable: {0}")]
    Unavailable(String),

    /// Two records share one room number
    #[error("Duplicate room number: {0}")]
    DuplicateRoomNumber(String),
}

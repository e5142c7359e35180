//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Maximum length of a room number
pub const ROOM_NUMBER_MAX_LEN: usize = 16;

/// Number of subjects a CGPA is computed over
pub const SUBJECT_COUNT: usize = 5;

/// Lowest valid mark for a subject
pub const MIN_MARK: i32 = 0;

/// Highest valid mark for a subject
pub const MAX_MARK: i32 = 100;

/// Room number value object.
///
/// Identifies a hostel room, e.g. `"101"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomNumber(String);

impl RoomNumber {
    /// Create a new RoomNumber.
    ///
    /// # Arguments
    ///
    /// * `number` - The room number string
    ///
    /// # Returns
    ///
    /// A Result containing the RoomNumber or an error if validation fails
    pub fn new(number: String) -> Result<Self, ValueObjectError> {
        if number.is_empty() {
            return Err(ValueObjectError::RoomNumberEmpty);
        }
        let len = number.chars().count();
        if len > ROOM_NUMBER_MAX_LEN {
            return Err(ValueObjectError::RoomNumberTooLong {
                max: ROOM_NUMBER_MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(number))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoomNumber {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoomNumber> for String {
    fn from(value: RoomNumber) -> Self {
        value.0
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Subject marks value object.
///
/// Always holds exactly [`SUBJECT_COUNT`] marks, each within
/// [`MIN_MARK`]..=[`MAX_MARK`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marks([i32; SUBJECT_COUNT]);

impl Marks {
    /// Create a new Marks value from raw subject marks.
    ///
    /// Length is checked before range, so a short list with a bad mark
    /// reports the length problem. Marks arrive as `i64` so that values
    /// beyond `i32` are still reported as out of range.
    pub fn new(marks: &[i64]) -> Result<Self, ValueObjectError> {
        let values: [i64; SUBJECT_COUNT] =
            marks
                .try_into()
                .map_err(|_| ValueObjectError::MarksWrongLength {
                    expected: SUBJECT_COUNT,
                    actual: marks.len(),
                })?;

        let range = i64::from(MIN_MARK)..=i64::from(MAX_MARK);
        if let Some(&found) = values.iter().find(|m| !range.contains(*m)) {
            return Err(ValueObjectError::MarkOutOfRange {
                min: MIN_MARK,
                max: MAX_MARK,
                found,
            });
        }

        // every value is within MIN_MARK..=MAX_MARK here
        Ok(Self(values.map(|m| m as i32)))
    }

    /// Sum of all subject marks.
    pub fn total(&self) -> i32 {
        self.0.iter().sum()
    }

    /// Maximum obtainable total.
    pub fn max_total() -> i32 {
        MAX_MARK * SUBJECT_COUNT as i32
    }

}

//! Core domain models for the room directory.

use serde::{Deserialize, Serialize};

use super::value_object::RoomNumber;

/// Represents one hostel room and the people living in it
///
/// Records are created once when the directory is seeded and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    /// Room identifier (unique within the directory)
    pub room_number: RoomNumber,
    /// Occupants in the order they were registered
    pub occupant_names: Vec<String>,
    /// Phone number of the warden responsible for the room
    pub warden_contact: String,
}

impl RoomRecord {
    /// Create a new room record
    pub fn new(
        room_number: RoomNumber,
        occupant_names: Vec<String>,
        warden_contact: impl Into<String>,
    ) -> Self {
        Self {
            room_number,
            occupant_names,
            warden_contact: warden_contact.into(),
        }
    }
}

//! Repository trait for the room directory.
//!
//! ドメイン層が Repository のインターフェースを定義し、
//! Infrastructure 層がその実装を提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{entity::RoomRecord, error::RepositoryError, value_object::RoomNumber};

/// Read-only access to seeded room records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Find a room by exact room number.
    ///
    /// Returns `Ok(None)` when no record has that number.
    async fn find_by_number(
        &self,
        room_number: &RoomNumber,
    ) -> Result<Option<RoomRecord>, RepositoryError>;

    /// All room numbers, in no particular order.
    async fn list_room_numbers(&self) -> Result<Vec<RoomNumber>, RepositoryError>;
}

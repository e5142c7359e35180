//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。
//!
//! 起動時に一度だけ投入（シード）され、その後は読み取り専用です。
//! 変更操作が存在しないため、ロックは不要です。

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::{RepositoryError, RoomNumber, RoomRecord, RoomRepository};

/// インメモリ Room Repository 実装
///
/// HashMap をインメモリ DB として使用する実装。
/// ドメイン層の RoomRepository trait を実装します（依存性の逆転）。
#[derive(Debug, Default)]
pub struct InMemoryRoomRepository {
    /// 部屋番号 -> 部屋情報
    rooms: HashMap<RoomNumber, RoomRecord>,
}

impl InMemoryRoomRepository {
    /// 部屋情報の一覧から InMemoryRoomRepository を作成
    ///
    /// # Errors
    ///
    /// 同じ部屋番号が複数含まれる場合は `RepositoryError::DuplicateRoomNumber`
    pub fn from_records(
        records: impl IntoIterator<Item = RoomRecord>,
    ) -> Result<Self, RepositoryError> {
        let mut rooms = HashMap::new();
        for record in records {
            let key = record.room_number.clone();
            if rooms.insert(key.clone(), record).is_some() {
                return Err(RepositoryError::DuplicateRoomNumber(key.into_string()));
            }
        }
        tracing::info!("Room database initialized with {} rooms", rooms.len());
        Ok(Self { rooms })
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn find_by_number(
        &self,
        room_number: &RoomNumber,
    ) -> Result<Option<RoomRecord>, RepositoryError> {
        Ok(self.rooms.get(room_number).cloned())
    }

    async fn list_room_numbers(&self) -> Result<Vec<RoomNumber>, RepositoryError> {
        Ok(self.rooms.keys().cloned().collect())
    }
}

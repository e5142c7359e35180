//! UseCase: 部屋情報の検索
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RoomDirectoryUseCase::get_room_info() / get_all_room_numbers()
//!
//! ### なぜこのテストが必要か
//! - 存在しない部屋は「エラー」ではなく「見つからない」という正常な結果であることを保証
//! - 部屋番号一覧が常に昇順で返されることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：存在する部屋、一覧の取得
//! - 見つからない：未登録の部屋番号、部屋番号として不正な文字列
//! - 異常系：Repository のエラー

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{RoomNumber, RoomRecord, RoomRepository};

use super::error::RoomLookupError;

/// 部屋情報検索のユースケース
pub struct RoomDirectoryUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl RoomDirectoryUseCase {
    /// 新しい RoomDirectoryUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 部屋番号で部屋情報を検索
    ///
    /// # Arguments
    ///
    /// * `room_number` - 検索する部屋番号（完全一致）
    ///
    /// # Returns
    ///
    /// * `Ok(Some(RoomRecord))` - 部屋が見つかった
    /// * `Ok(None)` - 部屋が見つからない（部屋番号として不正な文字列を含む）
    /// * `Err(RoomLookupError)` - Repository のエラー
    pub async fn get_room_info(
        &self,
        room_number: &str,
    ) -> Result<Option<RoomRecord>, RoomLookupError> {
        info!("Request received for room: {}", room_number);

        let room_number = match RoomNumber::new(room_number.to_string()) {
            Ok(number) => number,
            Err(e) => {
                // No record can carry an invalid number
                debug!("Room number '{}' cannot match any room: {}", room_number, e);
                return Ok(None);
            }
        };

        let record = self.repository.find_by_number(&room_number).await?;
        match &record {
            Some(_) => info!("Room info retrieved successfully: {}", room_number),
            None => info!("Room not found: {}", room_number),
        }
        Ok(record)
    }

    /// 全ての部屋番号を昇順で取得
    pub async fn get_all_room_numbers(&self) -> Result<Vec<String>, RoomLookupError> {
        info!("Request received for all room numbers");
        let mut numbers = self.repository.list_room_numbers().await?;
        numbers.sort();
        Ok(numbers.into_iter().map(RoomNumber::into_string).collect())
    }
}

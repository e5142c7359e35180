//! Remote call DTOs.
//!
//! Requests are JSON objects posted to `/rpc/{service}/{method}`; successful
//! calls answer `{"result": ...}` and failures answer `{"error": {...}}`.

use serde::{Deserialize, Serialize};

use crate::domain::{RoomNumber, RoomRecord, ValueObjectError};

/// Registry name of the calculator service
pub const CALC_SERVICE: &str = "CalcService";

/// Registry name of the room directory service
pub const ROOM_SERVICE: &str = "RoomService";

/// Method names understood by [`CALC_SERVICE`]
pub mod calc_methods {
    pub const CALCULATE_TAX: &str = "calculateTax";
    pub const CALCULATE_CGPA: &str = "calculateCGPA";
    pub const IS_ELIGIBLE_TO_VOTE: &str = "isEligibleToVote";
}

/// Method names understood by [`ROOM_SERVICE`]
pub mod room_methods {
    pub const GET_ROOM_INFO: &str = "getRoomInfo";
    pub const GET_ALL_ROOM_NUMBERS: &str = "getAllRoomNumbers";
}

/// Arguments of `calculateTax`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxArgs {
    pub income: f64,
}

/// Arguments of `calculateCGPA`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CgpaArgs {
    /// Decoded wider than a mark so that oversized values fail validation
    pub marks: Vec<i64>,
}

/// Arguments of `isEligibleToVote`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteArgs {
    pub age: i32,
}

/// Arguments of `getRoomInfo`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomInfoArgs {
    pub room_number: String,
}

/// Arguments of methods that take none
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoArgs {}

/// Successful call envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse<T> {
    pub result: T,
}

/// Error kind reported to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RpcErrorKind {
    NotBound,
    MethodNotFound,
    BadArguments,
    InvalidInput,
    Internal,
}

/// Error details inside the failure envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcErrorDetail {
    pub kind: RpcErrorKind,
    pub message: String,
}

/// Failed call envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcErrorBody {
    pub error: RpcErrorDetail,
}

/// Room record as it travels over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecordDto {
    pub room_number: String,
    pub occupant_names: Vec<String>,
    pub warden_contact: String,
}

impl From<RoomRecord> for RoomRecordDto {
    fn from(record: RoomRecord) -> Self {
        Self {
            room_number: record.room_number.into_string(),
            occupant_names: record.occupant_names,
            warden_contact: record.warden_contact,
        }
    }
}

impl TryFrom<RoomRecordDto> for RoomRecord {
    type Error = ValueObjectError;

    fn try_from(dto: RoomRecordDto) -> Result<Self, Self::Error> {
        Ok(RoomRecord::new(
            RoomNumber::new(dto.room_number)?,
            dto.occupant_names,
            dto.warden_contact,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_serializes_snake_case() {
        // テスト項目: エラー種別が snake_case で直列化される
        // when (操作):
        let body = RpcErrorBody {
            error: RpcErrorDetail {
                kind: RpcErrorKind::InvalidInput,
                message: "bad".to_string(),
            },
        };
        let json = serde_json::to_value(&body).unwrap();

        // then (期待する結果):
        assert_eq!(json["error"]["kind"], "invalid_input");
        assert_eq!(json["error"]["message"], "bad");
    }

    #[test]
    fn test_room_record_dto_from_domain() {
        // テスト項目: ドメインの RoomRecord から DTO へ変換できる
        // given (前提条件):
        let record = RoomRecord::new(
            RoomNumber::new("103".to_string()).unwrap(),
            vec!["Arjun Singh".to_string()],
            "+91-9876543211",
        );

        // when (操作):
        let dto = RoomRecordDto::from(record);

        // then (期待する結果):
        assert_eq!(dto.room_number, "103");
        assert_eq!(dto.occupant_names, vec!["Arjun Singh".to_string()]);
        assert_eq!(dto.warden_contact, "+91-9876543211");
    }
}

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    infrastructure::dto::rpc::{
        NoArgs, ROOM_SERVICE, RoomInfoArgs, RoomRecordDto,
        room_methods::{GET_ALL_ROOM_NUMBERS, GET_ROOM_INFO},
    },
    ui::error::DispatchError,
    usecase::{RoomDirectoryUseCase, RoomLookupError},
};

use super::{RemoteService, decode_args, encode_result, unknown_method};

const METHODS: &[&str] = &[GET_ROOM_INFO, GET_ALL_ROOM_NUMBERS];

/// `RoomService`: read-only hostel room directory
pub struct RoomServiceEndpoint {
    usecase: RoomDirectoryUseCase,
}

impl RoomServiceEndpoint {
    pub fn new(usecase: RoomDirectoryUseCase) -> Self {
        Self { usecase }
    }
}

impl From<RoomLookupError> for DispatchError {
    fn from(error: RoomLookupError) -> Self {
        DispatchError::Internal(error.to_string())
    }
}

#[async_trait]
impl RemoteService for RoomServiceEndpoint {
    fn name(&self) -> &'static str {
        ROOM_SERVICE
    }

    fn methods(&self) -> &'static [&'static str] {
        METHODS
    }

    async fn invoke(&self, method: &str, args: Value) -> Result<Value, DispatchError> {
        match method {
            GET_ROOM_INFO => {
                let args: RoomInfoArgs = decode_args(args)?;
                let record = self.usecase.get_room_info(&args.room_number).await?;
                // Unknown rooms travel as `null`
                encode_result(record.map(RoomRecordDto::from))
            }
            GET_ALL_ROOM_NUMBERS => {
                let _: NoArgs = decode_args(args)?;
                encode_result(self.usecase.get_all_room_numbers().await?)
            }
            _ => Err(unknown_method(self, method)),
        }
    }
}

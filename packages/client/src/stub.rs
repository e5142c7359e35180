//! Typed client stubs for CalcService and RoomService.

use async_trait::async_trait;
use minirpc_server::infrastructure::dto::rpc::{
    CALC_SERVICE, CgpaArgs, NoArgs, ROOM_SERVICE, RoomInfoArgs, RoomRecordDto, TaxArgs, VoteArgs,
    calc_methods, room_methods,
};

use crate::{
    error::RpcError,
    registry::{Registry, ServiceHandle},
};

/// Client-side contract of `CalcService`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CalcService: Send + Sync {
    async fn calculate_tax(&self, income: f64) -> Result<f64, RpcError>;

    /// Fails with `RpcError::InvalidInput` unless `marks` holds five values in 0..=100.
    async fn calculate_cgpa(&self, marks: Vec<i32>) -> Result<f64, RpcError>;

    async fn is_eligible_to_vote(&self, age: i32) -> Result<bool, RpcError>;
}

/// Client-side contract of `RoomService`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomService: Send + Sync {
    /// `Ok(None)` when no room has that number.
    async fn get_room_info(&self, room_number: &str) -> Result<Option<RoomRecordDto>, RpcError>;

    /// Room numbers in ascending order.
    async fn get_all_room_numbers(&self) -> Result<Vec<String>, RpcError>;
}

/// Remote `CalcService` stub
#[derive(Debug, Clone)]
pub struct CalcServiceClient {
    handle: ServiceHandle,
}

impl CalcServiceClient {
    /// Resolve `CalcService` in the registry.
    pub async fn connect(registry: &Registry) -> Result<Self, RpcError> {
        let handle = registry.lookup(CALC_SERVICE).await?;
        Ok(Self { handle })
    }
}

#[async_trait]
impl CalcService for CalcServiceClient {
    async fn calculate_tax(&self, income: f64) -> Result<f64, RpcError> {
        self.handle
            .call(calc_methods::CALCULATE_TAX, &TaxArgs { income })
            .await
    }

    async fn calculate_cgpa(&self, marks: Vec<i32>) -> Result<f64, RpcError> {
        self.handle
            .call(
                calc_methods::CALCULATE_CGPA,
                &CgpaArgs {
                    marks: marks.into_iter().map(i64::from).collect(),
                },
            )
            .await
    }

    async fn is_eligible_to_vote(&self, age: i32) -> Result<bool, RpcError> {
        self.handle
            .call(calc_methods::IS_ELIGIBLE_TO_VOTE, &VoteArgs { age })
            .await
    }
}

/// Remote `RoomService` stub
#[derive(Debug, Clone)]
pub struct RoomServiceClient {
    handle: ServiceHandle,
}

impl RoomServiceClient {
    /// Resolve `RoomService` in the registry.
    pub async fn connect(registry: &Registry) -> Result<Self, RpcError> {
        let handle = registry.lookup(ROOM_SERVICE).await?;
        Ok(Self { handle })
    }
}

#[async_trait]
impl RoomService for RoomServiceClient {
    async fn get_room_info(&self, room_number: &str) -> Result<Option<RoomRecordDto>, RpcError> {
        let args = RoomInfoArgs {
            room_number: room_number.to_string(),
        };
        self.handle.call(room_methods::GET_ROOM_INFO, &args).await
    }

    async fn get_all_room_numbers(&self) -> Result<Vec<String>, RpcError> {
        self.handle
            .call(room_methods::GET_ALL_ROOM_NUMBERS, &NoArgs {})
            .await
    }
}

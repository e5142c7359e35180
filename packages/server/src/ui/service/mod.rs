//! Remote-callable services.
//!
//! Each service exposes a fixed set of method names and decodes its own
//! JSON arguments. Instances are bound by name in the
//! [`ServiceRegistry`](crate::ui::registry::ServiceRegistry).

mod calc;
mod room;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use super::error::DispatchError;

pub use calc::CalcServiceEndpoint;
pub use room::RoomServiceEndpoint;

/// A service instance that can be bound in the registry and invoked by method name
#[async_trait]
pub trait RemoteService: Send + Sync {
    /// Name the service is bound under
    fn name(&self) -> &'static str;

    /// Method names the service answers to
    fn methods(&self) -> &'static [&'static str];

    /// Invoke `method` with JSON-encoded `args`
    async fn invoke(&self, method: &str, args: Value) -> Result<Value, DispatchError>;
}

/// Decode method arguments, reporting shape errors as `BadArguments`.
pub(crate) fn decode_args<T: DeserializeOwned>(args: Value) -> Result<T, DispatchError> {
    serde_json::from_value(args).map_err(|e| DispatchError::BadArguments(e.to_string()))
}

/// Encode a method result.
pub(crate) fn encode_result<T: Serialize>(result: T) -> Result<Value, DispatchError> {
    serde_json::to_value(result).map_err(|e| DispatchError::Internal(e.to_string()))
}

/// Error for a method the service does not have.
pub(crate) fn unknown_method(service: &dyn RemoteService, method: &str) -> DispatchError {
    DispatchError::MethodNotFound {
        service: service.name().to_string(),
        method: method.to_string(),
    }
}

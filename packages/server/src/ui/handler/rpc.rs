//! Remote call endpoint.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use serde_json::Value;

use crate::{
    infrastructure::dto::rpc::RpcResponse,
    ui::{error::DispatchError, state::AppState},
};

/// `POST /rpc/{service}/{method}`
///
/// The body is a JSON object of named arguments; an empty body means no arguments.
pub async fn invoke_method(
    State(state): State<Arc<AppState>>,
    Path((service, method)): Path<(String, String)>,
    body: Bytes,
) -> Result<Json<RpcResponse<Value>>, DispatchError> {
    let args = parse_body(&body)?;

    match state.registry.dispatch(&service, &method, args).await {
        Ok(result) => {
            tracing::debug!("{}.{} returned {}", service, method, result);
            Ok(Json(RpcResponse { result }))
        }
        Err(e) => {
            tracing::warn!("{}.{} failed: {}", service, method, e);
            Err(e)
        }
    }
}

fn parse_body(body: &[u8]) -> Result<Value, DispatchError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    let value: Value =
        serde_json::from_slice(body).map_err(|e| DispatchError::BadArguments(e.to_string()))?;
    if !value.is_object() {
        return Err(DispatchError::BadArguments(
            "arguments must be a JSON object".to_string(),
        ));
    }
    Ok(value)
}

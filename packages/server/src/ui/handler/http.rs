//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    infrastructure::dto::http::{HealthDto, ServiceBindingDto},
    ui::{error::DispatchError, state::AppState},
};

/// Health check endpoint
pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}

/// List every bound service
pub async fn list_services(State(state): State<Arc<AppState>>) -> Json<Vec<ServiceBindingDto>> {
    Json(state.registry.bindings())
}

/// Resolve one service name
pub async fn get_service(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<ServiceBindingDto>, DispatchError> {
    match state.registry.describe(&name) {
        Some(binding) => {
            tracing::debug!("Resolved service '{}'", name);
            Ok(Json(binding))
        }
        None => {
            tracing::warn!("Lookup for unbound service '{}'", name);
            Err(DispatchError::NotBound(name))
        }
    }
}

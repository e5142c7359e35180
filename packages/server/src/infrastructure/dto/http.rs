//! HTTP API response DTOs for the registry endpoints.

use serde::{Deserialize, Serialize};

/// A service name bound in the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceBindingDto {
    pub name: String,
    pub methods: Vec<String>,
    pub bound_at: String, // ISO 8601
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
}

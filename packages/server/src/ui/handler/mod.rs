//! Handler modules for registry and remote call endpoints.

pub mod http;
pub mod rpc;

// Re-export HTTP handlers
pub use http::{get_service, health_check, list_services};

// Re-export RPC handlers
pub use rpc::invoke_method;

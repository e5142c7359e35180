//! Server state shared with every handler.

use super::registry::ServiceRegistry;

/// Shared application state
pub struct AppState {
    /// Bound services; read-only once the server is running
    pub registry: ServiceRegistry,
}

impl AppState {
    pub fn new(registry: ServiceRegistry) -> Self {
        Self { registry }
    }
}

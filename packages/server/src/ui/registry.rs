//! Name-based service registry.
//!
//! The server binds service instances under well-known names at startup;
//! clients resolve a name before invoking its methods. The registry is
//! built once and read-only while the server runs.

use std::{collections::HashMap, sync::Arc};

use minirpc_shared::time::{get_jst_timestamp, timestamp_to_jst_rfc3339};
use serde_json::Value;

use crate::infrastructure::dto::http::ServiceBindingDto;

use super::{error::DispatchError, service::RemoteService};

/// A bound service and when it was bound
struct Binding {
    service: Arc<dyn RemoteService>,
    /// Unix timestamp in JST (milliseconds)
    bound_at: i64,
}

/// Registry mapping service names to instances
#[derive(Default)]
pub struct ServiceRegistry {
    bindings: HashMap<String, Binding>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `service` under its own name, replacing any earlier binding.
    ///
    /// Returns the previously bound instance, if there was one.
    pub fn bind(&mut self, service: Arc<dyn RemoteService>) -> Option<Arc<dyn RemoteService>> {
        let name = service.name().to_string();
        let previous = self.bindings.insert(
            name.clone(),
            Binding {
                service,
                bound_at: get_jst_timestamp(),
            },
        );
        match previous {
            Some(old) => {
                tracing::info!("{} rebound in registry", name);
                Some(old.service)
            }
            None => {
                tracing::info!("{} bound in registry", name);
                None
            }
        }
    }

    /// Resolve a name to its service instance.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn RemoteService>> {
        self.bindings.get(name).map(|b| Arc::clone(&b.service))
    }

    /// Describe one binding.
    pub fn describe(&self, name: &str) -> Option<ServiceBindingDto> {
        self.bindings.get(name).map(|b| to_dto(name, b))
    }

    /// Describe every binding, sorted by name.
    pub fn bindings(&self) -> Vec<ServiceBindingDto> {
        let mut list: Vec<ServiceBindingDto> = self
            .bindings
            .iter()
            .map(|(name, b)| to_dto(name, b))
            .collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        list
    }

    /// Resolve `service` and invoke `method` on it.
    pub async fn dispatch(
        &self,
        service: &str,
        method: &str,
        args: Value,
    ) -> Result<Value, DispatchError> {
        let instance = self
            .lookup(service)
            .ok_or_else(|| DispatchError::NotBound(service.to_string()))?;
        instance.invoke(method, args).await
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

fn to_dto(name: &str, binding: &Binding) -> ServiceBindingDto {
    ServiceBindingDto {
        name: name.to_string(),
        methods: binding
            .service
            .methods()
            .iter()
            .map(|m| m.to_string())
            .collect(),
        bound_at: timestamp_to_jst_rfc3339(binding.bound_at),
    }
}

//! Calculator and hostel room directory RPC server.
//!
//! Services are bound by name in a registry and invoked over HTTP+JSON
//! with `POST /rpc/{service}/{method}`.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::{build_registry, create_app, run_server, serve};

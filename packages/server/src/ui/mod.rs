//! RPC server: registry, remote service endpoints and HTTP transport.

pub mod error;
mod handler;
pub mod registry;
mod runner;
pub mod service;
mod signal;
pub mod state;

pub use runner::{REQUEST_ID_HEADER, build_registry, create_app, run_server, serve};

//! CLI clients for the minirpc services.
//!
//! A client resolves a service name in the server's registry, then invokes
//! methods through a typed stub. Each call blocks the caller until the
//! server answers or the transport fails.

pub mod calculator_menu;
pub mod config;
pub mod error;
pub mod prompt;
pub mod registry;
pub mod room_browser;
pub mod stub;

pub use error::RpcError;
pub use registry::{Registry, ServiceHandle};
pub use stub::{CalcService, CalcServiceClient, RoomService, RoomServiceClient};

//! Server startup and runtime errors.

use std::net::SocketAddr;

use thiserror::Error;

use crate::infrastructure::seed::SeedError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to seed room directory: {0}")]
    Seed(#[from] SeedError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

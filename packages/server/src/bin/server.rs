//! Calculator and room directory RPC server.
//!
//! Binds `CalcService` and `RoomService` in the registry and waits for clients.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin minirpc-server -- --port 1099
//! ```

use clap::Parser;
use minirpc_server::ServerConfig;
use minirpc_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = minirpc_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

//! Test fixtures: an in-process RPC server on a fixed local port.
#![allow(dead_code)]

use minirpc_server::{ServerConfig, build_registry, create_app, serve};
use tokio::{net::TcpListener, task::JoinHandle};

pub struct TestServer {
    port: u16,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server binding every service with the built-in seed data.
    pub async fn start(port: u16) -> Self {
        Self::start_with(ServerConfig {
            port,
            ..ServerConfig::default()
        })
        .await
    }

    pub async fn start_with(config: ServerConfig) -> Self {
        let port = config.port;
        let registry = build_registry(&config).expect("Failed to build registry");
        let app = create_app(registry);
        let listener = TcpListener::bind(config.socket_addr())
            .await
            .expect("Failed to bind test port");

        let handle = tokio::spawn(async move {
            let _ = serve(listener, app, std::future::pending()).await;
        });

        Self { port, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

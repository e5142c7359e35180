//! Server configuration (command-line arguments).

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use clap::{Parser, ValueEnum};

/// Well-known port clients rendezvous on
pub const DEFAULT_PORT: u16 = 1099;

/// Services a server can bind
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServiceKind {
    /// CalcService: tax, CGPA, voting eligibility
    Calc,
    /// RoomService: hostel room directory
    Room,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "minirpc-server", version, about = "RPC server for the calculator and room directory services")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// JSON file of room records to seed the directory with
    #[arg(long, value_name = "PATH")]
    pub rooms_file: Option<PathBuf>,

    /// Service to bind (repeatable); binds every service when omitted
    #[arg(long = "service", value_enum)]
    pub services: Vec<ServiceKind>,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            rooms_file: None,
            services: Vec::new(),
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Services to bind, without duplicates, in declaration order.
    pub fn enabled_services(&self) -> Vec<ServiceKind> {
        if self.services.is_empty() {
            return ServiceKind::value_variants().to_vec();
        }
        let mut kinds = Vec::new();
        for kind in &self.services {
            if !kinds.contains(kind) {
                kinds.push(*kind);
            }
        }
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // テスト項目: 引数なしでは 127.0.0.1:1099 で全サービスを登録する
        // when (操作):
        let config = ServerConfig::parse_from(["minirpc-server"]);

        // then (期待する結果):
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:1099");
        assert_eq!(
            config.enabled_services(),
            vec![ServiceKind::Calc, ServiceKind::Room]
        );
        assert!(config.rooms_file.is_none());
    }

    #[test]
    fn test_service_selection() {
        // テスト項目: --service で登録するサービスを絞り込める（重複は無視）
        // when (操作):
        let config = ServerConfig::parse_from([
            "minirpc-server",
            "--service",
            "room",
            "--service",
            "room",
            "--port",
            "2000",
        ]);

        // then (期待する結果):
        assert_eq!(config.enabled_services(), vec![ServiceKind::Room]);
        assert_eq!(config.port, 2000);
    }
}

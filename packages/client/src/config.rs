//! Client configuration (command-line arguments).

use clap::{Parser, Subcommand};

use crate::registry::DEFAULT_SERVER_URL;

#[derive(Debug, Clone, Parser)]
#[command(name = "minirpc-client", version, about = "Clients for the calculator and room directory services")]
pub struct ClientArgs {
    /// Base URL of the server registry
    #[arg(long, default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Calculator text menu (tax, CGPA, voting age)
    Calc,
    /// Hostel room browser
    Rooms,
    /// List the services bound on the server
    Services,
}

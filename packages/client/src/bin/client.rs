//! minirpc client.
//!
//! Resolves a service in the server registry and drives it interactively.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin minirpc-client -- calc
//! cargo run --bin minirpc-client -- rooms
//! cargo run --bin minirpc-client -- --server http://127.0.0.1:1099 services
//! ```

use std::io::{self, IsTerminal, Write};

use clap::Parser;
use minirpc_client::{
    CalcServiceClient, Registry, RoomServiceClient, RpcError,
    calculator_menu::run_calculator_menu,
    config::{ClientArgs, Command},
    prompt::{Prompt, ReaderPrompt, TerminalPrompt},
    room_browser::RoomBrowser,
};
use minirpc_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let args = ClientArgs::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    if let Err(e) = run(args).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run(args: ClientArgs) -> Result<(), Box<dyn std::error::Error>> {
    let registry = Registry::new(args.server);
    let mut out = io::stdout();

    match args.command {
        Command::Services => {
            let bindings = registry.list().await.map_err(connect_failed)?;
            writeln!(out, "Services bound at {}:", registry.base_url())?;
            for binding in bindings {
                writeln!(
                    out,
                    "{:<12} {}  (bound {})",
                    binding.name,
                    binding.methods.join(", "),
                    binding.bound_at
                )?;
            }
        }
        Command::Calc => {
            let service = CalcServiceClient::connect(&registry)
                .await
                .map_err(connect_failed)?;
            let mut prompt = open_prompt()?;
            run_calculator_menu(&service, prompt.as_mut(), &mut out).await?;
        }
        Command::Rooms => {
            let service = RoomServiceClient::connect(&registry)
                .await
                .map_err(connect_failed)?;
            tracing::info!("Connected to Room Service successfully");
            let mut prompt = open_prompt()?;
            RoomBrowser::new(&service)
                .run(prompt.as_mut(), &mut out)
                .await?;
        }
    }

    Ok(())
}

/// Line editing on a terminal, plain line reading when stdin is piped.
fn open_prompt() -> Result<Box<dyn Prompt>, Box<dyn std::error::Error>> {
    if io::stdin().is_terminal() {
        Ok(Box::new(TerminalPrompt::new()?))
    } else {
        Ok(Box::new(ReaderPrompt::new(io::stdin().lock())))
    }
}

fn connect_failed(error: RpcError) -> String {
    format!("Failed to connect to server. Please ensure the server is running.\n{error}")
}

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use kotoba_config::Config;

pub mod error;
pub mod interactive;
pub mod logging;
pub mod routes;
pub mod server;
pub mod state;

#[cfg(test)]
mod tests;

use self::state::AppState;

#[derive(Parser)]
#[command(name = "kotoba", version, about = "Japanese word lookup across Jisho, Daum and Naver")]
struct Cli {
    /// JSON config file; env vars and defaults are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API (default)
    Serve {
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
    /// Run one aggregated search and print it as JSON
    Lookup { query: String },
    /// Search session on stdin with suggestions and pivots
    Interactive,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    logging::init(&config.log_level);

    let state = Arc::new(AppState::from_config(config)?);

    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => {
            let addr = bind.unwrap_or(state.config.server.bind_addr);
            server::serve(state, addr).await
        }
        Command::Lookup { query } => {
            let Some(results) = state.orchestrator.search(&query).await else {
                anyhow::bail!("Query is empty");
            };
            println!("{}", serde_json::to_string_pretty(&results)?);
            Ok(())
        }
        Command::Interactive => interactive::run(state).await,
    }
}

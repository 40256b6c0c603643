//! Payroll HTTP server.
//!
//! Usage: payroll-server [--bind <ADDR>] [--roster <FILE>]
//!
//! Endpoints:
//!   POST /payroll  Compute a report for the submitted staff
//!   GET  /roster   Report for the roster loaded at startup

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::RosterLoader;

/// Payroll server - serves payroll reports over HTTP
#[derive(Parser, Debug)]
#[command(name = "payroll-server")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// YAML roster served at GET /roster (defaults to the built-in sample)
    #[arg(short, long)]
    roster: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let roster = match &cli.roster {
        Some(path) => RosterLoader::load(path)?,
        None => RosterLoader::sample(),
    };
    roster
        .build_organization()
        .and_then(|organization| organization.report())
        .context("roster does not describe a valid organization")?;

    let app = create_router(AppState::new(roster));
    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("failed to bind {}", cli.bind))?;

    info!(addr = %cli.bind, "Payroll server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

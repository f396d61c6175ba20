//! Club platform API gateway (v1)
//!
//! A stateless gateway built with Tokio and Axum. Every `/api/...` endpoint
//! forwards to one backend API and reshapes the answer into a uniform
//! envelope with localized error messages.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────┐
//!                         │                 CLUB GATEWAY                  │
//!                         │                                               │
//!     Client Request      │  ┌─────────┐    ┌──────────┐    ┌──────────┐  │
//!     ────────────────────┼─▶│  http   │───▶│  routes  │───▶│ upstream │──┼──▶ Backend
//!                         │  │ server  │    │  table   │    │ forward  │  │     API
//!                         │  └─────────┘    └──────────┘    └────┬─────┘  │
//!                         │                                      │        │
//!     Client Response     │                 ┌──────────┐         │        │
//!     ◀───────────────────┼─────────────────│normalize │◀────────┘        │
//!                         │                 └──────────┘                  │
//!                         │                                               │
//!                         │  config · observability · lifecycle           │
//!                         └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use club_gateway::config::{self, ConfigOverrides};
use club_gateway::lifecycle::{signals, startup, Shutdown};
use club_gateway::observability::logging;

#[derive(Parser)]
#[command(name = "club-gateway")]
#[command(about = "API gateway in front of the club platform backend", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults and CLUB_GATEWAY_* variables apply without one.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override upstream.base_url.
    #[arg(short, long)]
    upstream: Option<String>,

    /// Validate the configuration and exit.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        bind_address: cli.bind.clone(),
        upstream_url: cli.upstream.clone(),
    };
    let config = match config::load_config(cli.config.as_deref(), &overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("club-gateway: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.check {
        println!("configuration OK");
        return ExitCode::SUCCESS;
    }

    if let Err(e) = logging::init(&config.observability) {
        eprintln!("club-gateway: failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    tracing::info!("club-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    for name in config::loader::active_env_overrides() {
        tracing::info!("{name} set, overriding configuration");
    }

    let started = match startup::start(config).await {
        Ok(started) => started,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return ExitCode::FAILURE;
        }
    };

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    if let Err(e) = started
        .server
        .run(started.listener, shutdown.subscribe())
        .await
    {
        tracing::error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}

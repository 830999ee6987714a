//! Holidays HTTP server.
//!
//! # Usage
//!
//! ```sh
//! holidays-server --data-dir ./data --bind 127.0.0.1:8081
//! ```
//!
//! Settings come from `config/default.toml` (or `--config`), then
//! `HOLIDAYS__*` environment variables, then the flags below.  Log verbosity
//! follows `RUST_LOG` and defaults to `info`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hl_core::Settings;
use hl_server::{build_router, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "holidays-server")]
#[command(about = "Serve public holidays and workdays over HTTP")]
struct Args {
    /// TOML settings file.
    #[arg(short, long, env = "HOLIDAYS_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address, e.g. `0.0.0.0:8081`.
    #[arg(short, long)]
    bind: Option<String>,

    /// Directory holding `<year>.json` files.
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut settings =
        Settings::load(args.config.as_deref()).context("failed to load settings")?;
    if let Some(bind) = args.bind {
        settings.server.bind = bind;
    }
    if let Some(dir) = args.data_dir {
        settings.data.dir = dir;
    }
    let addr = settings.bind_addr().context("invalid bind address")?;

    let app = build_router(AppState::from_settings(&settings));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(
        %addr,
        data_dir = %settings.data.dir.display(),
        "holidays server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("holidays server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

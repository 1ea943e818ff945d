use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::auth::AuthService;
use crate::config::{normalize_listen_addr, AppConfig};
use crate::database::{DatabaseManager, PgAlbumStore};
use crate::mockapi::CatalogClient;
use crate::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "album-api")]
#[command(about = "Album catalog HTTP API")]
#[command(version)]
pub struct Cli {
    #[arg(long, help = "Read settings from this env file instead of ./.env")]
    pub env_file: Option<PathBuf>,

    #[arg(long, help = "Override API_LISTEN_ADDR")]
    pub listen_addr: Option<String>,
}

/// Load settings from the env file named on the command line, or from
/// `./.env` when present. Only an explicitly named file is mandatory.
pub fn load_env_file(cli: &Cli) -> anyhow::Result<()> {
    match &cli.env_file {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("failed to read env file {}", path.display()))?;
        }
        None => {
            let _ = dotenvy::dotenv();
        }
    }
    Ok(())
}

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "album_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Resolve configuration, connect to the database and serve until the
/// listener fails. Every error here is fatal to the process.
pub async fn serve(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::from_env().context("invalid configuration")?;
    if let Some(addr) = &cli.listen_addr {
        config.api.listen_addr = normalize_listen_addr(addr);
    }
    info!("Starting album API in {:?} mode", config.environment);

    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to database")?;

    let state = AppState::new(
        Arc::new(PgAlbumStore::new(pool)),
        AuthService::new(&config.security),
        CatalogClient::new(&config.mockapi),
    );

    let listener = tokio::net::TcpListener::bind(config.api.listen_addr.as_str())
        .await
        .with_context(|| format!("failed to bind {}", config.api.listen_addr))?;
    info!("API server running at {}", config.api.listen_addr);

    axum::serve(listener, crate::app(state))
        .await
        .context("server error")?;
    Ok(())
}

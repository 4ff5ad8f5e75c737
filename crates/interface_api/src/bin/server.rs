//! Giveaway Claims - API Server Binary
//!
//! # Usage
//!
//! ```bash
//! # Serve HTTP
//! DATABASE_URL=postgres://... cargo run --bin giveaway-api
//!
//! # Upgrade a claims table written by an older release, then exit
//! DATABASE_URL=postgres://... cargo run --bin giveaway-api -- migrate
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `DATABASE_URL` / `API_DATABASE_URL` - PostgreSQL connection string
//! * `API_LOG_LEVEL` - Log level when `RUST_LOG` is unset (default: info)
//! * `API_LOG_FORMAT` - `text` or `json` (default: text)
//! * `API_DB_MAX_CONNECTIONS` - Pool size (default: 10)
//! * `API_DB_ACQUIRE_TIMEOUT_SECS` - Wait for a database connection (default: 5)
//! * `API_CORS_ORIGINS` - Comma-separated allowed origins (default: any)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{bail, Context};
use domain_claims::{ClaimStore, UnconfiguredStore};
use infra_db::{
    create_lazy_pool, create_pool, migrate_legacy_schema, DatabaseConfig, PostgresClaimStore,
};
use interface_api::{
    config::{ApiConfig, LogFormat},
    create_router,
};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid API configuration")?;
    init_tracing(&config.log_level, config.log_format);

    match std::env::args().nth(1).as_deref() {
        None | Some("serve") => serve(config).await,
        Some("migrate") => migrate(config).await,
        Some(other) => bail!("unknown command '{other}', expected 'serve' or 'migrate'"),
    }
}

/// Runs the HTTP server until Ctrl+C or SIGTERM
async fn serve(config: ApiConfig) -> anyhow::Result<()> {
    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting giveaway claims API server"
    );

    let postgres = open_postgres(&config)?;
    let store: Arc<dyn ClaimStore> = match &postgres {
        Some(store) => Arc::new(store.clone()),
        None => {
            tracing::warn!("No database URL configured; claims routes will return errors");
            Arc::new(UnconfiguredStore::default())
        }
    };

    if postgres.is_some() {
        if let Err(err) = store.init_schema().await {
            tracing::error!(error = %err, "Failed to initialise claims schema");
        }
    }

    let app = create_router(store, config.clone());
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid listen address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(store) = postgres {
        store.close().await;
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Applies the legacy schema upgrade and exits
async fn migrate(config: ApiConfig) -> anyhow::Result<()> {
    let Some(url) = config.database_url.as_deref() else {
        bail!("DATABASE_URL must be set to run migrations");
    };

    // Connect eagerly so an unreachable database fails the command up front
    let pool = create_pool(
        DatabaseConfig::new(url)
            .max_connections(1)
            .min_connections(1)
            .connect_timeout(config.db_acquire_timeout()),
    )
    .await
    .context("failed to connect to the claims database")?;

    let report = migrate_legacy_schema(&pool).await?;
    if report.is_empty() {
        tracing::info!("Claims schema already up to date");
    } else {
        tracing::info!(steps = report.applied.len(), "Claims schema migrated");
    }

    pool.close().await;
    Ok(())
}

/// Builds the PostgreSQL store when a database URL is configured
///
/// The pool connects lazily, so an unreachable database does not stop the
/// server from starting.
fn open_postgres(config: &ApiConfig) -> anyhow::Result<Option<PostgresClaimStore>> {
    let Some(url) = config.database_url.as_deref() else {
        return Ok(None);
    };

    let pool = create_lazy_pool(
        DatabaseConfig::new(url)
            .max_connections(config.db_max_connections)
            .connect_timeout(config.db_acquire_timeout()),
    )
    .context("invalid database URL")?;

    Ok(Some(PostgresClaimStore::new(pool)))
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

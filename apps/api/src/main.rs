//! # Ironmonger API Server
//!
//! ```text
//! Browser / client ───► HTTP (8080) ───► Services ───► SQLite (data.db)
//!                              │
//!                              └──► web/ static pages
//! ```

use anyhow::Context;
use ironmonger_api::{build_router, ApiConfig, AppState};
use ironmonger_db::{Database, DbConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,ironmonger=debug,sqlx=warn,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting Ironmonger API server...");

    let config = ApiConfig::load()?;
    info!(
        addr = %config.socket_addr(),
        db_path = %config.db_path.display(),
        web_dir = %config.web_dir.display(),
        "Configuration loaded"
    );

    let db_config = DbConfig::new(&config.db_path).max_connections(config.db_max_connections);
    let db = Database::new(db_config)
        .await
        .context("failed to open database")?;

    let app = build_router(AppState::new(db.clone()), &config.web_dir);

    let listener = tokio::net::TcpListener::bind(config.socket_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.socket_addr()))?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "Failed to install Ctrl+C handler");
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
                error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}

//!
//! Account management HTTP service for Hetchfund.
//! Reads configuration from TOML file (~/.config/hetch-accounts/config.toml).

use std::sync::Arc;

use tracing::{error, info, warn};

use hetch_accounts::domain::account::repository::AccountRepositoryInterface;
use hetch_accounts::support::{listen_for_shutdown_signals, ShutdownSignal};
use hetch_accounts::{create_api_router, default_config_path, AppConfig, InMemoryAccountStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("HETCH_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Hetchfund Accounts Service...");

    // ── Storage ────────────────────────────────────────────────
    let repo: Arc<dyn AccountRepositoryInterface> = Arc::new(InMemoryAccountStore::new());

    // ── Router ─────────────────────────────────────────────────
    let router = create_api_router(repo, app_cfg.token_config());

    // ── Shutdown handling ──────────────────────────────────────
    let shutdown = ShutdownSignal::new();
    tokio::spawn(listen_for_shutdown_signals(shutdown.clone()));

    // ── Serve ──────────────────────────────────────────────────
    let addr = app_cfg.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Accounts API listening on http://{}", addr);
    info!("Swagger UI available at http://{}/accounts/docs/", addr);
    info!("🚀 Server started. Press Ctrl+C to shutdown gracefully.");

    let server_shutdown = shutdown.clone();
    let server = axum::serve(listener, router).with_graceful_shutdown(async move {
        server_shutdown.wait().await;
        info!("🛑 Accounts API received shutdown signal");
    });

    // Bound the drain of in-flight requests after the signal fires.
    let drain_deadline = async {
        shutdown.wait().await;
        tokio::time::sleep(std::time::Duration::from_secs(
            app_cfg.server.shutdown_timeout,
        ))
        .await;
    };

    tokio::select! {
        result = server => result?,
        () = drain_deadline => {
            warn!(
                "⚠️ Graceful shutdown timed out after {}s",
                app_cfg.server.shutdown_timeout
            );
        }
    }

    info!("👋 Hetchfund Accounts Service shutdown complete");
    Ok(())
}

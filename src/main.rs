//! Wiring & DI. Entry point: load config, build the catalog adapter, serve HTTP.
//! No business logic here; prompts are answered by ChatService.

use anyhow::Context;
use dotenv::dotenv;
use feature_bot::adapters::catalog::{HttpCatalogAdapter, InMemoryCatalog};
use feature_bot::adapters::http::{AppState, app_router, cors_layer};
use feature_bot::ports::{CatalogPort, PromptPort};
use feature_bot::shared::{AppConfig, CatalogBackend};
use feature_bot::usecases::ChatService;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().context("failed to load configuration")?;
    if cfg.is_completion_key_set() {
        info!("completion API key is set (unused)");
    } else {
        info!("completion API key is not set");
    }

    // --- Catalog ---
    let catalog: Arc<dyn CatalogPort> = match cfg.catalog_backend() {
        CatalogBackend::Http => {
            let catalog_cfg = cfg.catalog_config();
            info!(catalog_url = %catalog_cfg.base_url, "using HTTP catalog");
            Arc::new(HttpCatalogAdapter::new(catalog_cfg)?)
        }
        CatalogBackend::Memory => {
            warn!("FEATURE_BOT_CATALOG=memory, serving the built-in sample catalog");
            Arc::new(InMemoryCatalog::sample())
        }
    };

    // --- Service + HTTP ---
    let prompts: Arc<dyn PromptPort> = Arc::new(ChatService::new(catalog));
    let origins = cfg.allowed_origins();
    if origins.is_empty() {
        info!("CORS: any origin");
    } else {
        info!(origins = ?origins, "CORS: restricted origins");
    }
    let app = app_router(AppState::new(prompts), cors_layer(&origins)?);

    let port = cfg.port_or_default();
    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!(port, "Server is running on http://localhost:{}", port);
    info!("  GET  /  - liveness greeting");
    info!("  POST /  - answer a prompt");

    axum::serve(listener, app).await.context("server failed")?;

    Ok(())
}

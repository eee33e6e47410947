mod config;
mod errors;
mod extraction;
mod models;
mod ranking;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::extraction::PdfTextExtractor;
use crate::ranking::profiles::RoleCatalog;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Ranker API v{}", env!("CARGO_PKG_VERSION"));

    // Role table is fixed for the lifetime of the process
    let catalog = match &config.role_profiles_path {
        Some(path) => {
            let catalog = RoleCatalog::load(path)?;
            if catalog.is_empty() {
                warn!("Role profile file {path} is empty; every role will be treated as unknown");
            }
            info!("Loaded {} role profiles from {path}", catalog.len());
            catalog
        }
        None => {
            let catalog = RoleCatalog::builtin();
            info!("Using {} built-in role profiles", catalog.len());
            catalog
        }
    };

    let state = AppState {
        config: config.clone(),
        catalog: Arc::new(catalog),
        extractor: Arc::new(PdfTextExtractor),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

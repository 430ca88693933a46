//! GridGuard AI Dashboard Server
//!
//! Transformer overload prediction dashboard.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    GRIDGUARD DASHBOARD                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌───────────┐  ┌─────────────────────────┐ │
//! │  │  HTML     │  │  JSON API │  │  Assessor               │ │
//! │  │  Dashboard│  │  (Axum)   │  │  encode→predict→classify│ │
//! │  └─────┬─────┘  └─────┬─────┘  └────────────┬────────────┘ │
//! │        └──────────────┼──────────────────────┘              │
//! │                       ▼                                     │
//! │                ┌─────────────┐                             │
//! │                │ ONNX model  │                             │
//! │                └─────────────┘                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod models;
mod views;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use gridguard_core::{Assessor, LoadModel, OnnxLoadModel};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "gridguard_dashboard=debug,gridguard_core=info,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("GridGuard Dashboard starting ({})...", config.environment);
    if !config.is_production() {
        tracing::debug!("Model path: {}", config.model_path);
    }
    tracing::info!(
        "Capacity: {} MW, tiers: warning >= {}%, critical >= {}%",
        config.capacity_mw,
        config.thresholds.warning_pct,
        config.thresholds.critical_pct
    );

    // Load the model once; without it there is nothing to serve
    let model = OnnxLoadModel::load(&config.model_path).map_err(|e| {
        tracing::error!("Cannot start without a model: {}", e);
        e
    })?;
    let model: Arc<dyn LoadModel> = Arc::new(model);

    let assessor = Assessor::new(model, config.capacity_mw, config.thresholds)
        .context("Invalid assessor configuration")?;

    // Build application state
    let state = AppState {
        assessor,
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub assessor: Assessor,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    // Dashboard pages
    let page_routes = Router::new()
        .route("/", get(handlers::dashboard::index))
        .route("/predict", post(handlers::dashboard::submit));

    // JSON API
    let api_routes = Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/v1/predict", post(handlers::predict::predict))
        .route("/api/v1/model", get(handlers::model::status));

    Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}

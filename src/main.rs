use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

mod config;
mod error;
mod handlers;

use crate::config::{Config, FirebaseConfig};

/// Shared application state — cheap to clone (all heap behind Arc).
///
/// Configuration is loaded once at startup and immutable afterwards; handlers
/// only ever read from it, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub firebase: Arc<FirebaseConfig>,
    pub static_dir: Arc<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,inventory_web=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Inventory Web  — Rust + Axum        ║");
    info!("║  Firebase-backed inventory frontend  ║");
    info!("╚══════════════════════════════════════╝");

    let state = AppState {
        firebase: Arc::new(config.firebase),
        static_dir: Arc::new(config.static_dir),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Inventory page ──────────────────────────────────────────────────
        .route("/", get(handlers::pages::inventory_page))

        // ── Firebase config for the frontend SDK ────────────────────────────
        .route(
            "/get-firebase-config/",
            get(handlers::firebase::get_firebase_config),
        )

        // ── Frontend assets (JS referenced by the page) ─────────────────────
        .nest_service("/static", ServeDir::new(state.static_dir.as_ref()))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{delete, get, post, put, MethodRouter},
    Router,
};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod error;
mod handlers;
mod models;
mod seed;
mod store;

use crate::config::Config;
use crate::store::Inventory;

/// Shared application state, cheap to clone (the inventory sits behind an Arc).
///
/// Every mutating handler holds the write lock for its whole
/// check-then-write sequence, so id assignment is serialized.
#[derive(Clone)]
pub struct AppState {
    pub inventory: Arc<RwLock<Inventory>>,
}

impl AppState {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory: Arc::new(RwLock::new(inventory)),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,inventory_service=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let inventory = if config.seed_inventory {
        Inventory::seeded()
    } else {
        Inventory::new()
    };
    info!(
        items = inventory.len(),
        next_id = inventory.next_id(),
        "Inventory initialised"
    );

    let app = build_router(AppState::new(inventory));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// GETs to a path registered only for other methods redirect like unknown paths.
fn write_route(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.fallback(handlers::method_fallback)
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Items ───────────────────────────────────────────────────────────
        .route("/", get(handlers::items::list_items))
        .route("/get-by-id/:item_id", get(handlers::items::get_item))
        .route("/get-by-name/:name", get(handlers::items::get_items_by_name))
        .route("/create-item/", write_route(post(handlers::items::create_item)))
        .route("/create-item", write_route(post(handlers::items::create_item)))
        .route(
            "/generate-items/:num_items",
            write_route(post(handlers::items::generate_items)),
        )
        .route(
            "/update-item/:item_id",
            write_route(put(handlers::items::update_item)),
        )
        .route(
            "/delete-item/:item_id",
            write_route(delete(handlers::items::delete_item)),
        )
        .route(
            "/delete-all-items",
            write_route(delete(handlers::items::delete_all_items)),
        )

        // ── Everything else ─────────────────────────────────────────────────
        .fallback(handlers::fallback)

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

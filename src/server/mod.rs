//! Read-only HTTP surface over the inventory stores.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::api::{MOVEMENTS_PATH, PRODUCTS_PATH, USERS_PATH};
use crate::store::{StoreError, Stores};

/// Build the API router over the given stores
pub fn router(stores: Stores) -> Router {
    Router::new()
        .route(PRODUCTS_PATH, get(handle_products))
        .route(MOVEMENTS_PATH, get(handle_movements))
        .route(USERS_PATH, get(handle_users))
        .route("/health", get(handle_health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(stores)
}

/// Serve the API on an already-bound listener until the process stops
pub async fn serve(listener: TcpListener, stores: Stores) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    info!("🚀 Inventory API listening on http://{}", addr);
    axum::serve(listener, router(stores)).await?;
    Ok(())
}

/// Bind `addr` and serve the API
pub async fn start_server(addr: &str, stores: Stores) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve(listener, stores).await
}

async fn handle_products(State(stores): State<Stores>) -> Response {
    match stores.products.fetch_products().await {
        Ok(products) => {
            info!("API {} called, returning {} products", PRODUCTS_PATH, products.len());
            Json(products).into_response()
        }
        Err(e) => store_failure(PRODUCTS_PATH, e),
    }
}

async fn handle_movements(State(stores): State<Stores>) -> Response {
    match stores.movements.fetch_movements().await {
        Ok(movements) => {
            info!("API {} called, returning {} movements", MOVEMENTS_PATH, movements.len());
            Json(movements).into_response()
        }
        Err(e) => store_failure(MOVEMENTS_PATH, e),
    }
}

async fn handle_users(State(stores): State<Stores>) -> Response {
    match stores.users.fetch_users().await {
        Ok(users) => {
            info!("API {} called, returning {} users", USERS_PATH, users.len());
            Json(users).into_response()
        }
        Err(e) => store_failure(USERS_PATH, e),
    }
}

async fn handle_health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "quantika",
        "timestamp": chrono::Utc::now(),
    }))
}

// The in-memory store never fails; a store backed by something else might.
fn store_failure(path: &str, e: StoreError) -> Response {
    error!("API {} failed: {}", path, e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": e.to_string() })),
    )
        .into_response()
}

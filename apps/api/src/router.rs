use std::sync::Arc;

use axum::{routing::get, Router};

use item_cell::router::item_routes;
use shared_models::AppError;
use shared_store::FileItemStore;
use stats_cell::router::stats_routes;
use stats_cell::services::cache::StatsCache;

pub fn create_router(store: Arc<FileItemStore>, cache: Arc<StatsCache>) -> Router {
    Router::new()
        .route("/", get(|| async { "Catalog API is running!" }))
        .nest("/items", item_routes(store))
        .nest("/stats", stats_routes(cache))
        .fallback(not_found)
}

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

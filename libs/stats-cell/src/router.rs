use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::services::cache::StatsCache;

pub fn stats_routes(cache: Arc<StatsCache>) -> Router {
    Router::new()
        .route("/", get(handlers::get_stats))
        .with_state(cache)
}

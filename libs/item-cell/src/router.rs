use std::sync::Arc;

use axum::{routing::get, Router};

use shared_store::FileItemStore;

use crate::handlers;

pub fn item_routes(store: Arc<FileItemStore>) -> Router {
    Router::new()
        .route("/", get(handlers::list_items).post(handlers::create_item))
        .route("/{id}", get(handlers::get_item))
        .with_state(store)
}

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use shared_models::{AppError, Item};
use shared_store::FileItemStore;

use crate::models::{CreateItemRequest, ItemPage, ListItemsQuery};
use crate::services::query::ItemQueryService;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_LIMIT: u32 = 20;

pub async fn list_items(
    State(store): State<Arc<FileItemStore>>,
    Query(params): Query<ListItemsQuery>,
) -> Result<Json<ItemPage>, AppError> {
    // Missing values take the defaults; zero is clamped rather than rejected.
    let page = params.page.unwrap_or(DEFAULT_PAGE).max(1);
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).max(1);

    let service = ItemQueryService::new(store);
    let page_data = service.list(page, limit, params.q.as_deref()).await?;

    Ok(Json(page_data))
}

pub async fn get_item(
    State(store): State<Arc<FileItemStore>>,
    Path(id): Path<u64>,
) -> Result<Json<Item>, AppError> {
    let service = ItemQueryService::new(store);

    service
        .find(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", id)))
}

pub async fn create_item(
    State(store): State<Arc<FileItemStore>>,
    Json(payload): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<Item>), AppError> {
    let (name, category, price) = match (payload.name, payload.category, payload.price) {
        (Some(name), Some(category), Some(price)) => (name, category, price),
        _ => {
            return Err(AppError::ValidationError(
                "Missing required fields: name, category and price".to_string(),
            ))
        }
    };

    let item = store.create(name, category, price).await?;

    Ok((StatusCode::CREATED, Json(item)))
}

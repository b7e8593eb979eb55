use std::sync::Arc;

use axum::{extract::State, Json};

use shared_models::AppError;

use crate::models::StatsSnapshot;
use crate::services::cache::StatsCache;

pub async fn get_stats(
    State(cache): State<Arc<StatsCache>>,
) -> Result<Json<StatsSnapshot>, AppError> {
    let snapshot = cache.get().await?;
    Ok(Json(snapshot))
}

use serde::{Deserialize, Serialize};

use shared_models::Item;

/// Query parameters accepted by the listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListItemsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub q: Option<String>,
}

/// One page of the (possibly filtered) collection plus its page metadata.
///
/// `total` counts the filtered collection, not the slice; `page` and
/// `limit` echo the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemPage {
    pub items: Vec<Item>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
}

/// Creation payload. Fields stay optional so a missing one reaches field
/// validation instead of failing JSON extraction with a generic error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
}

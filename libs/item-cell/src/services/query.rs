use std::sync::Arc;

use tracing::debug;

use shared_models::Item;
use shared_store::{FileItemStore, ItemSource, StoreError};

use crate::models::ItemPage;

pub struct ItemQueryService {
    store: Arc<FileItemStore>,
}

impl ItemQueryService {
    pub fn new(store: Arc<FileItemStore>) -> Self {
        Self { store }
    }

    /// One page of the collection, filtered before it is counted or sliced.
    ///
    /// A page past the end of the filtered collection yields an empty slice,
    /// not an error.
    pub async fn list(
        &self,
        page: u32,
        limit: u32,
        query: Option<&str>,
    ) -> Result<ItemPage, StoreError> {
        debug!("Listing items: page={}, limit={}, q={:?}", page, limit, query);

        let items = self.store.load().await?;
        let filtered = filter_by_name(items, query);
        let total = filtered.len();
        let items = paginate(filtered, page, limit);

        Ok(ItemPage {
            items,
            total,
            page,
            limit,
        })
    }

    /// Exact-id lookup over the full collection.
    pub async fn find(&self, id: u64) -> Result<Option<Item>, StoreError> {
        let items = self.store.load().await?;
        Ok(items.into_iter().find(|item| item.id == id))
    }
}

/// Case-insensitive substring match on the item name. An absent or empty
/// query keeps the whole collection.
fn filter_by_name(items: Vec<Item>, query: Option<&str>) -> Vec<Item> {
    match query {
        Some(q) if !q.is_empty() => {
            let needle = q.to_lowercase();
            items
                .into_iter()
                .filter(|item| item.name.to_lowercase().contains(&needle))
                .collect()
        }
        _ => items,
    }
}

fn paginate(items: Vec<Item>, page: u32, limit: u32) -> Vec<Item> {
    let offset = (page as usize).saturating_sub(1).saturating_mul(limit as usize);
    items.into_iter().skip(offset).take(limit as usize).collect()
}

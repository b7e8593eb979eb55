pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

// Re-export the listing types for external use
pub use models::{CreateItemRequest, ItemPage, ListItemsQuery};
pub use services::query::ItemQueryService;

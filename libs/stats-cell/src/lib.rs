pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

// Re-export the cache surface for external use
pub use models::StatsSnapshot;
pub use services::cache::StatsCache;
pub use services::watch::spawn_invalidation_watch;

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, warn};

use shared_store::SourceVersion;

use crate::services::cache::StatsCache;

/// Best-effort invalidation: poll the source version and drop the cached
/// snapshot when it moves.
///
/// The cache compares versions on every read as well, so a missed or late
/// tick can delay an invalidation but never cause a stale snapshot to be
/// served.
pub fn spawn_invalidation_watch(
    cache: Arc<StatsCache>,
    poll_interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last_seen: Option<SourceVersion> = None;

        loop {
            ticker.tick().await;

            match cache.source_version().await {
                Ok(version) => {
                    if last_seen.is_some_and(|seen| seen != version) {
                        debug!("Item data changed on disk, invalidating stats cache");
                        cache.invalidate().await;
                    }
                    last_seen = Some(version);
                }
                Err(err) => {
                    warn!("Stats watch could not read source version: {}", err);
                }
            }
        }
    })
}

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use shared_store::{ItemSource, SourceVersion, StoreError};

use crate::models::StatsSnapshot;

#[derive(Debug, Clone)]
struct CacheEntry {
    snapshot: StatsSnapshot,
    version: SourceVersion,
}

/// Lazily recomputed aggregate over the item collection, keyed by the
/// source's modification timestamp.
///
/// A cached snapshot is served only while its version tag equals the
/// source's current version; any mismatch forces a recompute. The tag is
/// the version observed *before* the content read, so a write landing
/// mid-recompute moves the source past the tag and the next call
/// recomputes again. Stale data is never served; convergence is eventual,
/// not linearizable.
pub struct StatsCache {
    source: Arc<dyn ItemSource>,
    entry: RwLock<Option<CacheEntry>>,
}

impl StatsCache {
    pub fn new(source: Arc<dyn ItemSource>) -> Self {
        Self {
            source,
            entry: RwLock::new(None),
        }
    }

    /// Current snapshot, recomputed from the source when the cached one is
    /// missing or its version tag no longer matches.
    pub async fn get(&self) -> Result<StatsSnapshot, StoreError> {
        let version = self.source.version().await?;

        if let Some(entry) = self.entry.read().await.as_ref() {
            if entry.version == version {
                return Ok(entry.snapshot.clone());
            }
        }

        // No lock is held across the content read, so a failed or cancelled
        // recompute leaves the previous state untouched.
        let items = self.source.load().await?;
        let snapshot = StatsSnapshot::compute(&items);
        debug!("Recomputed stats over {} items", snapshot.total);

        *self.entry.write().await = Some(CacheEntry {
            snapshot: snapshot.clone(),
            version,
        });

        Ok(snapshot)
    }

    /// Drop the cached snapshot; the next `get` re-reads the source.
    pub async fn invalidate(&self) {
        *self.entry.write().await = None;
    }

    /// Whether a snapshot is currently held.
    pub async fn is_populated(&self) -> bool {
        self.entry.read().await.is_some()
    }

    pub(crate) async fn source_version(&self) -> Result<SourceVersion, StoreError> {
        self.source.version().await
    }
}

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tokio::time::timeout;
use tracing::debug;

use shared_models::Item;

use crate::error::StoreError;
use crate::source::{ItemSource, SourceVersion};

/// Bound on any single filesystem operation, so a stuck disk surfaces as an
/// error instead of a hung request.
const IO_TIMEOUT: Duration = Duration::from_secs(5);

/// The item collection persisted as a single JSON array on disk.
///
/// The file is read and rewritten wholesale. Rewrites go through a sibling
/// temp file and a rename, so a concurrent reader sees the old document or
/// the new one, never a torn write.
pub struct FileItemStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileItemStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_items(&self) -> Result<Vec<Item>, StoreError> {
        let raw = timeout(IO_TIMEOUT, fs::read(&self.path))
            .await
            .map_err(|_| StoreError::Timeout)??;
        Ok(serde_json::from_slice(&raw)?)
    }

    async fn write_items(&self, items: &[Item]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(items)?;
        let tmp = self.path.with_extension("json.tmp");
        timeout(IO_TIMEOUT, async {
            fs::write(&tmp, &json).await?;
            fs::rename(&tmp, &self.path).await
        })
        .await
        .map_err(|_| StoreError::Timeout)??;
        Ok(())
    }

    /// Append a new item, assigning the next sequential id.
    ///
    /// The whole read, next-id, append, persist sequence runs under the
    /// write lock so two concurrent creations cannot observe the same max
    /// id.
    pub async fn create(
        &self,
        name: String,
        category: String,
        price: f64,
    ) -> Result<Item, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut items = self.read_items().await?;
        let id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        let item = Item {
            id,
            name,
            category,
            price,
        };
        items.push(item.clone());
        self.write_items(&items).await?;

        debug!("Created item {} ({})", item.id, item.name);
        Ok(item)
    }
}

#[async_trait]
impl ItemSource for FileItemStore {
    async fn load(&self) -> Result<Vec<Item>, StoreError> {
        self.read_items().await
    }

    async fn version(&self) -> Result<SourceVersion, StoreError> {
        let meta = timeout(IO_TIMEOUT, fs::metadata(&self.path))
            .await
            .map_err(|_| StoreError::Timeout)??;
        Ok(SourceVersion::from(meta.modified()?))
    }
}

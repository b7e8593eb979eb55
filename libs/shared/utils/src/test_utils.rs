use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tempfile::TempDir;

use shared_models::Item;
use shared_store::{FileItemStore, ItemSource, SourceVersion, StoreError};

/// A throwaway item data file seeded with a known collection.
pub struct TestDataset {
    _dir: TempDir,
    path: PathBuf,
}

impl TestDataset {
    pub fn new(items: &[Item]) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("items.json");
        std::fs::write(&path, serde_json::to_vec_pretty(items).unwrap())
            .expect("write seed items");
        Self { _dir: dir, path }
    }

    pub fn empty() -> Self {
        Self::new(&[])
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> Arc<FileItemStore> {
        Arc::new(FileItemStore::new(&self.path))
    }

    /// Replace the dataset wholesale, the way an out-of-band writer would.
    pub fn rewrite(&self, items: &[Item]) {
        std::fs::write(&self.path, serde_json::to_vec_pretty(items).unwrap())
            .expect("rewrite items");
    }

    /// Corrupt the file so the next read fails to parse.
    pub fn corrupt(&self) {
        std::fs::write(&self.path, b"{ not json").expect("corrupt items file");
    }
}

pub fn item(id: u64, name: &str, category: &str, price: f64) -> Item {
    Item {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price,
    }
}

pub fn sample_items() -> Vec<Item> {
    vec![
        item(1, "Gaming Laptop", "Electronics", 1999.0),
        item(2, "Noise Cancelling Headphones", "Electronics", 399.0),
        item(3, "Ultra-Wide Monitor", "Electronics", 999.0),
        item(4, "Mechanical Keyboard", "Accessories", 149.0),
        item(5, "Standing Desk", "Furniture", 599.0),
    ]
}

/// Wraps a file store and counts full-content loads, so tests can assert
/// that a cache fast path never touches the source.
pub struct CountingSource {
    inner: FileItemStore,
    loads: AtomicUsize,
}

impl CountingSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            inner: FileItemStore::new(path),
            loads: AtomicUsize::new(0),
        }
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItemSource for CountingSource {
    async fn load(&self) -> Result<Vec<Item>, StoreError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.inner.load().await
    }

    async fn version(&self) -> Result<SourceVersion, StoreError> {
        self.inner.version().await
    }
}

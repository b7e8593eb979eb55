use std::time::SystemTime;

use async_trait::async_trait;

use shared_models::Item;

use crate::error::StoreError;

/// Modification timestamp of the backing document at some observed instant.
/// Two equal versions mean the document was not rewritten in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceVersion(SystemTime);

impl From<SystemTime> for SourceVersion {
    fn from(modified: SystemTime) -> Self {
        Self(modified)
    }
}

/// Read side of the item collection.
///
/// The stats cache consumes the collection through this trait so tests can
/// substitute instrumented sources.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Full contents of the collection.
    async fn load(&self) -> Result<Vec<Item>, StoreError>;

    /// Current version of the backing document.
    async fn version(&self) -> Result<SourceVersion, StoreError>;
}

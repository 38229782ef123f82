use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use lifecycle_core::{ObjectStorage, ObjectStorageError, StoredObject};

/// In-memory bucket keyed by full object path, listed in name order.
#[derive(Default, Clone)]
pub struct HashMapObjectStorage {
    paths: Arc<RwLock<BTreeSet<String>>>,
}

impl HashMapObjectStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn put(&self, path: impl Into<String>) {
        self.paths.write().await.insert(path.into());
    }

    pub async fn contains(&self, path: &str) -> bool {
        self.paths.read().await.contains(path)
    }

    pub async fn len(&self) -> usize {
        self.paths.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.paths.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl ObjectStorage for HashMapObjectStorage {
    async fn list(
        &self,
        prefix: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<StoredObject>, ObjectStorageError> {
        let folder = format!("{prefix}/");
        let paths = self.paths.read().await;

        // Only direct children, the same as a folder listing
        Ok(paths
            .iter()
            .filter_map(|path| path.strip_prefix(&folder))
            .filter(|name| !name.contains('/'))
            .skip(offset)
            .take(limit)
            .map(StoredObject::new)
            .collect())
    }

    async fn remove(&self, paths: &[String]) -> Result<(), ObjectStorageError> {
        let mut stored = self.paths.write().await;
        for path in paths {
            stored.remove(path);
        }
        Ok(())
    }
}

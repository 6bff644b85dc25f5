use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use shortcut_core::{Mapping, Repository, ShortCode, StorageError, StorageResult};

/// In-memory implementation of the [`Repository`] trait using DashMap.
///
/// DashMap provides better concurrency than `RwLock<HashMap>` because
/// it uses sharded locks, allowing concurrent reads and writes to
/// different buckets without blocking.
///
/// `save` is an atomic insert-if-absent: the entry API arbitrates id
/// uniqueness, so of two racing requests that both passed an existence
/// check, exactly one persists and the other gets a conflict.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    storage: DashMap<String, Mapping>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn find_by_id(&self, id: &ShortCode) -> StorageResult<Option<Mapping>> {
        Ok(self.storage.get(id.as_str()).map(|entry| entry.clone()))
    }

    async fn find_by_source_url(&self, source_url: &str) -> StorageResult<Option<Mapping>> {
        // Linear scan; acceptable for the in-memory adapter. A database
        // adapter would back this with an index on source_url.
        Ok(self
            .storage
            .iter()
            .find(|entry| entry.value().source_url == source_url)
            .map(|entry| entry.value().clone()))
    }

    async fn save(&self, mapping: Mapping) -> StorageResult<Mapping> {
        match self.storage.entry(mapping.id.as_str().to_owned()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(mapping.id.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(mapping.clone());
                Ok(mapping)
            }
        }
    }

    async fn exists_by_id(&self, id: &ShortCode) -> StorageResult<bool> {
        Ok(self.storage.contains_key(id.as_str()))
    }

    async fn delete_by_id(&self, id: &ShortCode) -> StorageResult<bool> {
        Ok(self.storage.remove(id.as_str()).is_some())
    }

    async fn find_all(&self) -> StorageResult<Vec<Mapping>> {
        Ok(self
            .storage
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }
}

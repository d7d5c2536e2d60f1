use async_trait::async_trait;
use std::collections::HashMap;

use crate::storage::errors::StorageError;
use crate::storage::types::CacheData;

pub(crate) struct InMemoryCacheStore {
    pub(super) entry: HashMap<String, CacheData>,
}

pub(crate) struct RedisCacheStore {
    pub(super) client: redis::Client,
}

// Trait
#[async_trait]
pub(crate) trait CacheStore: Send + Sync + 'static {
    /// Initialize the store. This is called when the store is created.
    async fn init(&self) -> Result<(), StorageError>;

    /// Put an entry into the store with no explicit expiration.
    async fn put(&mut self, key: &str, value: CacheData) -> Result<(), StorageError>;

    /// Put an entry into the store with a TTL in seconds.
    /// Expiration is enforced by the backend, not by callers.
    async fn put_with_ttl(
        &mut self,
        key: &str,
        value: CacheData,
        ttl: usize,
    ) -> Result<(), StorageError>;

    /// Get an entry from the store.
    async fn get(&self, key: &str) -> Result<Option<CacheData>, StorageError>;

    /// Get a batch of entries in one round trip. Keys without an entry are
    /// simply absent from the returned map.
    async fn get_many(&self, keys: &[String]) -> Result<HashMap<String, CacheData>, StorageError>;

    /// Remove an entry from the store.
    async fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

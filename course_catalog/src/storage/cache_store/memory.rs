use async_trait::async_trait;
use std::collections::HashMap;

use crate::storage::errors::StorageError;
use crate::storage::types::CacheData;

use super::types::{CacheStore, InMemoryCacheStore};

const CACHE_PREFIX: &str = "cache";

impl InMemoryCacheStore {
    pub(crate) fn new() -> Self {
        tracing::info!("Creating new in-memory generic cache store");
        Self {
            entry: HashMap::new(),
        }
    }

    fn make_key(key: &str) -> String {
        format!("{CACHE_PREFIX}:{key}")
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn init(&self) -> Result<(), StorageError> {
        Ok(()) // Nothing to initialize for in-memory store
    }

    async fn put(&mut self, key: &str, value: CacheData) -> Result<(), StorageError> {
        let key = Self::make_key(key);
        self.entry.insert(key, value);
        Ok(())
    }

    async fn put_with_ttl(
        &mut self,
        key: &str,
        value: CacheData,
        _ttl: usize,
    ) -> Result<(), StorageError> {
        // The in-memory store keeps entries for the process lifetime.
        let key = Self::make_key(key);
        self.entry.insert(key, value);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<CacheData>, StorageError> {
        let key = Self::make_key(key);
        Ok(self.entry.get(&key).cloned())
    }

    async fn get_many(&self, keys: &[String]) -> Result<HashMap<String, CacheData>, StorageError> {
        let mut found = HashMap::new();
        for key in keys {
            if let Some(value) = self.entry.get(&Self::make_key(key)) {
                found.insert(key.clone(), value.clone());
            }
        }
        Ok(found)
    }

    async fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let key = Self::make_key(key);
        self.entry.remove(&key);
        Ok(())
    }
}

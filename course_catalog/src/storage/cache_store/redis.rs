use async_trait::async_trait;
use redis::{self, AsyncCommands};
use std::collections::HashMap;

use crate::storage::errors::StorageError;
use crate::storage::types::CacheData;

use super::types::{CacheStore, RedisCacheStore};

const CACHE_PREFIX: &str = "cache";

impl RedisCacheStore {
    fn make_key(key: &str) -> String {
        format!("{CACHE_PREFIX}:{key}")
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn init(&self) -> Result<(), StorageError> {
        // Verify the connection works
        let _conn = self.client.get_multiplexed_async_connection().await?;
        Ok(())
    }

    async fn put(&mut self, key: &str, value: CacheData) -> Result<(), StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let key = Self::make_key(key);
        let value = serde_json::to_string(&value)?;
        let _: () = conn.set(&key, value).await?;
        Ok(())
    }

    async fn put_with_ttl(
        &mut self,
        key: &str,
        value: CacheData,
        ttl: usize,
    ) -> Result<(), StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let key = Self::make_key(key);
        let value = serde_json::to_string(&value)?;
        let _: () = conn.set(&key, value).await?;
        let _: () = conn.expire(&key, ttl as i64).await?;

        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<CacheData>, StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let key = Self::make_key(key);
        let value: Option<String> = conn.get(&key).await?;

        match value {
            Some(v) => Ok(Some(serde_json::from_str(&v)?)),
            None => Ok(None),
        }
    }

    async fn get_many(&self, keys: &[String]) -> Result<HashMap<String, CacheData>, StorageError> {
        if keys.is_empty() {
            return Ok(HashMap::new());
        }

        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let store_keys: Vec<String> = keys.iter().map(|key| Self::make_key(key)).collect();
        // MGET preserves the order of the requested keys, with nil for misses.
        let values: Vec<Option<String>> = conn.mget(&store_keys).await?;

        let mut found = HashMap::new();
        for (key, value) in keys.iter().zip(values) {
            if let Some(v) = value {
                found.insert(key.clone(), serde_json::from_str(&v)?);
            }
        }
        Ok(found)
    }

    async fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let key = Self::make_key(key);
        let _: () = conn.del(&key).await?;
        Ok(())
    }
}

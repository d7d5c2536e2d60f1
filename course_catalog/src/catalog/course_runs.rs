use std::collections::{HashMap, HashSet};

use crate::storage::{CacheData, GENERIC_CACHE_STORE};

use super::client::CatalogApi;
use super::config::CatalogIntegration;
use super::errors::CatalogError;
use super::types::CourseRunRecord;

/// Fixed namespace for cached catalog course-run data. The prefix keeps
/// these entries from colliding with unrelated cache usages.
const COURSE_RUN_CACHE_KEY_PREFIX: &str = "catalog.course_runs.";

/// Cache key under which catalog data for `course_key` is stored.
pub(crate) fn course_run_cache_key(course_key: &str) -> String {
    format!("{COURSE_RUN_CACHE_KEY_PREFIX}{course_key}")
}

/// Course key extracted from a course-run cache key.
pub(crate) fn course_key_from_cache_key(cache_key: &str) -> &str {
    &cache_key[COURSE_RUN_CACHE_KEY_PREFIX.len()..]
}

/// Get course-run data from the catalog service, serving from the cache
/// where possible.
///
/// All requested keys are looked up in the cache in one batch; only the
/// missing subset is fetched remotely, in a single request. Each record
/// that comes back is cached independently under a key derived from its
/// own `key` field, with no explicit expiration (TTL policy belongs to the
/// store's configuration).
///
/// Course keys resolved by neither the cache nor the catalog service are
/// simply absent from the result; callers must tolerate partial results.
pub async fn get_course_runs<A>(
    api: &A,
    catalog_integration: &CatalogIntegration,
    course_keys: &HashSet<String>,
) -> Result<HashMap<String, CourseRunRecord>, CatalogError>
where
    A: CatalogApi + ?Sized,
{
    let mut course_runs = HashMap::new();
    if course_keys.is_empty() {
        return Ok(course_runs);
    }

    let cache_keys: Vec<String> = course_keys
        .iter()
        .map(|course_key| course_run_cache_key(course_key))
        .collect();

    let cached = GENERIC_CACHE_STORE
        .lock()
        .await
        .get_many(&cache_keys)
        .await
        .map_err(|e| CatalogError::Cache(e.to_string()))?;

    for (cache_key, data) in &cached {
        let record: CourseRunRecord = serde_json::from_str(&data.value)
            .map_err(|e| CatalogError::Serde(e.to_string()))?;
        course_runs.insert(course_key_from_cache_key(cache_key).to_string(), record);
    }

    let mut missing_keys: Vec<String> = course_keys
        .iter()
        .filter(|course_key| !course_runs.contains_key(*course_key))
        .cloned()
        .collect();

    if missing_keys.is_empty() {
        return Ok(course_runs);
    }

    // Stable ordering for the batched querystring.
    missing_keys.sort();
    tracing::debug!(
        "Catalog data not found in cache for course keys: {}",
        missing_keys.join(",")
    );

    if !catalog_integration.enabled {
        return Ok(course_runs);
    }

    let fetched = api.course_runs(&missing_keys).await?;

    for record in fetched {
        let value =
            serde_json::to_string(&record).map_err(|e| CatalogError::Serde(e.to_string()))?;
        GENERIC_CACHE_STORE
            .lock()
            .await
            .put(&course_run_cache_key(&record.key), CacheData { value })
            .await
            .map_err(|e| CatalogError::Cache(e.to_string()))?;

        course_runs.insert(record.key.clone(), record);
    }

    Ok(course_runs)
}

/// Get marketing URLs for course runs from the catalog service.
///
/// Course keys present in the underlying fetch result map to their
/// marketing URL, which may be `None`; keys absent from the fetch result
/// are omitted from the output entirely.
pub async fn get_run_marketing_urls<A>(
    api: &A,
    catalog_integration: &CatalogIntegration,
    course_keys: &HashSet<String>,
) -> Result<HashMap<String, Option<String>>, CatalogError>
where
    A: CatalogApi + ?Sized,
{
    let course_runs = get_course_runs(api, catalog_integration, course_keys).await?;

    Ok(course_keys
        .iter()
        .filter_map(|course_key| {
            course_runs
                .get(course_key)
                .map(|record| (course_key.clone(), record.marketing_url.clone()))
        })
        .collect())
}

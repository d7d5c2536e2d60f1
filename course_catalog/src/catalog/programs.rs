use crate::storage::{CacheData, GENERIC_CACHE_STORE};

use super::client::CatalogApi;
use super::config::CatalogIntegration;
use super::errors::CatalogError;
use super::types::{ProgramQuery, ProgramRecord};

const PROGRAMS_CACHE_KEY_BASE: &str = "catalog.programs";

/// Cache key for a program listing, suffixed with the type filter when one
/// is applied so filtered and unfiltered listings never shadow each other.
fn programs_cache_key(program_type: Option<&str>) -> String {
    match program_type {
        Some(program_type) => format!("{PROGRAMS_CACHE_KEY_BASE}.{program_type}"),
        None => PROGRAMS_CACHE_KEY_BASE.to_string(),
    }
}

/// Retrieve marketable programs from the catalog service.
///
/// With the integration disabled this returns an empty list rather than an
/// error. List queries are cached under the type-suffixed cache key with
/// the integration's TTL when caching is enabled; single-program (UUID)
/// queries always go to the catalog service and come back as a one-element
/// list.
pub async fn get_programs<A>(
    api: &A,
    catalog_integration: &CatalogIntegration,
    query: &ProgramQuery,
) -> Result<Vec<ProgramRecord>, CatalogError>
where
    A: CatalogApi + ?Sized,
{
    if !catalog_integration.enabled {
        return Ok(Vec::new());
    }

    if let Some(uuid) = &query.uuid {
        let program = api.program(uuid).await?;
        return Ok(vec![program]);
    }

    let cache_key = programs_cache_key(query.program_type.as_deref());

    if catalog_integration.is_cache_enabled() {
        let cached = GENERIC_CACHE_STORE
            .lock()
            .await
            .get(&cache_key)
            .await
            .map_err(|e| CatalogError::Cache(e.to_string()))?;

        if let Some(data) = cached {
            tracing::debug!("Programs found in cache under key: {}", cache_key);
            return serde_json::from_str(&data.value)
                .map_err(|e| CatalogError::Serde(e.to_string()));
        }
    }

    let programs = api.programs(query.program_type.as_deref()).await?;

    if catalog_integration.is_cache_enabled() {
        let value =
            serde_json::to_string(&programs).map_err(|e| CatalogError::Serde(e.to_string()))?;
        GENERIC_CACHE_STORE
            .lock()
            .await
            .put_with_ttl(&cache_key, CacheData { value }, catalog_integration.cache_ttl)
            .await
            .map_err(|e| CatalogError::Cache(e.to_string()))?;
    }

    Ok(programs)
}

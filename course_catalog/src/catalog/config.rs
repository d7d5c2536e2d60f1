use std::env;

/// Runtime configuration for the catalog service integration.
///
/// Resolved once (typically per inbound request) and passed explicitly to
/// the functions that need it, rather than read from global mutable state.
#[derive(Debug, Clone)]
pub struct CatalogIntegration {
    /// Whether remote catalog lookups are allowed at all.
    pub enabled: bool,
    /// Base URL of the catalog service API, e.g.
    /// `https://catalog-internal.example.com/api/v1/`.
    pub internal_api_url: String,
    /// TTL in seconds for cached program listings. Zero disables the
    /// programs cache; course-run entries are cached without expiration
    /// regardless of this value.
    pub cache_ttl: usize,
}

impl CatalogIntegration {
    /// Build the integration settings from environment variables.
    ///
    /// `CATALOG_SERVICE_ENABLED` defaults to false, so a deployment without
    /// catalog configuration behaves as "no data available" rather than
    /// erroring.
    pub fn from_env() -> Self {
        let enabled = env::var("CATALOG_SERVICE_ENABLED")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let internal_api_url = env::var("CATALOG_INTERNAL_API_URL")
            .unwrap_or_else(|_| "http://localhost:18381/api/v1/".to_string());

        let cache_ttl = env::var("CATALOG_CACHE_TTL")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        Self {
            enabled,
            internal_api_url,
            cache_ttl,
        }
    }

    /// Whether the programs cache is in use.
    pub fn is_cache_enabled(&self) -> bool {
        self.cache_ttl > 0
    }
}

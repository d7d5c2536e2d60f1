use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use super::config::CatalogIntegration;
use super::errors::CatalogError;
use super::types::{CourseRunRecord, CourseRunResults, ProgramRecord, ProgramResults, Requester};

static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_idle_timeout(Duration::from_secs(90))
        .pool_max_idle_per_host(32)
        .build()
        .expect("Failed to create reqwest client")
});

/// Read access to the remote catalog API.
///
/// The reqwest-backed [`CatalogClient`] is the production implementation;
/// tests substitute fakes to observe call counts without a network.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the course-run records for the given course keys in one
    /// batched request.
    async fn course_runs(
        &self,
        course_keys: &[String],
    ) -> Result<Vec<CourseRunRecord>, CatalogError>;

    /// Fetch marketable programs, optionally filtered by program type.
    async fn programs(
        &self,
        program_type: Option<&str>,
    ) -> Result<Vec<ProgramRecord>, CatalogError>;

    /// Fetch a single program by UUID.
    async fn program(&self, uuid: &str) -> Result<ProgramRecord, CatalogError>;
}

/// HTTP client for the catalog service, authenticating as a requester.
pub struct CatalogClient {
    base_url: Url,
    access_token: String,
}

impl CatalogClient {
    /// Build a client which can be used to make catalog API requests on
    /// behalf of `requester`.
    pub fn new(
        requester: &Requester,
        catalog_integration: &CatalogIntegration,
    ) -> Result<Self, CatalogError> {
        // Url::join drops the last path segment of a slash-less base.
        let mut base = catalog_integration.internal_api_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).map_err(|e| CatalogError::InvalidApiUrl(e.to_string()))?;

        tracing::debug!(
            "Catalog client for {} against {}",
            requester.username,
            base_url
        );

        Ok(Self {
            base_url,
            access_token: requester.access_token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, CatalogError> {
        self.base_url
            .join(path)
            .map_err(|e| CatalogError::InvalidApiUrl(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let response = HTTP_CLIENT
            .get(url)
            .query(query)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| CatalogError::Fetch(e.to_string()))?;

        match response.status() {
            reqwest::StatusCode::OK => {}
            status => {
                tracing::debug!("Catalog response: {:#?}", response);
                return Err(CatalogError::UnexpectedStatus(status.to_string()));
            }
        }

        let response_body = response
            .text()
            .await
            .map_err(|e| CatalogError::Fetch(e.to_string()))?;

        tracing::debug!("Response Body: {:#?}", response_body);
        serde_json::from_str(&response_body)
            .map_err(|e| CatalogError::Serde(format!("Failed to deserialize response body: {e}")))
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn course_runs(
        &self,
        course_keys: &[String],
    ) -> Result<Vec<CourseRunRecord>, CatalogError> {
        let url = self.endpoint("course_runs/")?;
        let query = [
            ("keys", course_keys.join(",")),
            ("exclude_utm", "1".to_string()),
        ];

        let page: CourseRunResults = self.get_json(url, &query).await?;
        Ok(page.results)
    }

    async fn programs(
        &self,
        program_type: Option<&str>,
    ) -> Result<Vec<ProgramRecord>, CatalogError> {
        let url = self.endpoint("programs/")?;
        let mut query = vec![
            ("marketable", "1".to_string()),
            ("exclude_utm", "1".to_string()),
        ];
        if let Some(program_type) = program_type {
            query.push(("type", program_type.to_string()));
        }

        let page: ProgramResults = self.get_json(url, &query).await?;
        Ok(page.results)
    }

    async fn program(&self, uuid: &str) -> Result<ProgramRecord, CatalogError> {
        let url = self.endpoint(&format!("programs/{uuid}/"))?;
        self.get_json(url, &[("exclude_utm", "1".to_string())])
            .await
    }
}

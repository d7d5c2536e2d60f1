//! Shared test initialization and fakes.
//!
//! `init_test_environment` loads `.env_test` (falling back to `.env`) once
//! per process and makes sure the global cache store is up, so every test
//! touching the store sees the same in-memory backend.

use std::sync::Once;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Mutex;

use crate::catalog::{
    CatalogApi, CatalogError, CatalogIntegration, CourseRunRecord, ProgramRecord,
};

/// Centralized test initialization for all tests across the crate.
pub(crate) async fn init_test_environment() {
    // Environment setup (synchronous, runs once)
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }
    });

    // Touch the global cache store so misconfiguration fails here, not
    // in the middle of an assertion.
    if let Err(e) = crate::storage::init().await {
        eprintln!("Warning: Failed to initialize cache store: {e}");
    }
}

/// An enabled catalog integration with caching off, matching the defaults
/// used throughout the tests.
pub(crate) fn enabled_integration() -> CatalogIntegration {
    CatalogIntegration {
        enabled: true,
        internal_api_url: "https://catalog-internal.example.com/api/v1/".to_string(),
        cache_ttl: 0,
    }
}

/// A course-run record with the minimum fields the crate interprets, plus
/// one passthrough field.
pub(crate) fn course_run_record(course_key: &str, has_marketing_url: bool) -> CourseRunRecord {
    let mut extra = serde_json::Map::new();
    extra.insert("test_key".to_string(), json!("test_value"));

    CourseRunRecord {
        key: course_key.to_string(),
        marketing_url: has_marketing_url.then(|| {
            format!("https://marketing-site.example.com/course/course-title-{course_key}")
        }),
        extra,
    }
}

/// A minimal program record of the given type.
pub(crate) fn program_record(uuid: &str, program_type: &str) -> ProgramRecord {
    ProgramRecord {
        uuid: uuid.to_string(),
        title: Some(format!("Program {uuid}")),
        program_type: Some(program_type.to_string()),
        extra: serde_json::Map::new(),
    }
}

/// In-memory stand-in for the remote catalog service, recording every call
/// so tests can assert on how often and with what arguments the network
/// would have been hit.
pub(crate) struct FakeCatalogApi {
    pub(crate) course_run_records: Vec<CourseRunRecord>,
    pub(crate) program_records: Vec<ProgramRecord>,
    pub(crate) course_run_calls: Mutex<Vec<Vec<String>>>,
    pub(crate) program_calls: Mutex<Vec<Option<String>>>,
}

impl FakeCatalogApi {
    pub(crate) fn new() -> Self {
        Self {
            course_run_records: Vec::new(),
            program_records: Vec::new(),
            course_run_calls: Mutex::new(Vec::new()),
            program_calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_course_runs(records: Vec<CourseRunRecord>) -> Self {
        Self {
            course_run_records: records,
            ..Self::new()
        }
    }

    pub(crate) fn with_programs(records: Vec<ProgramRecord>) -> Self {
        Self {
            program_records: records,
            ..Self::new()
        }
    }

    pub(crate) async fn course_run_call_count(&self) -> usize {
        self.course_run_calls.lock().await.len()
    }

    pub(crate) async fn program_call_count(&self) -> usize {
        self.program_calls.lock().await.len()
    }
}

#[async_trait]
impl CatalogApi for FakeCatalogApi {
    async fn course_runs(
        &self,
        course_keys: &[String],
    ) -> Result<Vec<CourseRunRecord>, CatalogError> {
        self.course_run_calls.lock().await.push(course_keys.to_vec());

        Ok(self
            .course_run_records
            .iter()
            .filter(|record| course_keys.contains(&record.key))
            .cloned()
            .collect())
    }

    async fn programs(
        &self,
        program_type: Option<&str>,
    ) -> Result<Vec<ProgramRecord>, CatalogError> {
        self.program_calls
            .lock()
            .await
            .push(program_type.map(str::to_string));

        Ok(self
            .program_records
            .iter()
            .filter(|record| match program_type {
                Some(t) => record.program_type.as_deref() == Some(t),
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn program(&self, uuid: &str) -> Result<ProgramRecord, CatalogError> {
        self.program_calls.lock().await.push(Some(uuid.to_string()));

        self.program_records
            .iter()
            .find(|record| record.uuid == uuid)
            .cloned()
            .ok_or_else(|| CatalogError::UnexpectedStatus("404 Not Found".to_string()))
    }
}

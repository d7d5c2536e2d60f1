mod client;
mod config;
mod course_runs;
mod errors;
mod programs;
mod types;

pub use client::{CatalogApi, CatalogClient};
pub use config::CatalogIntegration;
pub use course_runs::{get_course_runs, get_run_marketing_urls};
pub use errors::CatalogError;
pub use programs::get_programs;
pub use types::{CourseRunRecord, ProgramQuery, ProgramRecord, Requester};

pub(crate) async fn init() -> Result<(), CatalogError> {
    // Initialize the cache store so misconfiguration fails at startup
    // rather than on the first lookup.
    crate::storage::init()
        .await
        .map_err(|e| CatalogError::Cache(e.to_string()))?;

    Ok(())
}

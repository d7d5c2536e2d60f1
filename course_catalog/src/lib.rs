//! course-catalog - helpers for working with an external course catalog
//! service.
//!
//! Retrieves course-run and program metadata over HTTP, serves repeat
//! lookups through a read-through keyed cache (in-memory or Redis), and
//! computes marketing / about-page URLs for courses.

mod catalog;
mod course;
mod storage;
#[cfg(test)]
mod test_utils;

pub use catalog::{
    CatalogApi, CatalogClient, CatalogError, CatalogIntegration, CourseRunRecord, ProgramQuery,
    ProgramRecord, Requester, get_course_runs, get_programs, get_run_marketing_urls,
};

pub use course::{MarketingConfig, link_for_about_page};

/// Initialize the catalog integration layer.
///
/// Brings up the configured cache store so that misconfiguration fails at
/// startup rather than on the first lookup.
pub async fn init() -> Result<(), Box<dyn std::error::Error>> {
    catalog::init().await?;
    Ok(())
}

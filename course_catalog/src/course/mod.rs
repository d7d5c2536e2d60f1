//! Utility helpers related to courses: resolving the URL a course's about
//! page should live at, preferring the externally hosted marketing page
//! when one exists.

use std::collections::{HashMap, HashSet};
use std::env;

use crate::catalog::{CatalogApi, CatalogError, CatalogIntegration, get_run_marketing_urls};

/// Marketing-site configuration, resolved once and passed explicitly.
#[derive(Debug, Clone)]
pub struct MarketingConfig {
    /// Whether the external marketing site is in use.
    pub enable_mktg_site: bool,
    /// Base URL of the LMS, used for the fallback about-page URL.
    pub lms_root_url: String,
}

impl MarketingConfig {
    pub fn from_env() -> Self {
        let enable_mktg_site = env::var("ENABLE_MKTG_SITE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let lms_root_url =
            env::var("LMS_ROOT_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());

        Self {
            enable_mktg_site,
            lms_root_url,
        }
    }
}

/// Returns the URL to the course about page.
///
/// With the marketing site enabled, a pre-fetched marketing-URL mapping
/// containing `course_key` is used as-is (no remote call); otherwise the
/// URL is resolved through the catalog service. A non-empty marketing URL
/// wins; in every other case the deterministic
/// `{lms_root_url}/courses/{course_key}/about` fallback is returned.
pub async fn link_for_about_page<A>(
    api: &A,
    catalog_integration: &CatalogIntegration,
    marketing: &MarketingConfig,
    course_key: &str,
    course_marketing_urls: Option<&HashMap<String, Option<String>>>,
) -> Result<String, CatalogError>
where
    A: CatalogApi + ?Sized,
{
    if marketing.enable_mktg_site {
        let supplied = course_marketing_urls.and_then(|urls| urls.get(course_key));

        let resolved = match supplied {
            Some(url) => url.clone(),
            None => {
                let mut keys = HashSet::new();
                keys.insert(course_key.to_string());

                get_run_marketing_urls(api, catalog_integration, &keys)
                    .await?
                    .remove(course_key)
                    .flatten()
            }
        };

        if let Some(url) = resolved {
            if !url.is_empty() {
                return Ok(url);
            }
        }
    }

    Ok(format!(
        "{about_base_url}/courses/{course_key}/about",
        about_base_url = marketing.lms_root_url
    ))
}

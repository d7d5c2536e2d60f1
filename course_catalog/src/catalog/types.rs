use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identity used to authenticate requests against the catalog service.
///
/// The access token is treated as an opaque bearer credential; how it is
/// minted (JWT or otherwise) is the caller's concern.
#[derive(Debug, Clone)]
pub struct Requester {
    pub username: String,
    pub access_token: String,
}

/// One scheduled offering of a course, as returned by the catalog service.
///
/// Only `key` and `marketing_url` are interpreted here; every other field
/// is carried through opaquely so cached records round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRunRecord {
    pub key: String,
    #[serde(default)]
    pub marketing_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Paginated course-run listing. Only `results` is consumed here; callers
/// requesting by key never need to walk `next`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CourseRunResults {
    pub results: Vec<CourseRunRecord>,
    #[serde(default)]
    #[allow(dead_code)]
    pub next: Option<String>,
}

/// A program (e.g. a MicroMasters) as returned by the catalog service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramRecord {
    pub uuid: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "type", default)]
    pub program_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Paginated program listing.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProgramResults {
    pub results: Vec<ProgramRecord>,
    #[serde(default)]
    #[allow(dead_code)]
    pub next: Option<String>,
}

/// Optional filters for program retrieval.
#[derive(Debug, Clone, Default)]
pub struct ProgramQuery {
    /// Request a single program by UUID. Defaults to `None` (list query).
    pub uuid: Option<String>,
    /// Filter programs by type, e.g. "MicroMasters". Defaults to `None`.
    pub program_type: Option<String>,
}

//! Job-description detail lookup
//!
//! Implements REQ-REMOTE-002, the multi-step detail protocol consumers of
//! the engine rely on: fetch the assignment list for a position record,
//! pick the approved assignment (or else the most recently updated one),
//! fetch the full description document, fetch all assignments tied to that
//! document, and merge the assignment totals into the returned detail.
//! Failures surface once; there is no automatic retry.

use super::{FetchError, FetchResult};
use crate::directory::RecordId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Detail lookup errors
#[derive(Error, Debug)]
pub enum DetailError {
    /// The record has no job-description assignments at all.
    #[error("no job description assignments for record {0}")]
    NoAssignments(RecordId),

    /// The selected assignment carries no description reference.
    #[error("assignment {0} has no description id")]
    MissingDescriptionId(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

pub type DetailResult<T> = Result<T, DetailError>;

/// One job-description assignment attached to a position record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAssignment {
    pub assignment_id: String,

    #[serde(default)]
    pub description_id: Option<String>,

    /// Workflow status; `"approved"` marks the binding version.
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl JobAssignment {
    pub fn is_approved(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("approved"))
    }
}

/// Full job-description document with assignment totals merged in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptionDetail {
    pub description_id: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub content: Option<String>,

    /// Number of assignments tied to this description, filled by the
    /// resolver from the description's own assignment list.
    #[serde(default)]
    pub assignment_count: usize,

    /// Number of those assignments that are approved.
    #[serde(default)]
    pub approved_assignment_count: usize,
}

/// Remote API surface the resolver drives.
#[async_trait]
pub trait DetailApi: Send + Sync {
    /// Assignments attached to one position record.
    async fn fetch_assignments(&self, record_id: &RecordId) -> FetchResult<Vec<JobAssignment>>;

    /// The full description document.
    async fn fetch_description(&self, description_id: &str) -> FetchResult<JobDescriptionDetail>;

    /// All assignments tied to one description, across records.
    async fn fetch_assignments_for_description(
        &self,
        description_id: &str,
    ) -> FetchResult<Vec<JobAssignment>>;
}

/// Pick the binding assignment from a record's assignment list:
/// the first approved one, or else the most recently updated.
///
/// Assignments without a timestamp sort oldest in the fallback.
pub fn select_assignment(assignments: &[JobAssignment]) -> Option<&JobAssignment> {
    if let Some(approved) = assignments.iter().find(|a| a.is_approved()) {
        return Some(approved);
    }
    assignments.iter().max_by_key(|a| a.updated_at)
}

/// Resolves the richer job-description detail for one position record.
pub struct JobDescriptionResolver<A: DetailApi> {
    api: A,
}

impl<A: DetailApi> JobDescriptionResolver<A> {
    pub fn new(api: A) -> Self {
        JobDescriptionResolver { api }
    }

    /// Run the full detail protocol for one record.
    pub async fn resolve(&self, record_id: &RecordId) -> DetailResult<JobDescriptionDetail> {
        let assignments = self.api.fetch_assignments(record_id).await?;
        let selected = select_assignment(&assignments)
            .ok_or_else(|| DetailError::NoAssignments(record_id.clone()))?;

        let description_id = selected
            .description_id
            .as_deref()
            .ok_or_else(|| DetailError::MissingDescriptionId(selected.assignment_id.clone()))?;

        debug!(%record_id, description_id, "resolving job description detail");

        let mut detail = self.api.fetch_description(description_id).await?;
        let tied = self
            .api
            .fetch_assignments_for_description(description_id)
            .await?;

        detail.assignment_count = tied.len();
        detail.approved_assignment_count = tied.iter().filter(|a| a.is_approved()).count();
        Ok(detail)
    }
}

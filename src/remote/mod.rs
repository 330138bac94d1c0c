//! Remote collaborators: snapshot fetch and detail lookup
//!
//! The engine owns no transport semantics. It pulls the flat snapshot
//! through [`DirectoryProvider`] (REQ-REMOTE-001) and resolves per-record
//! job-description details through [`detail::JobDescriptionResolver`]
//! (REQ-REMOTE-002); retries, cancellation, and authentication belong to
//! the collaborators behind these seams.

pub mod client;
pub mod detail;

pub use client::{HttpDirectoryClient, RemoteConfig};
pub use detail::{
    DetailApi, DetailError, DetailResult, JobAssignment, JobDescriptionDetail,
    JobDescriptionResolver,
};

use crate::directory::PositionRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Fetch errors
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Supplies the full, all-companies snapshot on demand.
///
/// The engine treats the returned vector as an opaque array and replaces
/// its store wholesale with it.
#[async_trait]
pub trait DirectoryProvider: Send + Sync {
    async fn fetch_snapshot(&self) -> FetchResult<Vec<PositionRecord>>;
}

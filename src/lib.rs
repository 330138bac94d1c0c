//! Peoplegraph Organizational Hierarchy Engine
//!
//! Takes the flat, company-wide list of position records an HR directory
//! provider supplies (real employees and open vacancy slots, each optionally
//! pointing at a manager) and derives everything the org-chart screen needs:
//! the per-company partition, searchable and filterable views, summary
//! counters, initial tree roots, and ancestor-path expansion for
//! jump-to-employee navigation.
//!
//! # Requirements Implemented
//!
//! - ✅ REQ-DIR-001: Flat position records covering employees and vacancies
//! - ✅ REQ-DIR-002: Whole-snapshot replace on fetch, no incremental patching
//! - ✅ REQ-DIR-003: Tolerant multi-source vacancy classification
//! - ✅ REQ-PART-001: Company picker with occurrence counts and "ALL" option
//! - ✅ REQ-PART-002: Per-company partition of the snapshot
//! - ✅ REQ-SEARCH-001: Case-insensitive free-text search across fixed fields
//! - ✅ REQ-FILTER-001: Multi-select filter criteria with flag filters
//! - ✅ REQ-SUM-001: Employee/manager/department/function/vacancy counters
//! - ✅ REQ-TREE-001: Expansion set with toggle, replace, and merge
//! - ✅ REQ-TREE-002: Three-tier initial root detection
//! - ✅ REQ-TREE-003: Cycle-guarded ancestor walk
//! - ✅ REQ-PERSIST-001: Selected company behind a narrow key-value contract
//! - ✅ REQ-REMOTE-001: Snapshot fetch boundary
//! - ✅ REQ-REMOTE-002: Job-description detail protocol
//! - ✅ REQ-ENGINE-001: Synchronous partition -> criteria -> search pipeline
//!
//! ## Example Usage
//!
//! ```rust
//! use peoplegraph::directory::PositionRecord;
//! use peoplegraph::engine::OrgEngine;
//! use peoplegraph::persistence::MemorySelectionStore;
//! use peoplegraph::view::CompanySelection;
//!
//! let mut engine = OrgEngine::new(Box::new(MemorySelectionStore::new())).unwrap();
//!
//! let mut alice = PositionRecord::new("rec-1", "E1");
//! alice.name = Some("Alice".to_string());
//! alice.business_function = Some("Alpha".to_string());
//! engine.set_snapshot(vec![alice]);
//!
//! engine.select_company(CompanySelection::All).unwrap();
//! assert_eq!(engine.summary().total_employees, 1);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod directory;
pub mod engine;
pub mod persistence;
pub mod remote;
pub mod tree;
pub mod view;

// Re-export main types for convenience
pub use directory::{EmployeeDetails, EmployeeId, PositionRecord, RecordId, RecordStore};

pub use engine::{EngineError, EngineResult, OrgEngine};

pub use persistence::{
    FileSelectionStore, MemorySelectionStore, SelectionError, SelectionResult, SelectionStore,
};

pub use remote::{
    DetailApi, DetailError, DetailResult, DirectoryProvider, FetchError, FetchResult,
    HttpDirectoryClient, JobAssignment, JobDescriptionDetail, JobDescriptionResolver,
    RemoteConfig,
};

pub use tree::{compute_initial_roots, ExpansionController, PathExpansion};

pub use view::{
    apply_search, compute_summary, compute_vacancy_count, list_companies, partition_by_company,
    CompanyOption, CompanySelection, FilterCriteria, Summary, ALL_COMPANIES,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

//! Derived views over the directory snapshot
//!
//! Every view here is a pure, synchronous projection recomputed from the
//! latest snapshot plus the current selection and filter state:
//! - Company picker options and per-company partition (REQ-PART-001/002)
//! - Advanced filter criteria (REQ-FILTER-001)
//! - Free-text search (REQ-SEARCH-001)
//! - Summary counters (REQ-SUM-001)

pub mod company;
pub mod criteria;
pub mod search;
pub mod summary;

// Re-export main types
pub use company::{
    list_companies, partition_by_company, CompanyOption, CompanySelection, ALL_COMPANIES,
};
pub use criteria::FilterCriteria;
pub use search::apply_search;
pub use summary::{compute_summary, compute_vacancy_count, Summary};

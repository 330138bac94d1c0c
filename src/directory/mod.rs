//! Flat organizational directory: position records and snapshot storage
//!
//! This module implements the directory data model:
//! - Position records covering employees and open vacancies (REQ-DIR-001)
//! - Whole-snapshot in-memory storage with lookup indexes (REQ-DIR-002)
//! - Centralized multi-source vacancy classification (REQ-DIR-003)

pub mod record;
pub mod store;
pub mod types;

// Re-export main types
pub use record::{EmployeeDetails, PositionRecord};
pub use store::RecordStore;
pub use types::{EmployeeId, RecordId};

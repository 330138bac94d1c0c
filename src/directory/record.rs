//! Position record model for the flat organizational snapshot
//!
//! Implements:
//! - REQ-DIR-001: Flat position records (employees and open vacancies)
//! - REQ-DIR-003: Tolerant multi-source vacancy classification

use super::types::{EmployeeId, RecordId};
use serde::{Deserialize, Serialize};

/// Display-name marker some provider versions use instead of a vacancy flag.
const VACANT_NAME_MARKER: &str = "[VACANT]";

/// Embedded employee details, present on some provider versions.
///
/// Only the nested vacancy flag is consumed here; the rest of the object is
/// passed through untouched for the rendering layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetails {
    /// Nested vacancy flag, the highest-priority vacancy signal.
    #[serde(default, alias = "vacancy")]
    pub is_vacancy: Option<bool>,
}

/// One row of the flat organizational snapshot: a real employee or an open
/// vacancy slot.
///
/// All descriptive attributes are optional; the upstream provider omits
/// whatever it does not know. `line_manager_id` may reference an employee id
/// that is absent from the same snapshot (a dangling link) and every consumer
/// of this type tolerates that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRecord {
    /// Database-level key, stable across snapshots.
    pub record_id: RecordId,

    /// Business key, unique within one snapshot.
    pub employee_id: EmployeeId,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub department: Option<String>,

    #[serde(default)]
    pub unit: Option<String>,

    /// Company partition key.
    #[serde(default)]
    pub business_function: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    /// Manager link; absence means this record is the root of its subtree.
    #[serde(default)]
    pub line_manager_id: Option<EmployeeId>,

    #[serde(default)]
    pub direct_reports_count: u32,

    #[serde(default)]
    pub grading_level: Option<String>,

    #[serde(default)]
    pub gender: Option<String>,

    /// Embedded details object carrying the nested vacancy flag.
    #[serde(default)]
    pub employee_details: Option<EmployeeDetails>,

    /// Top-level vacancy flag (current provider versions).
    #[serde(default)]
    pub is_vacancy: Option<bool>,

    /// Legacy vacancy flag (older provider versions).
    #[serde(default)]
    pub vacant: Option<bool>,

    /// Record kind discriminator; `"vacancy"` marks an unfilled position.
    #[serde(default)]
    pub record_type: Option<String>,
}

impl PositionRecord {
    /// Create a record with just its keys; everything else defaults to empty.
    pub fn new(record_id: impl Into<RecordId>, employee_id: impl Into<EmployeeId>) -> Self {
        PositionRecord {
            record_id: record_id.into(),
            employee_id: employee_id.into(),
            ..Default::default()
        }
    }

    /// Whether this record manages at least one direct report.
    pub fn is_manager(&self) -> bool {
        self.direct_reports_count > 0
    }

    /// Whether this record is the root of its subtree.
    pub fn is_top_level(&self) -> bool {
        self.line_manager_id.is_none()
    }

    /// Resolve the vacancy classification from the provider's historical
    /// flag variants.
    ///
    /// The provider has emitted the flag under different keys across API
    /// versions, so all of them are checked, in fixed priority order:
    ///
    /// 1. nested `employeeDetails.isVacancy`
    /// 2. top-level `isVacancy`
    /// 3. legacy `vacant`
    /// 4. `recordType == "vacancy"` (ASCII case-insensitive)
    /// 5. display name containing `[VACANT]`
    ///
    /// The record counts as vacant if any signal is true; the walk returns at
    /// the first true signal.
    pub fn is_vacant(&self) -> bool {
        if let Some(details) = &self.employee_details {
            if details.is_vacancy == Some(true) {
                return true;
            }
        }
        if self.is_vacancy == Some(true) {
            return true;
        }
        if self.vacant == Some(true) {
            return true;
        }
        if let Some(kind) = &self.record_type {
            if kind.eq_ignore_ascii_case("vacancy") {
                return true;
            }
        }
        if let Some(name) = &self.name {
            if name.contains(VACANT_NAME_MARKER) {
                return true;
            }
        }
        false
    }
}

//! Aggregate counters over the currently filtered record set
//!
//! Implements REQ-SUM-001: employee/manager/department/business-function
//! counters and the vacancy count, each a single O(n) pass.

use crate::directory::PositionRecord;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Snapshot-derived counters, recomputed on every filter change and never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_employees: usize,
    pub total_managers: usize,
    pub total_departments: usize,
    pub total_business_functions: usize,
    pub vacant_count: usize,
}

/// Compute all counters for an already-filtered record set.
///
/// Distinct-value counters exclude empty strings; vacancy classification
/// goes through the centralized resolution on the record.
pub fn compute_summary(records: &[PositionRecord]) -> Summary {
    let mut departments: FxHashSet<&str> = FxHashSet::default();
    let mut business_functions: FxHashSet<&str> = FxHashSet::default();
    let mut total_managers = 0;
    let mut vacant_count = 0;

    for rec in records {
        if rec.is_manager() {
            total_managers += 1;
        }
        if rec.is_vacant() {
            vacant_count += 1;
        }
        if let Some(department) = rec.department.as_deref() {
            if !department.is_empty() {
                departments.insert(department);
            }
        }
        if let Some(function) = rec.business_function.as_deref() {
            if !function.is_empty() {
                business_functions.insert(function);
            }
        }
    }

    Summary {
        total_employees: records.len(),
        total_managers,
        total_departments: departments.len(),
        total_business_functions: business_functions.len(),
        vacant_count,
    }
}

/// Count the records classified as vacant.
pub fn compute_vacancy_count(records: &[PositionRecord]) -> usize {
    records.iter().filter(|rec| rec.is_vacant()).count()
}

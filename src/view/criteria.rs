//! Advanced filter criteria over the company-partitioned record set
//!
//! Implements REQ-FILTER-001: multi-select dimensions, top-level and
//! managers-only flags, and the free-text search, applied as one
//! conjunction.

use super::search::apply_search;
use crate::directory::PositionRecord;
use serde::{Deserialize, Serialize};

/// User-configured filter state.
///
/// Empty vectors and an empty search string mean "no constraint on this
/// dimension". Multi-select dimensions are OR within the dimension and AND
/// across dimensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub business_function: Vec<String>,
    pub department: Vec<String>,
    /// Matched against the record title; the picker offers distinct titles.
    pub position_group: Vec<String>,
    /// Matched against the manager link of the record.
    pub line_manager: Vec<String>,
    pub unit: Vec<String>,
    pub grading_level: Vec<String>,
    pub gender: Vec<String>,
    pub show_top_level_only: bool,
    pub managers_only: bool,
    pub search: String,
}

impl FilterCriteria {
    pub fn new() -> Self {
        FilterCriteria::default()
    }

    /// True when no dimension, flag, or search text constrains the view.
    pub fn is_empty(&self) -> bool {
        self.business_function.is_empty()
            && self.department.is_empty()
            && self.position_group.is_empty()
            && self.line_manager.is_empty()
            && self.unit.is_empty()
            && self.grading_level.is_empty()
            && self.gender.is_empty()
            && !self.show_top_level_only
            && !self.managers_only
            && self.search.trim().is_empty()
    }

    /// Drop every constraint. Part of the engine's atomic reset action.
    pub fn reset(&mut self) {
        *self = FilterCriteria::default();
    }

    /// Apply every constraint to an already company-partitioned set.
    ///
    /// Dimension filters and flags run first, the free-text search last;
    /// input order is preserved throughout.
    pub fn apply(&self, records: &[PositionRecord]) -> Vec<PositionRecord> {
        let filtered: Vec<PositionRecord> = records
            .iter()
            .filter(|rec| self.matches_dimensions(rec))
            .cloned()
            .collect();

        apply_search(&filtered, &self.search)
    }

    fn matches_dimensions(&self, rec: &PositionRecord) -> bool {
        if self.show_top_level_only && !rec.is_top_level() {
            return false;
        }
        if self.managers_only && !rec.is_manager() {
            return false;
        }

        dimension_matches(&self.business_function, rec.business_function.as_deref())
            && dimension_matches(&self.department, rec.department.as_deref())
            && dimension_matches(&self.position_group, rec.title.as_deref())
            && dimension_matches(
                &self.line_manager,
                rec.line_manager_id.as_ref().map(|id| id.as_str()),
            )
            && dimension_matches(&self.unit, rec.unit.as_deref())
            && dimension_matches(&self.grading_level, rec.grading_level.as_deref())
            && dimension_matches(&self.gender, rec.gender.as_deref())
    }
}

/// One multi-select dimension: empty allows everything, otherwise the record
/// value must be present and among the selected values.
fn dimension_matches(selected: &[String], value: Option<&str>) -> bool {
    if selected.is_empty() {
        return true;
    }
    match value {
        Some(value) => selected.iter().any(|s| s == value),
        None => false,
    }
}

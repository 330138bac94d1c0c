//! Company partitioning over the flat snapshot
//!
//! Implements:
//! - REQ-PART-001: Selectable company list with occurrence counts
//! - REQ-PART-002: Partition of the snapshot down to one company or "ALL"

use crate::directory::PositionRecord;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Synthetic option value covering the whole organization.
pub const ALL_COMPANIES: &str = "ALL";

/// One entry of the company picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyOption {
    pub value: String,
    pub label: String,
    pub count: usize,
    pub is_all: bool,
}

/// The active company choice.
///
/// `None` at the engine level means no choice has been made yet, which is a
/// distinct state from selecting a company that happens to have no records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanySelection {
    /// Whole organization, no partition applied.
    All,
    /// One business function.
    BusinessFunction(String),
}

impl CompanySelection {
    /// Parse a persisted option value back into a selection.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_COMPANIES {
            CompanySelection::All
        } else {
            CompanySelection::BusinessFunction(value.to_string())
        }
    }

    /// The option value this selection round-trips through persistence as.
    pub fn as_value(&self) -> &str {
        match self {
            CompanySelection::All => ALL_COMPANIES,
            CompanySelection::BusinessFunction(name) => name,
        }
    }
}

/// Derive the company picker entries from the full snapshot.
///
/// Groups by business function, counts occurrences, sorts descending by
/// count (ties broken alphabetically so the list is deterministic), and
/// prepends the synthetic "ALL" option counting every record. Records with
/// no business function are excluded from individual buckets but still count
/// toward "ALL".
pub fn list_companies(records: &[PositionRecord]) -> Vec<CompanyOption> {
    let mut buckets: IndexMap<&str, usize> = IndexMap::new();
    for rec in records {
        if let Some(function) = rec.business_function.as_deref() {
            if !function.is_empty() {
                *buckets.entry(function).or_insert(0) += 1;
            }
        }
    }

    let mut options: Vec<CompanyOption> = buckets
        .into_iter()
        .map(|(function, count)| CompanyOption {
            value: function.to_string(),
            label: function.to_string(),
            count,
            is_all: false,
        })
        .collect();
    options.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));

    let mut result = Vec::with_capacity(options.len() + 1);
    result.push(CompanyOption {
        value: ALL_COMPANIES.to_string(),
        label: ALL_COMPANIES.to_string(),
        count: records.len(),
        is_all: true,
    });
    result.extend(options);
    result
}

/// Filter the snapshot down to the selected company.
///
/// No selection yields an empty set: an explicit company choice is required
/// before any tree is shown. Unknown selections also yield an empty set
/// rather than an error.
pub fn partition_by_company(
    records: &[PositionRecord],
    selection: Option<&CompanySelection>,
) -> Vec<PositionRecord> {
    match selection {
        None => Vec::new(),
        Some(CompanySelection::All) => records.to_vec(),
        Some(CompanySelection::BusinessFunction(name)) => records
            .iter()
            .filter(|rec| rec.business_function.as_deref() == Some(name.as_str()))
            .cloned()
            .collect(),
    }
}

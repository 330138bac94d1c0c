//! Free-text search over the company-partitioned record set
//!
//! Implements REQ-SEARCH-001: case-insensitive substring match across a
//! fixed field set with OR semantics.

use crate::directory::PositionRecord;

/// Filter records by a free-text needle.
///
/// Empty or whitespace-only input returns the records unchanged. Otherwise
/// the trimmed, lowercased needle is matched as a substring against name,
/// employee id, email, title, department, unit, and business function; a
/// record matches if any field contains it. Missing fields never match.
/// Input order is preserved; no ranking.
pub fn apply_search(records: &[PositionRecord], search_text: &str) -> Vec<PositionRecord> {
    let needle = search_text.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|rec| matches_record(rec, &needle))
        .cloned()
        .collect()
}

fn matches_record(rec: &PositionRecord, needle: &str) -> bool {
    let fields = [
        rec.name.as_deref(),
        Some(rec.employee_id.as_str()),
        rec.email.as_deref(),
        rec.title.as_deref(),
        rec.department.as_deref(),
        rec.unit.as_deref(),
        rec.business_function.as_deref(),
    ];

    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

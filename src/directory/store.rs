//! In-memory snapshot storage for position records
//!
//! Implements:
//! - REQ-DIR-002: Whole-snapshot replace on fetch, no incremental patching
//! - REQ-MEM-001: In-memory storage with hash-based lookup indexes

use super::record::PositionRecord;
use super::types::{EmployeeId, RecordId};
use std::collections::HashMap;
use tracing::info;

/// Holds the last-fetched flat snapshot for the whole organization.
///
/// A new fetch replaces the snapshot wholesale; derived views (company
/// partition, filtered sets, summaries) are always recomputed from the
/// current snapshot and never patched in place. Lookup indexes are rebuilt
/// on each replace:
/// - employee_index: EmployeeId -> position in the snapshot vector
/// - record_index: RecordId -> position in the snapshot vector
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<PositionRecord>,
    employee_index: HashMap<EmployeeId, usize>,
    record_index: HashMap<RecordId, usize>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        RecordStore::default()
    }

    /// Replace the whole snapshot and rebuild the lookup indexes.
    ///
    /// Employee ids are unique within a snapshot; if the provider ever
    /// violates that, the last record with a given id wins the index slot
    /// while the snapshot vector keeps every row.
    pub fn replace_snapshot(&mut self, records: Vec<PositionRecord>) {
        self.employee_index = records
            .iter()
            .enumerate()
            .map(|(idx, rec)| (rec.employee_id.clone(), idx))
            .collect();
        self.record_index = records
            .iter()
            .enumerate()
            .map(|(idx, rec)| (rec.record_id.clone(), idx))
            .collect();
        self.records = records;

        info!(count = self.records.len(), "directory snapshot replaced");
    }

    /// The current snapshot, all companies.
    pub fn records(&self) -> &[PositionRecord] {
        &self.records
    }

    /// Look up one record by its business key.
    pub fn get_by_employee_id(&self, id: &EmployeeId) -> Option<&PositionRecord> {
        self.employee_index.get(id).map(|&idx| &self.records[idx])
    }

    /// Look up one record by its database-level key.
    pub fn get_by_record_id(&self, id: &RecordId) -> Option<&PositionRecord> {
        self.record_index.get(id).map(|&idx| &self.records[idx])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop the snapshot and all indexes.
    pub fn clear(&mut self) {
        self.records.clear();
        self.employee_index.clear();
        self.record_index.clear();
        info!("directory snapshot cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(employee_id: &str) -> PositionRecord {
        PositionRecord::new(format!("rec-{employee_id}"), employee_id)
    }

    #[test]
    fn test_replace_and_lookup() {
        let mut store = RecordStore::new();
        assert!(store.is_empty());

        store.replace_snapshot(vec![record("E1"), record("E2")]);
        assert_eq!(store.len(), 2);

        let found = store.get_by_employee_id(&EmployeeId::new("E2")).unwrap();
        assert_eq!(found.record_id, RecordId::new("rec-E2"));

        let found = store.get_by_record_id(&RecordId::new("rec-E1")).unwrap();
        assert_eq!(found.employee_id, EmployeeId::new("E1"));

        assert!(store.get_by_employee_id(&EmployeeId::new("E9")).is_none());
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut store = RecordStore::new();
        store.replace_snapshot(vec![record("E1"), record("E2")]);
        store.replace_snapshot(vec![record("E3")]);

        assert_eq!(store.len(), 1);
        assert!(store.get_by_employee_id(&EmployeeId::new("E1")).is_none());
        assert!(store.get_by_employee_id(&EmployeeId::new("E3")).is_some());
    }

    #[test]
    fn test_clear() {
        let mut store = RecordStore::new();
        store.replace_snapshot(vec![record("E1")]);
        store.clear();

        assert!(store.is_empty());
        assert!(store.get_by_employee_id(&EmployeeId::new("E1")).is_none());
    }
}

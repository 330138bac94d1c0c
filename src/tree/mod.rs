//! Tree expansion state for the rendered hierarchy
//!
//! Implements:
//! - REQ-TREE-001: Expansion set mutated by toggles, root replacement, and
//!   ancestor-path merges
//! - REQ-TREE-002: Three-tier initial root detection
//! - REQ-TREE-003: Cycle-guarded upward ancestor walk for
//!   jump-to-employee navigation

use crate::directory::{EmployeeId, PositionRecord};
use rustc_hash::FxHashSet;
use std::collections::HashMap;
use tracing::warn;

/// How many records to force-expand when root detection finds nothing at
/// all, so the tree never renders completely collapsed.
const FALLBACK_ROOT_COUNT: usize = 3;

/// Result of an upward ancestor walk.
///
/// Ancestors are ordered nearest-first: for a chain C -> B -> A the walk
/// from C yields `["B", "A"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpansion {
    pub ancestors: Vec<EmployeeId>,
    /// Set when the manager chain looped back on itself; the walk stops at
    /// the first id it has already seen and keeps what it collected so far.
    pub cycle_detected: bool,
}

/// Owns the set of node identifiers currently expanded for rendering.
///
/// The set's lifetime matches the active company selection: switching
/// companies or resetting replaces or clears it, after which initial roots
/// repopulate it for the new filtered view.
#[derive(Debug, Default)]
pub struct ExpansionController {
    expanded: FxHashSet<EmployeeId>,
}

impl ExpansionController {
    pub fn new() -> Self {
        ExpansionController::default()
    }

    /// The ids currently expanded.
    pub fn expanded(&self) -> &FxHashSet<EmployeeId> {
        &self.expanded
    }

    pub fn is_expanded(&self, id: &EmployeeId) -> bool {
        self.expanded.contains(id)
    }

    /// Add the id if absent, remove it otherwise.
    pub fn toggle(&mut self, id: EmployeeId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    /// Replace the whole set with the initial roots for a filtered view.
    pub fn reset_to_roots(&mut self, records: &[PositionRecord]) -> Vec<EmployeeId> {
        let roots = compute_initial_roots(records);
        self.expanded = roots.iter().cloned().collect();
        roots
    }

    /// Union an ancestor path into the set (merge, not replace) so the
    /// target employee becomes visible.
    pub fn expand_path_to(
        &mut self,
        target: &EmployeeId,
        records: &[PositionRecord],
    ) -> PathExpansion {
        let expansion = collect_ancestors(target, records);
        self.expanded.extend(expansion.ancestors.iter().cloned());
        expansion
    }

    pub fn clear(&mut self) {
        self.expanded.clear();
    }
}

/// Pick the ids to expand when a filtered view is first shown.
///
/// Three tiers, in order:
/// 1. records with no manager link (true roots);
/// 2. records whose direct-reports count equals the observed maximum, when
///    every record has a manager (the largest managers act as roots);
/// 3. the first three records of the view, so a non-empty view is never
///    rendered with nothing expanded.
pub fn compute_initial_roots(records: &[PositionRecord]) -> Vec<EmployeeId> {
    let true_roots: Vec<EmployeeId> = records
        .iter()
        .filter(|rec| rec.is_top_level())
        .map(|rec| rec.employee_id.clone())
        .collect();
    if !true_roots.is_empty() {
        return true_roots;
    }

    let max_reports = records
        .iter()
        .map(|rec| rec.direct_reports_count)
        .max()
        .unwrap_or(0);
    if max_reports > 0 {
        return records
            .iter()
            .filter(|rec| rec.direct_reports_count == max_reports)
            .map(|rec| rec.employee_id.clone())
            .collect();
    }

    records
        .iter()
        .take(FALLBACK_ROOT_COUNT)
        .map(|rec| rec.employee_id.clone())
        .collect()
}

/// Walk manager links upward from the target's own manager, nearest-first.
///
/// The walk stops at a record with no manager, at a dangling manager
/// reference, or at the first id it has already visited (a cycle in the
/// upstream data). Dangling references are not an error; cycles are
/// reported on the result and logged.
fn collect_ancestors(target: &EmployeeId, records: &[PositionRecord]) -> PathExpansion {
    let by_employee: HashMap<&EmployeeId, &PositionRecord> =
        records.iter().map(|rec| (&rec.employee_id, rec)).collect();

    let mut ancestors = Vec::new();
    let mut visited: FxHashSet<&EmployeeId> = FxHashSet::default();
    visited.insert(target);

    let mut current = by_employee
        .get(target)
        .and_then(|rec| rec.line_manager_id.as_ref());

    while let Some(manager_id) = current {
        let Some(manager) = by_employee.get(manager_id) else {
            // Dangling reference: the manager is not in this snapshot, so
            // there is nothing further to expand.
            break;
        };

        if !visited.insert(manager_id) {
            warn!(
                employee = %target,
                manager = %manager_id,
                "manager chain cycles back on itself, stopping ancestor walk"
            );
            return PathExpansion {
                ancestors,
                cycle_detected: true,
            };
        }

        ancestors.push(manager_id.clone());
        current = manager.line_manager_id.as_ref();
    }

    PathExpansion {
        ancestors,
        cycle_detected: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(employee_id: &str, manager: Option<&str>, reports: u32) -> PositionRecord {
        let mut rec = PositionRecord::new(format!("rec-{employee_id}"), employee_id);
        rec.line_manager_id = manager.map(EmployeeId::from);
        rec.direct_reports_count = reports;
        rec
    }

    #[test]
    fn test_toggle() {
        let mut controller = ExpansionController::new();
        let id = EmployeeId::new("E1");

        controller.toggle(id.clone());
        assert!(controller.is_expanded(&id));

        controller.toggle(id.clone());
        assert!(!controller.is_expanded(&id));
    }

    #[test]
    fn test_roots_prefer_manager_less_records() {
        let records = vec![
            record("A", None, 2),
            record("B", Some("A"), 5),
            record("C", Some("B"), 0),
        ];
        assert_eq!(compute_initial_roots(&records), vec![EmployeeId::new("A")]);
    }

    #[test]
    fn test_roots_fall_back_to_largest_managers() {
        // Every record has a manager link (all dangle or loop) so the
        // largest managers act as roots.
        let records = vec![
            record("A", Some("X"), 3),
            record("B", Some("X"), 7),
            record("C", Some("X"), 7),
        ];
        assert_eq!(
            compute_initial_roots(&records),
            vec![EmployeeId::new("B"), EmployeeId::new("C")]
        );
    }

    #[test]
    fn test_roots_final_fallback_takes_first_three() {
        let records = vec![
            record("A", Some("X"), 0),
            record("B", Some("X"), 0),
            record("C", Some("X"), 0),
            record("D", Some("X"), 0),
        ];
        assert_eq!(
            compute_initial_roots(&records),
            vec![
                EmployeeId::new("A"),
                EmployeeId::new("B"),
                EmployeeId::new("C")
            ]
        );
    }

    #[test]
    fn test_roots_never_empty_for_non_empty_input() {
        let records = vec![record("A", Some("X"), 0)];
        assert!(!compute_initial_roots(&records).is_empty());
    }

    #[test]
    fn test_reset_to_roots_replaces_set() {
        let mut controller = ExpansionController::new();
        controller.toggle(EmployeeId::new("STALE"));

        let records = vec![record("A", None, 1), record("B", Some("A"), 0)];
        controller.reset_to_roots(&records);

        assert!(controller.is_expanded(&EmployeeId::new("A")));
        assert!(!controller.is_expanded(&EmployeeId::new("STALE")));
    }

    #[test]
    fn test_expand_path_nearest_first() {
        let records = vec![
            record("A", None, 1),
            record("B", Some("A"), 1),
            record("C", Some("B"), 0),
        ];

        let mut controller = ExpansionController::new();
        let expansion = controller.expand_path_to(&EmployeeId::new("C"), &records);

        assert_eq!(
            expansion.ancestors,
            vec![EmployeeId::new("B"), EmployeeId::new("A")]
        );
        assert!(!expansion.cycle_detected);
        assert!(controller.is_expanded(&EmployeeId::new("B")));
        assert!(controller.is_expanded(&EmployeeId::new("A")));
    }

    #[test]
    fn test_expand_path_merges_into_existing_set() {
        let records = vec![record("A", None, 1), record("B", Some("A"), 0)];

        let mut controller = ExpansionController::new();
        controller.toggle(EmployeeId::new("KEEP"));
        controller.expand_path_to(&EmployeeId::new("B"), &records);

        assert!(controller.is_expanded(&EmployeeId::new("KEEP")));
        assert!(controller.is_expanded(&EmployeeId::new("A")));
    }

    #[test]
    fn test_expand_path_no_manager_yields_empty() {
        let records = vec![record("A", None, 0)];
        let mut controller = ExpansionController::new();
        let expansion = controller.expand_path_to(&EmployeeId::new("A"), &records);
        assert!(expansion.ancestors.is_empty());
        assert!(!expansion.cycle_detected);
    }

    #[test]
    fn test_expand_path_stops_at_dangling_reference() {
        let records = vec![
            record("A", None, 1),
            record("B", Some("GHOST"), 1),
            record("C", Some("B"), 0),
        ];
        let mut controller = ExpansionController::new();
        let expansion = controller.expand_path_to(&EmployeeId::new("C"), &records);
        // B is collected, then the walk stops at the manager that is absent
        // from the snapshot.
        assert_eq!(expansion.ancestors, vec![EmployeeId::new("B")]);
        assert!(!expansion.cycle_detected);
    }

    #[test]
    fn test_expand_path_terminates_on_cycle() {
        let records = vec![
            record("A", Some("B"), 1),
            record("B", Some("A"), 1),
            record("C", Some("A"), 0),
        ];

        let mut controller = ExpansionController::new();
        let expansion = controller.expand_path_to(&EmployeeId::new("C"), &records);

        assert!(expansion.cycle_detected);
        assert_eq!(
            expansion.ancestors,
            vec![EmployeeId::new("A"), EmployeeId::new("B")]
        );
    }

    #[test]
    fn test_expand_path_unknown_target_yields_empty() {
        let records = vec![record("A", None, 0)];
        let mut controller = ExpansionController::new();
        let expansion = controller.expand_path_to(&EmployeeId::new("NOPE"), &records);
        assert!(expansion.ancestors.is_empty());
    }
}

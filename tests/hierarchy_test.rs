use peoplegraph::directory::{EmployeeDetails, EmployeeId, PositionRecord};
use peoplegraph::tree::{compute_initial_roots, ExpansionController};
use peoplegraph::view::{
    apply_search, compute_summary, compute_vacancy_count, list_companies, partition_by_company,
    CompanySelection,
};

fn record(employee_id: &str, manager: Option<&str>, reports: u32) -> PositionRecord {
    let mut rec = PositionRecord::new(format!("rec-{employee_id}"), employee_id);
    rec.line_manager_id = manager.map(EmployeeId::from);
    rec.direct_reports_count = reports;
    rec
}

#[test]
fn test_company_option_invariants() {
    let mut records = Vec::new();
    for (id, function) in [
        ("E1", Some("Alpha")),
        ("E2", Some("Alpha")),
        ("E3", Some("Beta")),
        ("E4", None),
    ] {
        let mut rec = record(id, None, 0);
        rec.business_function = function.map(str::to_string);
        records.push(rec);
    }

    let options = list_companies(&records);

    let all = &options[0];
    assert!(all.is_all);
    assert_eq!(all.count, records.len());

    let partitioned: usize = options.iter().filter(|o| !o.is_all).map(|o| o.count).sum();
    assert!(partitioned <= records.len());

    // Descending by count after ALL.
    assert_eq!(options[1].value, "Alpha");
    assert_eq!(options[1].count, 2);
    assert_eq!(options[2].value, "Beta");
    assert_eq!(options[2].count, 1);
}

#[test]
fn test_partition_all_is_identity_search_empty_is_identity() {
    let mut records = vec![record("E1", None, 0), record("E2", Some("E1"), 0)];
    records[0].business_function = Some("Alpha".to_string());
    records[1].business_function = Some("Beta".to_string());

    assert_eq!(
        partition_by_company(&records, Some(&CompanySelection::All)),
        records
    );
    assert_eq!(apply_search(&records, ""), records);
}

#[test]
fn test_summary_on_empty_is_all_zero() {
    let summary = compute_summary(&[]);
    assert_eq!(summary.total_employees, 0);
    assert_eq!(summary.total_managers, 0);
    assert_eq!(summary.total_departments, 0);
    assert_eq!(summary.total_business_functions, 0);
    assert_eq!(summary.vacant_count, 0);
}

#[test]
fn test_initial_roots_three_tier_fallback() {
    // Tier 1: true roots.
    let records = vec![record("A", None, 0), record("B", Some("A"), 0)];
    assert_eq!(compute_initial_roots(&records), vec![EmployeeId::new("A")]);

    // Tier 2: no true roots, the largest managers win.
    let records = vec![
        record("A", Some("GHOST"), 4),
        record("B", Some("GHOST"), 9),
    ];
    assert_eq!(compute_initial_roots(&records), vec![EmployeeId::new("B")]);

    // Tier 3: nothing qualifies, take the first three.
    let records: Vec<PositionRecord> = ["A", "B", "C", "D"]
        .into_iter()
        .map(|id| record(id, Some("GHOST"), 0))
        .collect();
    assert_eq!(compute_initial_roots(&records).len(), 3);

    // Never empty on non-empty input.
    let records = vec![record("A", Some("GHOST"), 0)];
    assert!(!compute_initial_roots(&records).is_empty());
}

#[test]
fn test_ancestor_path_is_nearest_first() {
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

    let no_manager = controller.expand_path_to(&EmployeeId::new("A"), &records);
    assert!(no_manager.ancestors.is_empty());
}

#[test]
fn test_ancestor_walk_survives_manager_cycle() {
    // A and B manage each other: broken upstream data. The walk must
    // terminate and say so rather than loop forever.
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

    // The controller is still usable afterwards.
    controller.toggle(EmployeeId::new("C"));
    assert!(controller.is_expanded(&EmployeeId::new("C")));
}

#[test]
fn test_vacancy_signal_matrix() {
    // Nested details flag alone.
    let mut nested = record("E1", None, 0);
    nested.employee_details = Some(EmployeeDetails {
        is_vacancy: Some(true),
    });

    // Top-level flag.
    let mut top_level = record("E2", None, 0);
    top_level.is_vacancy = Some(true);

    // Legacy flag.
    let mut legacy = record("E3", None, 0);
    legacy.vacant = Some(true);

    // Record type discriminator.
    let mut typed = record("E4", None, 0);
    typed.record_type = Some("vacancy".to_string());

    // Display-name marker.
    let mut marked = record("E5", None, 0);
    marked.name = Some("[VACANT] Controller".to_string());

    // A filled position with an explicit false nested flag.
    let mut filled = record("E6", None, 0);
    filled.employee_details = Some(EmployeeDetails {
        is_vacancy: Some(false),
    });

    let records = vec![nested, top_level, legacy, typed, marked, filled];
    assert_eq!(compute_vacancy_count(&records), 5);
}

use peoplegraph::directory::PositionRecord;
use peoplegraph::engine::OrgEngine;
use peoplegraph::persistence::FileSelectionStore;
use peoplegraph::view::CompanySelection;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Peoplegraph v{}", peoplegraph::version());
    println!("==========================================");
    println!();

    let store = FileSelectionStore::open(".peoplegraph/selection.json");
    let mut engine = OrgEngine::new(Box::new(store))?;
    engine.set_snapshot(demo_snapshot());

    demo_company_picker(&engine);
    demo_filtered_view(&mut engine)?;
    demo_navigation(&mut engine);

    Ok(())
}

fn demo_snapshot() -> Vec<PositionRecord> {
    let mut records = Vec::new();

    let mut rec = PositionRecord::new("rec-1", "E100");
    rec.name = Some("Dana Moreau".to_string());
    rec.title = Some("Managing Director".to_string());
    rec.department = Some("Executive".to_string());
    rec.business_function = Some("Group Holding".to_string());
    rec.direct_reports_count = 2;
    records.push(rec);

    let mut rec = PositionRecord::new("rec-2", "E200");
    rec.name = Some("Jonas Keller".to_string());
    rec.title = Some("Head of Finance".to_string());
    rec.department = Some("Finance".to_string());
    rec.business_function = Some("Group Holding".to_string());
    rec.line_manager_id = Some("E100".into());
    rec.direct_reports_count = 1;
    records.push(rec);

    let mut rec = PositionRecord::new("rec-3", "E201");
    rec.name = Some("[VACANT] Payroll Specialist".to_string());
    rec.title = Some("Payroll Specialist".to_string());
    rec.department = Some("Finance".to_string());
    rec.business_function = Some("Group Holding".to_string());
    rec.line_manager_id = Some("E200".into());
    records.push(rec);

    let mut rec = PositionRecord::new("rec-4", "E300");
    rec.name = Some("Mia Santos".to_string());
    rec.title = Some("Site Manager".to_string());
    rec.department = Some("Operations".to_string());
    rec.business_function = Some("Logistics".to_string());
    rec.direct_reports_count = 12;
    records.push(rec);

    records
}

fn demo_company_picker(engine: &OrgEngine) {
    println!("=== Demo 1: Company Picker ===");
    for option in engine.companies() {
        println!("  {} ({} positions)", option.label, option.count);
    }
    println!();
}

fn demo_filtered_view(engine: &mut OrgEngine) -> anyhow::Result<()> {
    println!("=== Demo 2: Filtered View & Summary ===");
    engine.select_company(CompanySelection::BusinessFunction("Group Holding".to_string()))?;

    let summary = engine.summary();
    println!(
        "  Group Holding: {} positions, {} managers, {} departments, {} vacant",
        summary.total_employees,
        summary.total_managers,
        summary.total_departments,
        summary.vacant_count
    );

    engine.set_search("finance");
    println!("  search 'finance' -> {} hit(s)", engine.filtered_view().len());
    engine.set_search("");
    println!();
    Ok(())
}

fn demo_navigation(engine: &mut OrgEngine) {
    println!("=== Demo 3: Jump to Employee ===");
    let expansion = engine.expand_path_to(&"E201".into());
    let path: Vec<&str> = expansion.ancestors.iter().map(|id| id.as_str()).collect();
    println!("  ancestors of E201 (nearest first): {}", path.join(" -> "));
    println!("  expanded nodes: {}", engine.expansion().len());
}

//! Engine facade wiring the snapshot store, views, expansion state, and
//! selection persistence together
//!
//! Implements REQ-ENGINE-001: every change to the company selection, the
//! filter criteria, or the search text synchronously re-runs
//! partition -> criteria -> search and recomputes the initial roots for the
//! resulting view. Recomputation is linear over one company's records, so
//! re-running it on every keystroke is fine; debouncing is a rendering
//! concern, not ours.

use crate::directory::{EmployeeId, PositionRecord, RecordStore};
use crate::persistence::{SelectionError, SelectionStore};
use crate::remote::{DirectoryProvider, FetchError};
use crate::tree::{ExpansionController, PathExpansion};
use crate::view::{
    compute_summary, list_companies, partition_by_company, CompanyOption, CompanySelection,
    FilterCriteria, Summary,
};
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::{debug, info};

/// Engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("selection persistence error: {0}")]
    Selection(#[from] SelectionError),

    #[error("snapshot fetch error: {0}")]
    Fetch(#[from] FetchError),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Org-chart engine: owns the snapshot, the active selection and filters,
/// the expansion state, and the injected selection store.
///
/// All outputs (`companies`, `filtered_view`, `summary`, `expansion`) are
/// projections over the current snapshot; the rendering layer consumes them
/// and owns everything visual.
pub struct OrgEngine {
    store: RecordStore,
    selection: Option<CompanySelection>,
    criteria: FilterCriteria,
    expansion: ExpansionController,
    selection_store: Box<dyn SelectionStore>,
    /// Current partition -> criteria -> search projection.
    filtered: Vec<PositionRecord>,
}

impl OrgEngine {
    /// Create an engine, restoring the previously selected company from the
    /// injected store so a returning user resumes where they left off.
    pub fn new(selection_store: Box<dyn SelectionStore>) -> EngineResult<Self> {
        let selection = selection_store
            .load()?
            .map(|value| CompanySelection::from_value(&value));

        if let Some(selection) = &selection {
            info!(company = selection.as_value(), "restored company selection");
        }

        Ok(OrgEngine {
            store: RecordStore::new(),
            selection,
            criteria: FilterCriteria::new(),
            expansion: ExpansionController::new(),
            selection_store,
            filtered: Vec::new(),
        })
    }

    /// Pull a fresh snapshot through the fetch boundary and replace the
    /// store wholesale. Returns the snapshot size.
    pub async fn load_snapshot(
        &mut self,
        provider: &dyn DirectoryProvider,
    ) -> EngineResult<usize> {
        let records = provider.fetch_snapshot().await?;
        Ok(self.set_snapshot(records))
    }

    /// Replace the snapshot with an already-fetched record set.
    pub fn set_snapshot(&mut self, records: Vec<PositionRecord>) -> usize {
        self.store.replace_snapshot(records);
        self.refresh_view();
        self.store.len()
    }

    /// Company picker options over the full snapshot.
    pub fn companies(&self) -> Vec<CompanyOption> {
        list_companies(self.store.records())
    }

    /// Select a company. The choice is written through to the selection
    /// store before any in-memory state changes; on a persistence failure
    /// the engine keeps its previous selection.
    pub fn select_company(&mut self, selection: CompanySelection) -> EngineResult<()> {
        self.selection_store.save(selection.as_value())?;
        info!(company = selection.as_value(), "company selected");

        self.selection = Some(selection);
        self.refresh_view();
        Ok(())
    }

    pub fn selected_company(&self) -> Option<&CompanySelection> {
        self.selection.as_ref()
    }

    /// Replace the free-text search and recompute the view.
    pub fn set_search(&mut self, search_text: impl Into<String>) {
        self.criteria.search = search_text.into();
        self.refresh_view();
    }

    /// Replace the whole filter criteria and recompute the view.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refresh_view();
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The current partition -> criteria -> search projection, in snapshot
    /// order. Empty while no company is selected.
    pub fn filtered_view(&self) -> &[PositionRecord] {
        &self.filtered
    }

    /// Counters over the current filtered view.
    pub fn summary(&self) -> Summary {
        compute_summary(&self.filtered)
    }

    /// Ids currently expanded for rendering.
    pub fn expansion(&self) -> &FxHashSet<EmployeeId> {
        self.expansion.expanded()
    }

    /// User toggled one node open or closed.
    pub fn toggle_node(&mut self, id: EmployeeId) {
        self.expansion.toggle(id);
    }

    /// Jump-to-employee navigation: expand every ancestor of the target in
    /// the current view so the target becomes visible.
    pub fn expand_path_to(&mut self, target: &EmployeeId) -> PathExpansion {
        self.expansion.expand_path_to(target, &self.filtered)
    }

    /// The "back to company picker" action: clears the stored company, the
    /// selection, the filter criteria, and the expansion set together.
    ///
    /// The durable key is removed first; if that fails, no in-memory state
    /// is touched, so the caller never observes a filtered-but-no-company
    /// state.
    pub fn reset(&mut self) -> EngineResult<()> {
        self.selection_store.clear()?;

        self.selection = None;
        self.criteria.reset();
        self.expansion.clear();
        self.filtered.clear();

        info!("selection, filters, and expansion reset");
        Ok(())
    }

    /// Re-run partition -> criteria -> search and replace the expansion set
    /// with the initial roots of the new view.
    fn refresh_view(&mut self) {
        let partitioned = partition_by_company(self.store.records(), self.selection.as_ref());
        self.filtered = self.criteria.apply(&partitioned);

        let roots = self.expansion.reset_to_roots(&self.filtered);
        debug!(
            partitioned = partitioned.len(),
            filtered = self.filtered.len(),
            roots = roots.len(),
            "view refreshed"
        );
    }
}

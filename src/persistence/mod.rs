//! Persistence layer for UI state that survives a full reload
//!
//! Implements REQ-PERSIST-001: the selected company lives behind a narrow
//! injected key-value contract so the engine itself stays pure and
//! testable. Nothing else is persisted; the expansion set is recomputed
//! from initial roots each session.

pub mod selection;

pub use selection::{FileSelectionStore, MemorySelectionStore};

use thiserror::Error;

/// Storage errors
#[derive(Error, Debug)]
pub enum SelectionError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SelectionResult<T> = Result<T, SelectionError>;

/// Narrow durable key-value contract for the selected company.
///
/// Every successful company selection is written back immediately
/// (write-through); `clear` is always invoked together with the expansion
/// and filter resets as one user-facing action.
pub trait SelectionStore: Send + Sync {
    /// The previously selected company, if any.
    fn load(&self) -> SelectionResult<Option<String>>;

    /// Persist the current selection.
    fn save(&self, value: &str) -> SelectionResult<()>;

    /// Remove the stored selection.
    fn clear(&self) -> SelectionResult<()>;
}

//! Durable storage implementations for the selected company
//!
//! Implements REQ-PERSIST-001 using a single JSON document on disk, written
//! atomically via a temp file plus rename.

use super::{SelectionError, SelectionResult, SelectionStore};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;

/// On-disk layout of the persisted UI state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredSelection {
    selected_company: Option<String>,
}

/// JSON-file-backed selection store.
///
/// The durable state is one small key-value document, so a plain file is
/// the whole storage layer. Writes go through a sibling temp file and a
/// rename so a crash mid-write never leaves a torn document behind.
pub struct FileSelectionStore {
    path: PathBuf,
}

impl FileSelectionStore {
    /// Open a store at the given path. The file is created lazily on the
    /// first save.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        info!(path = %path.display(), "opening selection store");
        FileSelectionStore { path }
    }

    fn read(&self) -> SelectionResult<StoredSelection> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Ok(StoredSelection::default())
            }
            Err(err) => Err(SelectionError::Io(err)),
        }
    }

    fn write(&self, stored: &StoredSelection) -> SelectionResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(stored)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SelectionStore for FileSelectionStore {
    fn load(&self) -> SelectionResult<Option<String>> {
        Ok(self.read()?.selected_company)
    }

    fn save(&self, value: &str) -> SelectionResult<()> {
        self.write(&StoredSelection {
            selected_company: Some(value.to_string()),
        })
    }

    fn clear(&self) -> SelectionResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SelectionError::Io(err)),
        }
    }
}

/// In-memory selection store for tests and short-lived embeddings.
#[derive(Debug, Default)]
pub struct MemorySelectionStore {
    value: Mutex<Option<String>>,
}

impl MemorySelectionStore {
    pub fn new() -> Self {
        MemorySelectionStore::default()
    }
}

impl MemorySelectionStore {
    fn guard(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // A poisoned lock only means a panicking writer; the stored value
        // is still a plain Option.
        self.value
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl SelectionStore for MemorySelectionStore {
    fn load(&self) -> SelectionResult<Option<String>> {
        Ok(self.guard().clone())
    }

    fn save(&self, value: &str) -> SelectionResult<()> {
        *self.guard() = Some(value.to_string());
        Ok(())
    }

    fn clear(&self) -> SelectionResult<()> {
        *self.guard() = None;
        Ok(())
    }
}

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, error, warn};
use uuid::Uuid;

use super::backend::KeyValueStore;
use crate::models::{SavedSearch, SearchRequest, SearchResult};

/// Slot holding the serialized history list
pub const HISTORY_KEY: &str = "state_chem_prospector_history";

/// Maximum number of saved searches kept
pub const HISTORY_CAPACITY: usize = 20;

/// Bounded, newest-first search history over a key-value backend
///
/// Every mutation re-reads the slot, applies the change and writes the whole list
/// back (last writer wins). Storage failures are logged and never returned: the
/// list handed back is always the correct in-memory result.
pub struct HistoryStore<S: KeyValueStore> {
    backend: S,
    capacity: usize,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_capacity(backend, HISTORY_CAPACITY)
    }

    pub fn with_capacity(backend: S, capacity: usize) -> Self {
        Self { backend, capacity }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read persisted history
    ///
    /// A read failure or a slot that is not a JSON list yields an empty list;
    /// individual entries that fail validation are skipped.
    pub fn load(&self) -> Vec<SavedSearch> {
        let raw = match self.backend.read(HISTORY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                error!(error = %format!("{:#}", e), "Failed to load history");
                return Vec::new();
            }
        };

        let entries = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                error!(error = %e, "Failed to parse history, starting empty");
                return Vec::new();
            }
        };

        entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<SavedSearch>(entry) {
                Ok(saved) => Some(saved),
                Err(e) => {
                    warn!(index, error = %e, "Skipping invalid history entry");
                    None
                }
            })
            .collect()
    }

    /// Save a completed search at the front of the history
    ///
    /// Only searches that found prospects are saved; an empty result leaves the
    /// history untouched.
    pub fn record(&self, request: &SearchRequest, result: &SearchResult) -> Vec<SavedSearch> {
        if result.is_empty() {
            debug!(location = request.location(), "Not recording search without prospects");
            return self.load();
        }

        let saved = SavedSearch::new(
            Uuid::new_v4().to_string(),
            Utc::now(),
            request.clone(),
            result.clone(),
        );
        debug!(id = %saved.id, location = request.location(), "Recording search");

        let mut history = self.load();
        history.insert(0, saved);
        history.truncate(self.capacity);

        self.persist(&history);
        history
    }

    /// Delete one saved search; an unknown id leaves the list unchanged
    pub fn remove(&self, id: &str) -> Vec<SavedSearch> {
        let mut history = self.load();
        history.retain(|s| s.id != id);
        self.persist(&history);
        history
    }

    pub fn find(&self, id: &str) -> Option<SavedSearch> {
        self.load().into_iter().find(|s| s.id == id)
    }

    /// Drop all persisted history
    pub fn clear(&self) {
        if let Err(e) = self.backend.remove(HISTORY_KEY) {
            warn!(error = %format!("{:#}", e), "Failed to clear history");
        }
    }

    fn persist(&self, history: &[SavedSearch]) {
        let json = match serde_json::to_string(history) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Failed to serialize history");
                return;
            }
        };

        if let Err(e) = self.backend.write(HISTORY_KEY, &json) {
            warn!(error = %format!("{:#}", e), "Failed to save history");
        }
    }
}

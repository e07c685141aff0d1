//! Local search history
//!
//! Completed searches are kept newest-first in a single named slot of a
//! [`KeyValueStore`]. The default backend is a directory of JSON files in the
//! platform data directory:
//! - macOS: `~/Library/Application Support/prospect-finder/`
//! - Linux: `~/.local/share/prospect-finder/`
//! - Windows: `%APPDATA%\prospect-finder\`
//!
//! Persistence is best-effort: failures are logged and never interrupt a search.

pub mod backend;
pub mod store;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use store::{HISTORY_CAPACITY, HISTORY_KEY, HistoryStore};

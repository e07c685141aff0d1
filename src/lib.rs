//! Prospect Finder - grounded B2B prospect search for a sales territory
//!
//! A search turns a territory and an optional market segment into one call to a
//! generative model with maps and web-search grounding, then recovers a clean
//! prospect list from the model's free-form answer:
//!
//! - Building the grounded invocation ([`query`])
//! - Isolating and parsing the structured payload ([`parsers`])
//! - Normalizing records and scrubbing placeholder contact data
//! - Classifying failures by pipeline stage ([`pipeline`])
//! - Keeping a bounded local history of past searches ([`history`])
//!
//! # Example
//!
//! ```no_run
//! use prospect_finder::{GeminiClient, SearchRequest, search_prospects};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let client = GeminiClient::new(
//!     prospect_finder::retrieval::DEFAULT_API_BASE,
//!     prospect_finder::retrieval::DEFAULT_MODEL,
//!     "api-key",
//! )?;
//! let request = SearchRequest::new("Baltimore, MD", Some("Healthcare and Medical"), None, None)?;
//! let result = search_prospects(&client, &request).await?;
//! println!("Found {} prospects", result.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod export;
pub mod filters;
pub mod geo;
pub mod history;
pub mod models;
pub mod parsers;
pub mod pipeline;
pub mod query;
pub mod retrieval;
pub mod utils;

// Re-export commonly used types
pub use history::{FileStore, HistoryStore};
pub use models::{Prospect, SavedSearch, SearchRequest, SearchResult};
pub use pipeline::{SearchError, Stage, search_prospects};
pub use retrieval::{GeminiClient, RetrievalCapability};

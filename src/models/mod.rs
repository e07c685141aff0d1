//! Data models for prospect searches.
//!
//! - [`SearchRequest`] - A validated territory/segment query
//! - [`Prospect`] - One normalized business contact
//! - [`SearchResult`] - Prospects plus the [`GroundingSource`] citations behind them
//! - [`SavedSearch`] - A persisted search in the local history
//! - [`MarketSegment`] - The fixed segment catalog
//!
//! Serialized field names follow the history file format (camelCase, `sourceUrls`,
//! `latLng`) so existing history stays readable.

pub mod history;
pub mod prospect;
pub mod request;
pub mod segment;

pub use history::SavedSearch;
pub use prospect::{GroundingSource, Prospect, SearchResult, SourceKind};
pub use request::{CURRENT_LOCATION, Coordinates, RequestError, SearchRequest};
pub use segment::{MARKET_SEGMENTS, MarketSegment, find_segment, is_residential};

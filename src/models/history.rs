use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{SearchRequest, SearchResult};

/// One persisted search: the originating request plus its frozen result set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSearch {
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_search_id")]
    pub id: String,
    #[serde(
        serialize_with = "crate::parsers::deserializers::serialize_timestamp_millis",
        deserialize_with = "crate::parsers::deserializers::deserialize_timestamp"
    )]
    pub timestamp: DateTime<Utc>,
    pub params: SearchRequest,
    pub result_count: usize,
    pub results: SearchResult,
}

impl SavedSearch {
    pub fn new(id: String, timestamp: DateTime<Utc>, params: SearchRequest, results: SearchResult) -> Self {
        Self { id, timestamp, params, result_count: results.len(), results }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Prospect;

    #[test]
    fn test_result_count_frozen_at_creation() {
        let request = SearchRequest::new("Baltimore, MD", None, None, None).unwrap();
        let results = SearchResult {
            prospects: vec![Prospect::default(), Prospect::default()],
            sources: Vec::new(),
        };
        let saved = SavedSearch::new("abc".to_string(), Utc::now(), request, results);
        assert_eq!(saved.result_count, 2);
    }

    #[test]
    fn test_saved_search_timestamp_is_millis() {
        let request = SearchRequest::new("21201", None, None, None).unwrap();
        let ts = DateTime::from_timestamp_millis(1762076480016).unwrap();
        let saved = SavedSearch::new("abc".to_string(), ts, request, SearchResult::default());

        let json = serde_json::to_value(&saved).unwrap();
        assert_eq!(json["timestamp"], 1762076480016_i64);
        assert_eq!(json["resultCount"], 0);

        let back: SavedSearch = serde_json::from_value(json).unwrap();
        assert_eq!(back.timestamp, ts);
    }
}

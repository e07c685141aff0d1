//! Search failure taxonomy.
//!
//! Display text is the user-facing message. No variant is retried by the pipeline;
//! a retry is the user repeating the whole search.

use thiserror::Error;

use super::classifier::classify;
use super::stages::Stage;
use crate::retrieval::TransportError;

const NO_PROSPECTS: &str =
    "No verified prospects found. Try broadening the search, or search a specific city name like 'Baltimore, MD'.";

#[derive(Debug, Error)]
pub enum SearchError {
    /// Sourcing returned nothing usable.
    #[error("{}", NO_PROSPECTS)]
    NoCandidates,

    /// Citations exist but no structured payload could be isolated.
    #[error(
        "Found {citations} location(s) but the AI synthesis step could not build a prospect list from them. Please try again."
    )]
    FoundButUnsynthesized { citations: usize },

    /// Delimiters were found but the payload did not parse.
    #[error("The AI returned prospect data that could not be read. Please try again.")]
    MalformedPayload {
        #[source]
        source: serde_json::Error,
    },

    /// The payload parsed but held no records.
    #[error("{}", NO_PROSPECTS)]
    EmptyResult,

    /// The retrieval capability itself failed.
    #[error("The prospecting service failed during {stage}: {source}")]
    Transport {
        stage: Stage,
        #[source]
        source: TransportError,
    },
}

impl SearchError {
    /// Wrap a capability failure, attributing it by message
    pub fn transport(source: TransportError) -> Self {
        let stage = classify(&source);
        SearchError::Transport { stage, source }
    }

    /// Stage to flag on the diagnostic board
    pub fn implicated_stage(&self) -> Stage {
        match self {
            SearchError::NoCandidates | SearchError::EmptyResult => Stage::Geospatial,
            SearchError::FoundButUnsynthesized { .. } | SearchError::MalformedPayload { .. } => {
                Stage::Synthesis
            }
            SearchError::Transport { stage, .. } => *stage,
        }
    }

    /// NoCandidates and EmptyResult are presented the same way
    pub fn is_no_results(&self) -> bool {
        matches!(self, SearchError::NoCandidates | SearchError::EmptyResult)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_displays_like_no_candidates() {
        assert_eq!(SearchError::EmptyResult.to_string(), SearchError::NoCandidates.to_string());
        assert!(SearchError::EmptyResult.is_no_results());
    }

    #[test]
    fn test_unsynthesized_reports_count() {
        let err = SearchError::FoundButUnsynthesized { citations: 2 };
        assert!(err.to_string().contains("Found 2 location(s)"));
        assert_eq!(err.implicated_stage(), Stage::Synthesis);
    }

    #[test]
    fn test_transport_is_classified() {
        let err = SearchError::transport(TransportError::Api {
            status: 400,
            code: "FAILED_PRECONDITION".to_string(),
            message: "Google Maps grounding is not enabled".to_string(),
        });
        assert_eq!(err.implicated_stage(), Stage::Geospatial);
        assert!(err.to_string().contains("Maps lookup"));
    }

    #[test]
    fn test_sourcing_failures_implicate_geospatial() {
        assert_eq!(SearchError::NoCandidates.implicated_stage(), Stage::Geospatial);
    }
}

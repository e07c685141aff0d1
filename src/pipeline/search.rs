//! End-to-end prospect search: build → retrieve → extract → normalize.
//!
//! The pipeline is stateless. History recording is the caller's decision, made only
//! after a successful search.

use tracing::{debug, info, warn};

use super::errors::SearchError;
use crate::models::{SearchRequest, SearchResult};
use crate::parsers::{extract, normalize, parse_payload};
use crate::query::build;
use crate::retrieval::{RawCitation, RetrievalCapability};

/// Run one search against the retrieval capability
///
/// Exactly one call is made to `capability`; failures are never retried here.
///
/// # Errors
///
/// Returns a [`SearchError`] describing which part of the pipeline failed. Use
/// [`SearchError::implicated_stage`] to drive diagnostics.
pub async fn search_prospects(
    capability: &dyn RetrievalCapability,
    request: &SearchRequest,
) -> Result<SearchResult, SearchError> {
    let invocation = build(request);
    debug!(location = request.location(), prompt = %invocation.prompt, "Built model invocation");

    let response = capability.retrieve(&invocation).await.map_err(|e| {
        let err = SearchError::transport(e);
        warn!(stage = %err.implicated_stage(), error = %err, "Retrieval call failed");
        err
    })?;

    let result = interpret(&response.text, &response.citations);
    match &result {
        Ok(found) => info!(
            location = request.location(),
            prospects = found.prospects.len(),
            sources = found.sources.len(),
            "Search completed"
        ),
        Err(e) => warn!(
            location = request.location(),
            stage = %e.implicated_stage(),
            error = %e,
            "Search produced no usable prospects"
        ),
    }
    result
}

/// Turn raw model output into a result set
pub fn interpret(text: &str, citations: &[RawCitation]) -> Result<SearchResult, SearchError> {
    let extraction = extract(text, citations)?;
    let value = parse_payload(extraction.payload)?;
    let prospects = normalize(&value)?;
    Ok(SearchResult { prospects, sources: extraction.sources })
}

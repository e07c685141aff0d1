//! Boundary to the external generative retrieval service.
//!
//! The service is opaque: a [`ModelInvocation`] goes in, free-form text plus zero or
//! more grounding citations come out. [`RetrievalCapability`] is the seam tests
//! replace with deterministic stubs; [`GeminiClient`] is the production implementation.

pub mod errors;
pub mod gemini;
pub mod wire;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use errors::TransportError;
pub use gemini::{DEFAULT_API_BASE, DEFAULT_MODEL, GeminiClient};

use crate::query::ModelInvocation;

/// Reference to a cited map place or web page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationTarget {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}

/// One citation as returned by the service, before classification
///
/// A citation has a map-place identity (`maps`), a web-page identity (`web`), or,
/// for unexpected payloads, neither.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCitation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maps: Option<CitationTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<CitationTarget>,
}

impl RawCitation {
    pub fn maps(title: Option<&str>, uri: &str) -> Self {
        Self { maps: Some(target(title, uri)), web: None }
    }

    pub fn web(title: Option<&str>, uri: &str) -> Self {
        Self { maps: None, web: Some(target(title, uri)) }
    }
}

fn target(title: Option<&str>, uri: &str) -> CitationTarget {
    CitationTarget { uri: Some(uri.to_string()), title: title.map(str::to_string), place_id: None }
}

/// Unprocessed model output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    pub text: String,
    pub citations: Vec<RawCitation>,
}

/// A generative service that answers a prompt using maps and web-search grounding
#[async_trait]
pub trait RetrievalCapability: Send + Sync {
    /// Run one grounded generation. This is the only suspension point of a search.
    async fn retrieve(&self, invocation: &ModelInvocation) -> Result<RawResponse, TransportError>;
}

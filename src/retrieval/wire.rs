//! Gemini `generateContent` request/response shapes.
//!
//! Only the fields this client sends or reads are modelled; everything else in the
//! response is ignored by serde.

use serde::{Deserialize, Serialize};

use super::RawCitation;
use crate::models::Coordinates;
use crate::query::ModelInvocation;

// ─── Request ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
    pub tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_config: Option<ToolConfig>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// One grounding tool; exactly one field is set
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_maps: Option<EmptyObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search: Option<EmptyObject>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EmptyObject {}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    pub retrieval_config: RetrievalConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievalConfig {
    pub lat_lng: Coordinates,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
}

impl GenerateContentRequest {
    pub fn from_invocation(invocation: &ModelInvocation) -> Self {
        let tools = &invocation.tools;
        let mut wire_tools = Vec::new();
        if tools.geospatial {
            wire_tools.push(Tool { google_maps: Some(EmptyObject {}), ..Tool::default() });
        }
        if tools.web_search {
            wire_tools.push(Tool { google_search: Some(EmptyObject {}), ..Tool::default() });
        }

        Self {
            system_instruction: Content::text(None, &invocation.instruction),
            contents: vec![Content::text(Some("user"), &invocation.prompt)],
            tools: wire_tools,
            tool_config: tools
                .location_bias
                .map(|lat_lng| ToolConfig { retrieval_config: RetrievalConfig { lat_lng } }),
            generation_config: GenerationConfig { temperature: tools.temperature },
        }
    }
}

impl Content {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self { role: role.map(str::to_string), parts: vec![Part { text: Some(text.to_string()) }] }
    }
}

// ─── Response ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<RawCitation>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate (empty when there is none)
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content.parts.iter().filter_map(|p| p.text.as_deref()).collect::<String>()
            })
            .unwrap_or_default()
    }

    /// Grounding chunks of the first candidate, in service order
    pub fn into_citations(self) -> Vec<RawCitation> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.grounding_metadata)
            .map(|m| m.grounding_chunks)
            .unwrap_or_default()
    }
}

/// `{"error": {...}}` body returned on failures
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

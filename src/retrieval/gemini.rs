//! Gemini `generateContent` client with Google Maps and Google Search grounding.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;

use super::wire::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use super::{RawResponse, RetrievalCapability, TransportError};
use crate::query::ModelInvocation;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// TCP connection timeout. The generation itself is not time-limited.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    http: HttpClient,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(base_url: &str, model: &str, api_key: &str) -> Result<Self, TransportError> {
        let http = HttpClient::builder().connect_timeout(CONNECT_TIMEOUT).build().map_err(|e| {
            TransportError::Config { reason: format!("failed to build HTTP client: {e}") }
        })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl RetrievalCapability for GeminiClient {
    async fn retrieve(&self, invocation: &ModelInvocation) -> Result<RawResponse, TransportError> {
        let url = self.endpoint();
        let body = GenerateContentRequest::from_invocation(invocation);

        debug!(model = %self.model, "sending generateContent request");

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::ConnectionFailed {
                endpoint: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        let body_text = response.text().await.map_err(|e| TransportError::Decode {
            reason: format!("failed to read response body: {e}"),
        })?;

        if !status.is_success() {
            return Err(error_from_body(status.as_u16(), body_text));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body_text)
            .map_err(|e| TransportError::Decode { reason: e.to_string() })?;

        let text = parsed.text();
        let citations = parsed.into_citations();
        debug!(chars = text.len(), citations = citations.len(), "received model response");

        Ok(RawResponse { text, citations })
    }
}

/// Prefer the API's own error message; fall back to the raw body
fn error_from_body(status: u16, body: String) -> TransportError {
    match serde_json::from_str::<ApiErrorEnvelope>(&body) {
        Ok(envelope) if !envelope.error.message.is_empty() => TransportError::Api {
            status,
            code: envelope.error.status,
            message: envelope.error.message,
        },
        _ => TransportError::Http { status, body },
    }
}

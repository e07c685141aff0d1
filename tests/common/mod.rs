//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use prospect_finder::query::ModelInvocation;
use prospect_finder::retrieval::{RawCitation, RawResponse, RetrievalCapability, TransportError};
use serde_json::{Value, json};

/// Deterministic retrieval capability that answers every call the same way
pub struct StubCapability {
    outcome: Result<RawResponse, String>,
    calls: AtomicUsize,
    last_invocation: Mutex<Option<ModelInvocation>>,
}

impl StubCapability {
    pub fn responding(text: &str, citations: Vec<RawCitation>) -> Self {
        Self::with_outcome(Ok(RawResponse { text: text.to_string(), citations }))
    }

    /// Fail every call with an API error carrying `message`
    pub fn failing(message: &str) -> Self {
        Self::with_outcome(Err(message.to_string()))
    }

    fn with_outcome(outcome: Result<RawResponse, String>) -> Self {
        Self { outcome, calls: AtomicUsize::new(0), last_invocation: Mutex::new(None) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_invocation(&self) -> Option<ModelInvocation> {
        self.last_invocation.lock().unwrap().clone()
    }
}

#[async_trait]
impl RetrievalCapability for StubCapability {
    async fn retrieve(&self, invocation: &ModelInvocation) -> Result<RawResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_invocation.lock().unwrap() = Some(invocation.clone());

        match &self.outcome {
            Ok(response) => Ok(response.clone()),
            Err(message) => Err(TransportError::Api {
                status: 400,
                code: "INVALID_ARGUMENT".to_string(),
                message: message.clone(),
            }),
        }
    }
}

/// Builder for prospect records as the model would emit them
pub struct RecordBuilder {
    record: Value,
}

impl RecordBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            record: json!({
                "name": name,
                "phone": "410-555-0100",
                "email": "",
                "address": "1 Main St",
                "city": "Baltimore",
                "state": "MD",
                "zip": "21201",
                "notes": "Industrial facility"
            }),
        }
    }

    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.record[key] = value;
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        if let Some(map) = self.record.as_object_mut() {
            map.remove(key);
        }
        self
    }

    pub fn build(self) -> Value {
        self.record
    }
}

/// Serialize records as a JSON array
pub fn records_json(records: Vec<Value>) -> String {
    Value::Array(records).to_string()
}

/// Wrap a payload in prose and a Markdown fence, the way models tend to answer
pub fn fenced(payload: &str) -> String {
    format!("Here are the prospects I found:\n```json\n{}\n```\nLet me know if you need more.", payload)
}

pub fn maps_citation(title: &str, uri: &str) -> RawCitation {
    RawCitation::maps(Some(title), uri)
}

pub fn web_citation(title: &str, uri: &str) -> RawCitation {
    RawCitation::web(Some(title), uri)
}

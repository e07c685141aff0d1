use serde::{Deserialize, Serialize};

/// One business contact synthesized from grounded search results
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Prospect {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Street address only; city, state and zip live in their own fields
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Maps,
    Web,
}

/// Provenance citation attached to a result set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
    #[serde(default = "default_source_kind")]
    pub kind: SourceKind,
}

fn default_source_kind() -> SourceKind {
    SourceKind::Web
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub prospects: Vec<Prospect>,
    #[serde(default, rename = "sourceUrls")]
    pub sources: Vec<GroundingSource>,
}

impl SearchResult {
    pub fn len(&self) -> usize {
        self.prospects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prospects.is_empty()
    }
}

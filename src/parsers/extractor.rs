use serde_json::Value;
use tracing::debug;

use crate::models::{GroundingSource, SourceKind};
use crate::pipeline::SearchError;
use crate::retrieval::RawCitation;

const MAPS_SOURCE_TITLE: &str = "Google Maps Location";
const WEB_SOURCE_TITLE: &str = "Web Source";

/// The structured payload isolated from a model response, plus its citations
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction<'a> {
    /// Text from the first `[` to the last `]`, inclusive
    pub payload: &'a str,
    pub sources: Vec<GroundingSource>,
}

/// Isolate the record list embedded in free-form model text
///
/// Surrounding prose and Markdown fences are ignored. A response without a
/// `[`...`]` pair is a hard failure whose variant depends on whether the service
/// cited anything: citations mean sourcing worked and synthesis did not.
pub fn extract<'a>(raw_text: &'a str, citations: &[RawCitation]) -> Result<Extraction<'a>, SearchError> {
    let Some(payload) = bracketed_slice(raw_text) else {
        return Err(if citations.is_empty() {
            SearchError::NoCandidates
        } else {
            SearchError::FoundButUnsynthesized { citations: citations.len() }
        });
    };

    Ok(Extraction { payload, sources: map_citations(citations) })
}

/// Parse an extracted payload as JSON
pub fn parse_payload(payload: &str) -> Result<Value, SearchError> {
    serde_json::from_str(payload).map_err(|source| SearchError::MalformedPayload { source })
}

fn bracketed_slice(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    // A closing bracket before the first opening one encloses nothing
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Classify citations by identity, in order, without deduplication
pub fn map_citations(citations: &[RawCitation]) -> Vec<GroundingSource> {
    citations
        .iter()
        .filter_map(|citation| {
            let (target, kind, fallback_title) = match (&citation.maps, &citation.web) {
                (Some(maps), _) => (maps, SourceKind::Maps, MAPS_SOURCE_TITLE),
                (None, Some(web)) => (web, SourceKind::Web, WEB_SOURCE_TITLE),
                (None, None) => {
                    debug!("Skipping citation with neither a map nor a web identity");
                    return None;
                }
            };

            let Some(uri) = target.uri.as_deref().filter(|u| !u.trim().is_empty()) else {
                debug!(?kind, "Skipping citation without a URI");
                return None;
            };

            let title = target
                .title
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .unwrap_or(fallback_title);

            Some(GroundingSource { title: title.to_string(), uri: uri.to_string(), kind })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retrieval::CitationTarget;

    #[test]
    fn test_extract_fenced_payload() {
        let text = "```json\n[{\"name\":\"Acme Co\"}]\n```";
        let extraction = extract(text, &[]).unwrap();
        assert_eq!(extraction.payload, "[{\"name\":\"Acme Co\"}]");
    }

    #[test]
    fn test_extract_spans_first_to_last_bracket() {
        let text = "Here you go: [{\"notes\":\"[see site]\"}] Hope this helps [1]";
        let extraction = extract(text, &[]).unwrap();
        assert_eq!(extraction.payload, "[{\"notes\":\"[see site]\"}] Hope this helps [1]");
        assert!(parse_payload(extraction.payload).is_err());
    }

    #[test]
    fn test_no_brackets_without_citations() {
        let err = extract("I could not find any businesses.", &[]).unwrap_err();
        assert!(matches!(err, SearchError::NoCandidates));
    }

    #[test]
    fn test_no_brackets_with_citations() {
        let citations = vec![
            RawCitation::maps(Some("Acme"), "https://maps.google.com/?cid=1"),
            RawCitation::web(None, "https://acme.example"),
        ];
        let err = extract("Sorry, I can't format that.", &citations).unwrap_err();
        assert!(matches!(err, SearchError::FoundButUnsynthesized { citations: 2 }));
    }

    #[test]
    fn test_reversed_brackets_count_as_absent() {
        let err = extract("] nothing here [", &[]).unwrap_err();
        assert!(matches!(err, SearchError::NoCandidates));
    }

    #[test]
    fn test_empty_list_is_not_an_extraction_failure() {
        let extraction = extract("[]", &[]).unwrap();
        assert_eq!(extraction.payload, "[]");
    }

    #[test]
    fn test_parse_payload_malformed() {
        let err = parse_payload("[{\"name\": \"Acme\",]").unwrap_err();
        assert!(matches!(err, SearchError::MalformedPayload { .. }));
    }

    #[test]
    fn test_map_citations_defaults_and_order() {
        let citations = vec![
            RawCitation::web(Some("acme.example"), "https://acme.example"),
            RawCitation::maps(None, "https://maps.google.com/?cid=1"),
            RawCitation::maps(Some("   "), "https://maps.google.com/?cid=1"),
        ];
        let sources = map_citations(&citations);

        assert_eq!(sources.len(), 3);
        assert_eq!(sources[0].title, "acme.example");
        assert_eq!(sources[0].kind, SourceKind::Web);
        assert_eq!(sources[1].title, MAPS_SOURCE_TITLE);
        assert_eq!(sources[1].kind, SourceKind::Maps);
        // Duplicates are kept
        assert_eq!(sources[1].uri, sources[2].uri);
    }

    #[test]
    fn test_map_citations_skips_unidentified() {
        let citations = vec![
            RawCitation::default(),
            RawCitation {
                maps: None,
                web: Some(CitationTarget { uri: None, title: Some("x".to_string()), place_id: None }),
            },
        ];
        assert!(map_citations(&citations).is_empty());
    }
}

//! Best-guess attribution of a failure to a pipeline stage.
//!
//! This sniffs the error text for the capability names the service uses in its
//! messages. It is a heuristic: a typed, stage-tagged failure from the service
//! would be better, but the text match is the established behavior and is kept.

use super::stages::Stage;

const GEOSPATIAL_HINT: &str = "Maps";
const SEARCH_HINT: &str = "Search";

/// Classify an error message. Matching is case-sensitive; synthesis is the default.
pub fn classify_message(message: &str) -> Stage {
    if message.contains(GEOSPATIAL_HINT) {
        Stage::Geospatial
    } else if message.contains(SEARCH_HINT) {
        Stage::Search
    } else {
        Stage::Synthesis
    }
}

/// Classify any error by its display text
pub fn classify(error: &dyn std::error::Error) -> Stage {
    classify_message(&error.to_string())
}

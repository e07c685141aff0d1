//! Turns a [`SearchRequest`] into a grounded model invocation.
//!
//! The instruction carries the fixed data-purity policy; the prompt carries the
//! territory, the category phrase and any regional context. Both are pure
//! functions of the request.

use super::regions::regional_context;
use crate::models::{Coordinates, SearchRequest, is_residential};

/// Low randomness keeps record shapes stable across runs
pub const SYNTHESIS_TEMPERATURE: f32 = 0.1;

const BROAD_CATEGORY: &str = "high-potential commercial, industrial, and institutional facilities (e.g. healthcare, manufacturing, education, hospitality, government)";

const RESIDENTIAL_CATEGORY: &str = "multi-family housing: apartment and condominium communities, property management companies, and leasing offices (not private single-family homes)";

const INSTRUCTION: &str = "\
You are a sales prospecting assistant for State Industrial Products (Chemical Division). \
You find active B2B prospects that would benefit from these product lines: \
Air Care (odor control, scenting), Drain Care (maintenance, blockage prevention), \
Wastewater (treatment solutions), and Water Treatment (cooling towers, boilers, closed loops).

DATA PURITY RULES:
1. Output a single raw JSON array and nothing else. No commentary before or after it, no Markdown, no code fences.
2. Every element is an object with exactly these string properties: \"name\", \"phone\", \"email\", \"address\", \"city\", \"state\", \"zip\", \"notes\".
3. If a phone number, email, or zip code is not present in your sources, use an empty string \"\". Never write placeholders such as \"N/A\", \"Unknown\", \"None\", \"Pending\", \"Not found\", or \"Contact via web\".
4. \"address\" is the street address only; \"city\", \"state\" and \"zip\" are split out of the full address.
5. Answer from whatever map places and web citations you found. If you have any citations at all, produce the array from them; do not decline or explain that data is unavailable.";

/// Which grounding tools to enable and how to bias them
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSettings {
    pub geospatial: bool,
    pub web_search: bool,
    pub location_bias: Option<Coordinates>,
    pub temperature: f32,
}

/// Everything the retrieval capability needs for one call
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInvocation {
    pub instruction: String,
    pub prompt: String,
    pub tools: ToolSettings,
}

/// Category phrase for the prompt
///
/// The residential segment is reinterpreted as the commercial entities that run
/// residential properties.
pub fn category_phrase(request: &SearchRequest) -> String {
    match (request.segment(), request.sub_segment()) {
        (Some(segment), sub) if is_residential(segment) => match sub {
            Some(sub) => format!("{} (specifically {})", RESIDENTIAL_CATEGORY, sub),
            None => RESIDENTIAL_CATEGORY.to_string(),
        },
        (Some(segment), Some(sub)) => format!("{} ({})", sub, segment),
        (None, Some(sub)) => sub.to_string(),
        (Some(segment), None) => segment.to_string(),
        (None, None) => BROAD_CATEGORY.to_string(),
    }
}

/// Build the invocation for a request
pub fn build(request: &SearchRequest) -> ModelInvocation {
    let mut prompt = format!(
        "Find 15-20 currently active businesses in and around \"{}\".\nTarget category: {}.",
        request.location(),
        category_phrase(request)
    );

    if let Some(context) = regional_context(request) {
        prompt.push_str("\nRegional context: ");
        prompt.push_str(context);
    }

    if let Some(coords) = request.coordinates() {
        prompt.push_str(&format!(
            "\nThe search area is centered near latitude {:.5}, longitude {:.5}.",
            coords.latitude, coords.longitude
        ));
    }

    prompt.push_str(
        "\nFor \"notes\", state the market segment, the likely services needed \
         (Air Care, Drain Care, Wastewater, Water Treatment), and any notable details found.",
    );

    ModelInvocation {
        instruction: INSTRUCTION.to_string(),
        prompt,
        tools: ToolSettings {
            geospatial: true,
            web_search: true,
            location_bias: request.coordinates(),
            temperature: SYNTHESIS_TEMPERATURE,
        },
    }
}

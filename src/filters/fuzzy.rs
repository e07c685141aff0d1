//! Fuzzy ranking of saved searches with `nucleo`.

use nucleo::pattern::{CaseMatching, Normalization, Pattern};
use nucleo::{Config, Matcher, Utf32Str};

use crate::models::SavedSearch;

/// Text a saved search is matched against
fn haystack(entry: &SavedSearch) -> String {
    [Some(entry.params.location()), entry.params.segment(), entry.params.sub_segment()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keep entries matching `query`, best match first; ties keep history order
///
/// An empty query returns the entries unchanged.
pub fn fuzzy_rank(entries: Vec<SavedSearch>, query: &str) -> Vec<SavedSearch> {
    if query.trim().is_empty() {
        return entries;
    }

    let pattern = Pattern::parse(query, CaseMatching::Smart, Normalization::Smart);
    let mut matcher = Matcher::new(Config::DEFAULT);
    let mut buf = Vec::new();

    let mut scored: Vec<(u32, SavedSearch)> = entries
        .into_iter()
        .filter_map(|entry| {
            let text = haystack(&entry);
            let score = pattern.score(Utf32Str::new(&text, &mut buf), &mut matcher)?;
            Some((score, entry))
        })
        .collect();

    // Stable sort keeps newest-first order among equal scores
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, entry)| entry).collect()
}

use crate::models::SearchRequest;

/// Known context for three-digit ZIP prefixes
const ZIP_PREFIXES: &[(&str, &str)] = &[
    ("200", "Washington, DC: federal offices, universities and large hospital systems."),
    ("206", "Southern Maryland (Charles, Calvert and St. Mary's counties): naval facilities, county schools and growing suburban housing."),
    ("207", "Prince George's County, MD: federal facilities, distribution centers and garden-style apartment communities."),
    ("208", "Montgomery County, MD: biotech campuses, medical centers and high-rise residential."),
    ("210", "Central Maryland (Anne Arundel, Howard and Harford counties): BWI logistics, Fort Meade and Aberdeen Proving Ground contractors."),
    ("211", "Baltimore County, MD: industrial parks along I-95 and I-695, county schools and senior living."),
    ("212", "Baltimore City, MD: port and harbor industry, Johns Hopkins and University of Maryland medical institutions, rowhouse-era multi-family housing."),
    ("214", "Annapolis, MD: state government, the Naval Academy and marina hospitality."),
    ("217", "Frederick and Western Maryland: food processing, agriculture and Fort Detrick."),
    ("191", "Philadelphia, PA: university health systems, food distribution and dense multi-family housing."),
    ("197", "Delaware: chemical manufacturing, poultry processing and corporate offices."),
    ("220", "Northern Virginia: data centers, federal contractors and large apartment portfolios."),
];

/// Named location sentinels
const NAMED_REGIONS: &[(&str, &str)] = &[
    (
        crate::models::CURRENT_LOCATION,
        "The user is searching around their current GPS position; favor businesses nearest the supplied coordinates.",
    ),
    (
        "DMV",
        "The DC-Maryland-Virginia metro area: federal facilities, healthcare systems and large multi-family portfolios.",
    ),
];

/// Regional enrichment for recognized postal-code prefixes or named sentinels
pub fn regional_context(request: &SearchRequest) -> Option<&'static str> {
    let location = request.location();

    if let Some((_, context)) =
        NAMED_REGIONS.iter().find(|(name, _)| name.eq_ignore_ascii_case(location))
    {
        return Some(context);
    }

    let prefix = zip_prefix(location)?;
    ZIP_PREFIXES.iter().find(|(p, _)| *p == prefix).map(|(_, context)| *context)
}

/// First three digits of a location that is a bare US ZIP or ZIP+4
fn zip_prefix(location: &str) -> Option<&str> {
    let digits = location.split('-').next()?;
    if digits.len() == 5 && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(&digits[..3])
    } else {
        None
    }
}

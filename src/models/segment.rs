/// A market segment and the sub-segments a search can be narrowed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketSegment {
    pub id: &'static str,
    pub name: &'static str,
    pub sub_segments: &'static [&'static str],
}

pub const RESIDENTIAL_SEGMENT_ID: &str = "residential";

pub const MARKET_SEGMENTS: &[MarketSegment] = &[
    MarketSegment {
        id: RESIDENTIAL_SEGMENT_ID,
        name: "Residential/Housing",
        sub_segments: &["Apartments and Condos", "Assisted Living Facilities", "Housing Authority"],
    },
    MarketSegment {
        id: "education",
        name: "Education and Non-Profit",
        sub_segments: &[
            "Churches and Temples",
            "College and Universities",
            "Education K-12",
            "Goodwill",
            "Head Start",
            "Job Corps",
        ],
    },
    MarketSegment {
        id: "healthcare",
        name: "Healthcare and Medical",
        sub_segments: &[
            "Dialysis Centers",
            "Hospitals",
            "Medical Offices and Clinics",
            "Veteran Affairs Hospitals",
        ],
    },
    MarketSegment {
        id: "government",
        name: "Government and Public Services",
        sub_segments: &[
            "Coast Guard",
            "Corrections and Prisons",
            "First Responders",
            "Municipalities",
            "National Park Services",
            "Native American Reservations",
            "Office Buildings",
            "State and Local Parks",
            "U.S. Army Corps of Engineering",
            "U.S. Forest Service",
            "U.S. Department of Agriculture",
        ],
    },
    MarketSegment {
        id: "commercial",
        name: "Commercial and Hospitality",
        sub_segments: &[
            "Fitness Centers",
            "Funeral Homes",
            "Grocery Stores",
            "Hotels and Lodging Facilities",
            "Indoor Recreation Centers",
        ],
    },
    MarketSegment {
        id: "industrial",
        name: "Industrial and Manufacturing",
        sub_segments: &[
            "Equipment Rental Facilities",
            "Food Processing Plants",
            "Greenhouses/Cannabis",
            "Manufacturing",
        ],
    },
    MarketSegment { id: "specialized", name: "Specialized", sub_segments: &["Animal Services"] },
];

/// Look up a segment by id or display name (case-insensitive)
pub fn find_segment(name_or_id: &str) -> Option<&'static MarketSegment> {
    let needle = name_or_id.trim();
    MARKET_SEGMENTS
        .iter()
        .find(|s| s.id.eq_ignore_ascii_case(needle) || s.name.eq_ignore_ascii_case(needle))
}

/// True when the segment names the residential housing category
pub fn is_residential(name_or_id: &str) -> bool {
    find_segment(name_or_id).is_some_and(|s| s.id == RESIDENTIAL_SEGMENT_ID)
}

impl MarketSegment {
    pub fn has_sub_segment(&self, sub_segment: &str) -> bool {
        self.sub_segments.iter().any(|s| s.eq_ignore_ascii_case(sub_segment.trim()))
    }
}

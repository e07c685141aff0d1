use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Location sentinel meaning "search around the supplied coordinates"
pub const CURRENT_LOCATION: &str = "Current Location";

/// Rejected search input, raised before any external call is made
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("Please enter a city, state, or region.")]
    EmptyLocation,
    #[error("Invalid coordinates ({latitude}, {longitude}): latitude must be within ±90 and longitude within ±180")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CoordinatesRecord")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Unvalidated on-disk shape of [`Coordinates`]
#[derive(Deserialize)]
struct CoordinatesRecord {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<CoordinatesRecord> for Coordinates {
    type Error = RequestError;

    fn try_from(record: CoordinatesRecord) -> Result<Self, Self::Error> {
        Coordinates::new(record.latitude, record.longitude)
    }
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, RequestError> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        if !valid {
            return Err(RequestError::InvalidCoordinates { latitude, longitude });
        }
        Ok(Self { latitude, longitude })
    }
}

/// A single retrieval attempt. Fields are private and deserialization goes through
/// [`SearchRequest::new`], so a request always carries a trimmed, non-empty location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SearchRequestRecord")]
pub struct SearchRequest {
    location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    segment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sub_segment: Option<String>,
    #[serde(rename = "latLng", skip_serializing_if = "Option::is_none")]
    coordinates: Option<Coordinates>,
}

impl SearchRequest {
    /// Build a request, trimming the location and dropping blank segment values
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::EmptyLocation`] if the location is empty or whitespace-only.
    pub fn new(
        location: &str,
        segment: Option<&str>,
        sub_segment: Option<&str>,
        coordinates: Option<Coordinates>,
    ) -> Result<Self, RequestError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(RequestError::EmptyLocation);
        }

        Ok(Self {
            location: location.to_string(),
            segment: non_blank(segment),
            sub_segment: non_blank(sub_segment),
            coordinates,
        })
    }

    /// Attach (or clear) the location bias
    pub fn with_coordinates(mut self, coordinates: Option<Coordinates>) -> Self {
        self.coordinates = coordinates;
        self
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn segment(&self) -> Option<&str> {
        self.segment.as_deref()
    }

    pub fn sub_segment(&self) -> Option<&str> {
        self.sub_segment.as_deref()
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    /// True when the location is the coordinates sentinel
    pub fn uses_current_location(&self) -> bool {
        self.location.eq_ignore_ascii_case(CURRENT_LOCATION)
    }

    /// Short human label, e.g. `Baltimore, MD · Hospitals`
    pub fn label(&self) -> String {
        match (self.segment(), self.sub_segment()) {
            (_, Some(sub)) => format!("{} · {}", self.location, sub),
            (Some(segment), None) => format!("{} · {}", self.location, segment),
            (None, None) => format!("{} · Broad search", self.location),
        }
    }
}

/// Unvalidated on-disk shape of [`SearchRequest`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequestRecord {
    location: String,
    #[serde(default)]
    segment: Option<String>,
    #[serde(default)]
    sub_segment: Option<String>,
    #[serde(default, rename = "latLng")]
    coordinates: Option<Coordinates>,
}

impl TryFrom<SearchRequestRecord> for SearchRequest {
    type Error = RequestError;

    fn try_from(record: SearchRequestRecord) -> Result<Self, Self::Error> {
        SearchRequest::new(
            &record.location,
            record.segment.as_deref(),
            record.sub_segment.as_deref(),
            record.coordinates,
        )
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

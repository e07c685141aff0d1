//! Optional caller coordinates.
//!
//! Acquisition is independent of the search: it has its own bounded wait, and a
//! denial or timeout simply means the search runs without a location bias.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::models::Coordinates;

/// How long a search waits for a position before giving up on it
pub const DEFAULT_GEOLOCATION_WAIT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoError {
    #[error("geolocation permission denied")]
    Denied,
    #[error("geolocation unavailable: {0}")]
    Unavailable(String),
}

/// Source of a single best-effort position
#[async_trait]
pub trait Geolocator: Send + Sync {
    async fn locate(&self) -> Result<Coordinates, GeoError>;
}

/// Coordinates supplied up front (command line or environment)
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocator {
    coordinates: Option<Coordinates>,
}

impl FixedLocator {
    pub fn new(coordinates: Option<Coordinates>) -> Self {
        Self { coordinates }
    }
}

#[async_trait]
impl Geolocator for FixedLocator {
    async fn locate(&self) -> Result<Coordinates, GeoError> {
        self.coordinates.ok_or(GeoError::Denied)
    }
}

/// Ask for a position, waiting at most `wait`
pub async fn acquire_coordinates(locator: &dyn Geolocator, wait: Duration) -> Option<Coordinates> {
    match tokio::time::timeout(wait, locator.locate()).await {
        Ok(Ok(coordinates)) => Some(coordinates),
        Ok(Err(e)) => {
            debug!(error = %e, "Geolocation disabled");
            None
        }
        Err(_) => {
            debug!(wait_ms = wait.as_millis() as u64, "Geolocation timed out");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SlowLocator;

    #[async_trait]
    impl Geolocator for SlowLocator {
        async fn locate(&self) -> Result<Coordinates, GeoError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Err(GeoError::Unavailable("never".to_string()))
        }
    }

    #[tokio::test]
    async fn test_fixed_locator_returns_coordinates() {
        let coords = Coordinates::new(39.29, -76.61).unwrap();
        let locator = FixedLocator::new(Some(coords));
        assert_eq!(acquire_coordinates(&locator, DEFAULT_GEOLOCATION_WAIT).await, Some(coords));
    }

    #[tokio::test]
    async fn test_denied_yields_none() {
        let locator = FixedLocator::new(None);
        assert_eq!(acquire_coordinates(&locator, DEFAULT_GEOLOCATION_WAIT).await, None);
    }

    #[tokio::test]
    async fn test_timeout_yields_none() {
        let result = acquire_coordinates(&SlowLocator, Duration::from_millis(50)).await;
        assert_eq!(result, None);
    }
}

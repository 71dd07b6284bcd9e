//! Geographic coordinates in the backend's `"<lat>,<lng>"` string form.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A latitude/longitude pair.
///
/// Serialized everywhere (query strings and JSON bodies) as `"<lat>,<lng>"`
/// using the shortest float representation, so `-15.7942` stays `-15.7942`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Why a coordinate string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinatesError {
    #[error("expected \"<lat>,<lng>\", got {0:?}")]
    Format(String),
    #[error("latitude {0} is outside -90..=90")]
    LatitudeRange(String),
    #[error("longitude {0} is outside -180..=180")]
    LongitudeRange(String),
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for Coordinates {
    type Err = CoordinatesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| CoordinatesError::Format(s.to_string()))?;
        let lat_str = lat.trim();
        let lng_str = lng.trim();

        let lat: f64 = lat_str
            .parse()
            .map_err(|_| CoordinatesError::Format(s.to_string()))?;
        let lng: f64 = lng_str
            .parse()
            .map_err(|_| CoordinatesError::Format(s.to_string()))?;

        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinatesError::LatitudeRange(lat_str.to_string()));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(CoordinatesError::LongitudeRange(lng_str.to_string()));
        }

        Ok(Self { lat, lng })
    }
}

impl Serialize for Coordinates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Coordinates {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

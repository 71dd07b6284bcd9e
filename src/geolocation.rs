//! Resolving the user's location for nearby searches.
//!
//! `resolve_user_location` never fails: whatever goes wrong with the
//! provider (nothing configured, lookup error, timeout), the caller gets the
//! fallback city center instead. Its error type is `Infallible` to make that
//! contract visible in the signature.

use crate::config::LocationConfig;
use crate::models::Coordinates;
use reqwest::Client;
use serde::Deserialize;
use std::convert::Infallible;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Brasília city center, used whenever no real location is available.
pub const FALLBACK_COORDINATES: Coordinates = Coordinates::new(-15.7942, -47.8825);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("no location source is available")]
    Unavailable,
    #[error("location lookup timed out")]
    Timeout,
    #[error("location lookup failed: {0}")]
    Lookup(String),
}

/// A source of the device's current position.
pub trait LocationProvider: Send + Sync {
    fn locate(&self) -> impl Future<Output = Result<Coordinates, GeolocationError>> + Send;
}

/// Resolve the user's location, substituting `FALLBACK_COORDINATES` on any failure.
pub async fn resolve_user_location<P: LocationProvider>(
    provider: &P,
    timeout: Duration,
) -> Result<Coordinates, Infallible> {
    let outcome = match tokio::time::timeout(timeout, provider.locate()).await {
        Ok(result) => result,
        Err(_) => Err(GeolocationError::Timeout),
    };

    Ok(match outcome {
        Ok(coordinates) => {
            debug!("Resolved user location {}", coordinates);
            coordinates
        }
        Err(e) => {
            debug!("Using fallback location {}: {}", FALLBACK_COORDINATES, e);
            FALLBACK_COORDINATES
        }
    })
}

/// A location known up front (config file or command line).
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocation(pub Option<Coordinates>);

impl LocationProvider for FixedLocation {
    async fn locate(&self) -> Result<Coordinates, GeolocationError> {
        self.0.ok_or(GeolocationError::Unavailable)
    }
}

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Approximate location from an IP geolocation service answering
/// `{"lat": .., "lon": ..}` (ip-api.com style).
#[derive(Debug, Clone)]
pub struct IpGeolocation {
    client: Client,
    url: String,
}

impl IpGeolocation {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    async fn lookup(&self) -> Result<IpLookupResponse, reqwest::Error> {
        self.client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

impl LocationProvider for IpGeolocation {
    async fn locate(&self) -> Result<Coordinates, GeolocationError> {
        let response = self
            .lookup()
            .await
            .map_err(|e| GeolocationError::Lookup(e.to_string()))?;

        if response.status.as_deref() == Some("fail") {
            return Err(GeolocationError::Lookup(
                response.message.unwrap_or_else(|| "lookup refused".to_string()),
            ));
        }
        match (response.lat, response.lon) {
            (Some(lat), Some(lng)) => format!("{},{}", lat, lng)
                .parse()
                .map_err(|e: crate::models::CoordinatesError| GeolocationError::Lookup(e.to_string())),
            _ => Err(GeolocationError::Lookup("response has no coordinates".to_string())),
        }
    }
}

/// The provider chosen from configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredLocation {
    Fixed(FixedLocation),
    Ip(IpGeolocation),
}

impl ConfiguredLocation {
    /// Pick a provider: an explicit override wins, then an IP lookup URL,
    /// then fixed coordinates from the config file.
    pub fn from_config(
        config: &LocationConfig,
        client: Client,
        explicit: Option<Coordinates>,
    ) -> Self {
        if let Some(coordinates) = explicit {
            return Self::Fixed(FixedLocation(Some(coordinates)));
        }
        if let Some(url) = &config.ip_lookup_url {
            return Self::Ip(IpGeolocation::new(client, url.clone()));
        }
        let configured = config.coordinates.as_deref().and_then(|raw| {
            raw.parse::<Coordinates>()
                .inspect_err(|e| warn!("Ignoring configured coordinates {:?}: {}", raw, e))
                .ok()
        });
        Self::Fixed(FixedLocation(configured))
    }
}

impl LocationProvider for ConfiguredLocation {
    async fn locate(&self) -> Result<Coordinates, GeolocationError> {
        match self {
            Self::Fixed(provider) => provider.locate().await,
            Self::Ip(provider) => provider.locate().await,
        }
    }
}

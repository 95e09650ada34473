//! Location resolution: city name or coordinate pair to a canonical
//! `{latitude, longitude, cityName}` triple.

use std::sync::Arc;

use crate::error::CoreError;
use crate::gateway::{Geocoder, ReverseGeocoder};
use crate::types::Location;

/// Fallback display name when reverse geocoding names nothing.
const UNKNOWN_CITY: &str = "Unknown City";

/// The caller's location input: a city name, a coordinate pair, or (from a
/// malformed request) neither.
#[derive(Debug, Clone, Default)]
pub struct LocationQuery {
    pub city: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl LocationQuery {
    pub fn city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            ..Self::default()
        }
    }

    pub fn coords(lat: f64, lon: f64) -> Self {
        Self {
            city: None,
            lat: Some(lat),
            lon: Some(lon),
        }
    }
}

/// Chains the geocoding gateways to produce one canonical [`Location`].
#[derive(Clone)]
pub struct LocationResolver {
    geocoder: Arc<dyn Geocoder>,
    reverse: Arc<dyn ReverseGeocoder>,
}

impl LocationResolver {
    pub fn new(geocoder: Arc<dyn Geocoder>, reverse: Arc<dyn ReverseGeocoder>) -> Self {
        Self { geocoder, reverse }
    }

    /// Resolve a location input. The city branch wins when both a city and
    /// coordinates are supplied.
    ///
    /// # Errors
    ///
    /// `Validation` when neither a city nor a full lat/lon pair is given;
    /// `NotFound` when a city search has zero matches; `Upstream` on any
    /// gateway failure.
    pub async fn resolve(&self, query: &LocationQuery) -> Result<Location, CoreError> {
        if let Some(city) = query.city.as_deref().filter(|c| !c.trim().is_empty()) {
            return self.resolve_city(city).await;
        }

        match (query.lat, query.lon) {
            (Some(lat), Some(lon)) => self.resolve_coords(lat, lon).await,
            _ => Err(CoreError::Validation(
                "specify either city or both lat and lon".into(),
            )),
        }
    }

    async fn resolve_city(&self, city: &str) -> Result<Location, CoreError> {
        let matches = self.geocoder.search(city).await?;

        let Some(first) = matches.first() else {
            tracing::debug!(%city, "Geocoder returned no matches");
            return Err(CoreError::NotFound("city not found".into()));
        };

        // The display name stays the caller's string verbatim, not the
        // gateway's normalized `first.name`.
        Ok(Location {
            latitude: first.latitude,
            longitude: first.longitude,
            city_name: city.to_string(),
        })
    }

    async fn resolve_coords(&self, lat: f64, lon: f64) -> Result<Location, CoreError> {
        let place = self.reverse.lookup(lat, lon).await?;

        let city_name = place
            .city
            .filter(|c| !c.is_empty())
            .or(place.locality.filter(|l| !l.is_empty()))
            .unwrap_or_else(|| UNKNOWN_CITY.to_string());

        // Coordinates pass through the inputs unchanged.
        Ok(Location {
            latitude: lat,
            longitude: lon,
            city_name,
        })
    }
}

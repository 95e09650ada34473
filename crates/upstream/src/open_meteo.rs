//! Open-Meteo clients: forward geocoding and current-weather forecast.
//! Free APIs, no key required.

use async_trait::async_trait;
use serde::Deserialize;

use promptlab_core::error::GatewayError;
use promptlab_core::gateway::{Geocoder, WeatherProvider};
use promptlab_core::types::{CurrentWeather, GeoMatch};

use crate::{check_status, transport_err};

/// Production base URL for the geocoding API.
pub const GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com";

/// Production base URL for the forecast API.
pub const FORECAST_BASE_URL: &str = "https://api.open-meteo.com";

/// Client for `GET /v1/search` (city name to coordinates).
pub struct OpenMeteoGeocoder {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    /// Absent entirely when nothing matches.
    #[serde(default)]
    results: Vec<GeoMatch>,
}

impl OpenMeteoGeocoder {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_base_url(client, GEOCODING_BASE_URL.to_string())
    }

    pub fn with_base_url(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    async fn search(&self, city: &str) -> Result<Vec<GeoMatch>, GatewayError> {
        let response = self
            .client
            .get(format!("{}/v1/search", self.base_url))
            .query(&[("name", city), ("count", "1")])
            .send()
            .await
            .map_err(transport_err)?;

        let body: SearchResponse = check_status(response)
            .await?
            .json()
            .await
            .map_err(transport_err)?;

        Ok(body.results)
    }
}

/// Client for `GET /v1/forecast?current_weather=true`.
pub struct OpenMeteoWeather {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeather,
}

impl OpenMeteoWeather {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_base_url(client, FORECAST_BASE_URL.to_string())
    }

    pub fn with_base_url(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoWeather {
    async fn current(&self, lat: f64, lon: f64) -> Result<CurrentWeather, GatewayError> {
        let response = self
            .client
            .get(format!("{}/v1/forecast", self.base_url))
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .send()
            .await
            .map_err(transport_err)?;

        let body: ForecastResponse = check_status(response)
            .await?
            .json()
            .await
            .map_err(transport_err)?;

        Ok(body.current_weather)
    }
}

//! BigDataCloud reverse-geocoding client (coordinates to place name).
//! Free client-side API, no key required.

use async_trait::async_trait;

use promptlab_core::error::GatewayError;
use promptlab_core::gateway::ReverseGeocoder;
use promptlab_core::types::Place;

use crate::{check_status, transport_err};

/// Production base URL.
pub const BASE_URL: &str = "https://api.bigdatacloud.net";

/// Client for `GET /data/reverse-geocode-client`.
///
/// The response carries many fields; only the optional `city` and
/// `locality` strings matter here, which is exactly what
/// [`Place`] deserializes.
pub struct BigDataCloudReverse {
    client: reqwest::Client,
    base_url: String,
}

impl BigDataCloudReverse {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_base_url(client, BASE_URL.to_string())
    }

    pub fn with_base_url(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl ReverseGeocoder for BigDataCloudReverse {
    async fn lookup(&self, lat: f64, lon: f64) -> Result<Place, GatewayError> {
        let response = self
            .client
            .get(format!("{}/data/reverse-geocode-client", self.base_url))
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("localityLanguage", "en".to_string()),
            ])
            .send()
            .await
            .map_err(transport_err)?;

        check_status(response)
            .await?
            .json()
            .await
            .map_err(transport_err)
    }
}

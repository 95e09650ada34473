//! Weather lookup: resolved location plus current conditions, merged into
//! one record.

use std::sync::Arc;

use crate::error::CoreError;
use crate::gateway::WeatherProvider;
use crate::resolver::{LocationQuery, LocationResolver};
use crate::types::WeatherRecord;

/// Chains [`LocationResolver`] and a [`WeatherProvider`] call.
///
/// Atomic: if either step fails, the whole operation fails; callers never
/// see a partial record.
#[derive(Clone)]
pub struct WeatherResolver {
    location: LocationResolver,
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherResolver {
    pub fn new(location: LocationResolver, provider: Arc<dyn WeatherProvider>) -> Self {
        Self { location, provider }
    }

    /// Resolve the input to a location, fetch its current weather, and
    /// merge the two.
    ///
    /// # Errors
    ///
    /// Propagates location-resolution errors unchanged (`Validation`,
    /// `NotFound`, `Upstream`); weather gateway failures are `Upstream`.
    pub async fn resolve(&self, query: &LocationQuery) -> Result<WeatherRecord, CoreError> {
        let location = self.location.resolve(query).await?;

        let current = self
            .provider
            .current(location.latitude, location.longitude)
            .await?;

        Ok(WeatherRecord {
            latitude: location.latitude,
            longitude: location.longitude,
            city_name: location.city_name,
            temperature: current.temperature,
            windspeed: current.windspeed,
            winddirection: current.winddirection,
            weathercode: current.weathercode,
        })
    }
}

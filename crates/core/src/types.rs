//! Domain types crossing the resolver boundary.
//!
//! Wire field names are camelCase (`resultUrl`, `cityName`) on every
//! transport, so REST and GraphQL payloads stay value-identical.

use serde::{Deserialize, Serialize};

/// A saved generation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Opaque identifier assigned by the datastore on creation.
    pub id: String,
    pub prompt: String,
    pub result_url: String,
    /// Epoch milliseconds, server-stamped; sole sort key for listing.
    pub timestamp: i64,
}

/// The document handed to the datastore on create and update.
///
/// The store assigns the id on create; the resolver stamps the timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub prompt: String,
    pub result_url: String,
    pub timestamp: i64,
}

/// A canonical resolved location, built fresh per weather request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub city_name: String,
}

/// A point-in-time weather observation for a resolved location.
///
/// `weathercode` is the upstream's small-integer code (0, 1, 2, 3, 45, 48,
/// 51, 61, 63, 65, 71, 73, 75, 95, 99) passed through unmodified; mapping it
/// to a label or icon is the client's concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub city_name: String,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Meters per second.
    pub windspeed: f64,
    /// Degrees.
    pub winddirection: f64,
    pub weathercode: i32,
}

/// One geocoding match for a city search.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoMatch {
    pub latitude: f64,
    pub longitude: f64,
    /// The gateway's normalized place name. Informational only: location
    /// resolution keeps the caller's city string verbatim.
    pub name: String,
}

/// Reverse-geocoding result for a coordinate pair.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Place {
    pub city: Option<String>,
    pub locality: Option<String>,
}

/// The `current_weather` portion of a forecast response.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
    pub winddirection: f64,
    pub weathercode: i32,
}

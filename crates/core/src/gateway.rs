//! Upstream gateway traits.
//!
//! Each trait is the seam between a resolver and one external system. The
//! production implementations live in `promptlab-db` (datastore) and
//! `promptlab-upstream` (third-party APIs); tests substitute in-memory
//! fakes. Resolvers receive gateways as `Arc<dyn Trait>` so no module-level
//! handles exist.

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::types::{CurrentWeather, GeoMatch, Item, ItemDraft, Place};

/// Document-store semantics for generation records: add with a generated id,
/// point reads, listing ordered by timestamp, in-place update, delete.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Persist a new document and return its generated id.
    async fn add(&self, draft: &ItemDraft) -> Result<String, GatewayError>;

    /// Fetch one document, `None` if the id is unknown.
    async fn get(&self, id: &str) -> Result<Option<Item>, GatewayError>;

    /// All documents, timestamp descending.
    async fn list_desc(&self) -> Result<Vec<Item>, GatewayError>;

    /// Overwrite an existing document. Returns `false` when the id is
    /// unknown (the resolver turns that into a not-found).
    async fn update(&self, id: &str, draft: &ItemDraft) -> Result<bool, GatewayError>;

    /// Remove a document. Deleting an unknown id is not an error.
    async fn delete(&self, id: &str) -> Result<(), GatewayError>;
}

/// Forward geocoding: city name to candidate coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Search for a city by name. An empty vec means no match.
    async fn search(&self, city: &str) -> Result<Vec<GeoMatch>, GatewayError>;
}

/// Reverse geocoding: coordinates to a named place.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn lookup(&self, lat: f64, lon: f64) -> Result<Place, GatewayError>;
}

/// Current-weather lookup for a coordinate pair.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, lat: f64, lon: f64) -> Result<CurrentWeather, GatewayError>;
}

/// Generative-image API: prompt in, image URL out.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate exactly one image and return its URL.
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;
}

//! Reqwest clients for the third-party gateways.
//!
//! One module per upstream: Open-Meteo geocoding and forecast, BigDataCloud
//! reverse geocoding, OpenAI image generation. Each client implements the
//! matching trait from `promptlab-core::gateway`, takes an injectable base
//! URL, and shares a bounded-timeout [`reqwest::Client`] so every upstream
//! call is time-limited and a timeout surfaces as a transport failure.

pub mod bigdatacloud;
pub mod open_meteo;
pub mod openai;

use std::time::Duration;

use promptlab_core::error::GatewayError;

pub use bigdatacloud::BigDataCloudReverse;
pub use open_meteo::{OpenMeteoGeocoder, OpenMeteoWeather};
pub use openai::OpenAiImageGen;

/// Default per-call timeout for upstream requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Build a shared HTTP client with a bounded per-request timeout.
///
/// One client serves all upstreams (connection pooling); pass it to each
/// gateway constructor.
pub fn http_client(timeout: Duration) -> Result<reqwest::Client, GatewayError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| GatewayError::Transport(e.to_string()))
}

/// Map a reqwest failure (network, DNS, TLS, timeout) to a gateway error.
pub(crate) fn transport_err(err: reqwest::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}

/// Turn a non-2xx response into [`GatewayError::Status`], keeping the raw
/// body for diagnostics; pass 2xx responses through.
pub(crate) async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), "Upstream returned an error status");
    Err(GatewayError::Status {
        status: status.as_u16(),
        body,
    })
}

//! REST surface for the weather resolver.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use promptlab_core::resolver::LocationQuery;

use crate::error::ApiResult;
use crate::state::AppState;

/// Query parameters: either `city`, or both `lat` and `lon`. The resolver
/// validates the combination so both transports reject identically.
#[derive(Debug, Deserialize)]
pub struct WeatherParams {
    pub city: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// GET /weather
async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> ApiResult<impl IntoResponse> {
    let query = LocationQuery {
        city: params.city,
        lat: params.lat,
        lon: params.lon,
    };
    let record = state.weather.resolve(&query).await?;
    Ok(Json(record))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/weather", get(get_weather))
}

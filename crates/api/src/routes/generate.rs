//! REST surface for the image resolver.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateInput {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Serialize)]
struct GenerateResponse {
    result: String,
}

/// POST /generate
async fn generate(
    State(state): State<AppState>,
    Json(input): Json<GenerateInput>,
) -> ApiResult<impl IntoResponse> {
    let url = state
        .image
        .generate(input.prompt.as_deref().unwrap_or_default())
        .await?;

    Ok(Json(GenerateResponse { result: url }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/generate", post(generate))
}

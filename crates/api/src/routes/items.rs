//! REST surface for the item resolver.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use promptlab_core::error::CoreError;

use crate::error::ApiResult;
use crate::state::AppState;

/// Request body for create and update. Fields are optional at the wire
/// level so a missing field reaches the resolver's validation (400) instead
/// of a deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub result_url: Option<String>,
}

impl ItemInput {
    fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or_default()
    }

    fn result_url(&self) -> &str {
        self.result_url.as_deref().unwrap_or_default()
    }
}

#[derive(Serialize)]
struct CreatedResponse {
    id: String,
}

/// Fallback query parameter consulted when the path id is an unsubstituted
/// template token.
#[derive(Debug, Deserialize)]
pub struct IdFallback {
    id: Option<String>,
}

/// Unsubstituted template markers some defective clients send verbatim.
const PLACEHOLDER_TOKENS: [&str; 2] = ["{id}", ":id"];

/// Resolve the item id for a `/items/{id}` request.
///
/// A path segment that is literally a template token means the client
/// failed to substitute it; fall back to the `id` query parameter before
/// rejecting. Must never panic.
fn effective_id(path_id: String, fallback: Option<String>) -> Result<String, CoreError> {
    if !PLACEHOLDER_TOKENS.contains(&path_id.as_str()) {
        return Ok(path_id);
    }

    tracing::warn!(
        token = %path_id,
        "Path id is an unsubstituted placeholder; using the id query parameter"
    );
    fallback
        .filter(|id| !id.is_empty())
        .ok_or_else(|| CoreError::Validation("item id is required".into()))
}

/// POST /items
async fn create_item(
    State(state): State<AppState>,
    Json(input): Json<ItemInput>,
) -> ApiResult<impl IntoResponse> {
    let item = state
        .items
        .create(input.prompt(), input.result_url())
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: item.id })))
}

/// GET /items
async fn list_items(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let items = state.items.list().await?;
    Ok(Json(items))
}

/// GET /items/{id}
async fn get_item(
    State(state): State<AppState>,
    Path(path_id): Path<String>,
    Query(fallback): Query<IdFallback>,
) -> ApiResult<impl IntoResponse> {
    let id = effective_id(path_id, fallback.id)?;
    let item = state.items.get(&id).await?;
    Ok(Json(item))
}

/// PUT /items/{id}
async fn update_item(
    State(state): State<AppState>,
    Path(path_id): Path<String>,
    Query(fallback): Query<IdFallback>,
    Json(input): Json<ItemInput>,
) -> ApiResult<impl IntoResponse> {
    let id = effective_id(path_id, fallback.id)?;
    let item = state
        .items
        .update(&id, input.prompt(), input.result_url())
        .await?;
    Ok(Json(item))
}

/// DELETE /items/{id}
async fn delete_item(
    State(state): State<AppState>,
    Path(path_id): Path<String>,
    Query(fallback): Query<IdFallback>,
) -> ApiResult<impl IntoResponse> {
    let id = effective_id(path_id, fallback.id)?;
    state.items.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}

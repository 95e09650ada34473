pub mod generate;
pub mod health;
pub mod items;
pub mod weather;

use axum::Router;

use crate::state::AppState;

/// Build the REST route tree (Transport A).
///
/// ```text
/// GET  /healthz           plain-text liveness
/// GET  /health            JSON health
///
/// POST   /items           create
/// GET    /items           list (timestamp desc)
/// GET    /items/{id}      get one
/// PUT    /items/{id}      update
/// DELETE /items/{id}      delete
///
/// GET  /weather           ?city= or ?lat=&lon=
/// POST /generate          {prompt}
/// ```
pub fn rest_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(items::router())
        .merge(weather::router())
        .merge(generate::router())
}

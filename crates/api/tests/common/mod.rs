//! Shared harness for the integration tests.
//!
//! Builds the full application router over in-memory gateway fakes, so the
//! suite exercises the exact middleware stack and dispatch logic production
//! uses without a database or network.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use promptlab_api::config::ServerConfig;
use promptlab_api::router::build_app_router;
use promptlab_api::state::AppState;
use promptlab_core::error::GatewayError;
use promptlab_core::gateway::{
    Geocoder, ImageGenerator, ItemStore, ReverseGeocoder, WeatherProvider,
};
use promptlab_core::resolver::{ImageResolver, ItemResolver, LocationResolver, WeatherResolver};
use promptlab_core::types::{CurrentWeather, GeoMatch, Item, ItemDraft, Place};

/// In-memory document store with sequential ids.
#[derive(Default)]
pub struct MemStore {
    docs: Mutex<HashMap<String, Item>>,
    next_id: Mutex<u32>,
}

#[async_trait]
impl ItemStore for MemStore {
    async fn add(&self, draft: &ItemDraft) -> Result<String, GatewayError> {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let id = format!("doc-{next}");
        self.docs.lock().unwrap().insert(
            id.clone(),
            Item {
                id: id.clone(),
                prompt: draft.prompt.clone(),
                result_url: draft.result_url.clone(),
                timestamp: draft.timestamp,
            },
        );
        Ok(id)
    }

    async fn get(&self, id: &str) -> Result<Option<Item>, GatewayError> {
        Ok(self.docs.lock().unwrap().get(id).cloned())
    }

    async fn list_desc(&self) -> Result<Vec<Item>, GatewayError> {
        let mut items: Vec<Item> = self.docs.lock().unwrap().values().cloned().collect();
        items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(items)
    }

    async fn update(&self, id: &str, draft: &ItemDraft) -> Result<bool, GatewayError> {
        let mut docs = self.docs.lock().unwrap();
        match docs.get_mut(id) {
            Some(item) => {
                item.prompt = draft.prompt.clone();
                item.result_url = draft.result_url.clone();
                item.timestamp = draft.timestamp;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        self.docs.lock().unwrap().remove(id);
        Ok(())
    }
}

/// Geocoder fake returning a fixed match list for any search.
pub struct FakeGeocoder {
    pub matches: Vec<GeoMatch>,
}

impl FakeGeocoder {
    /// One match with a normalized name that differs from typical inputs,
    /// so verbatim-city assertions are meaningful.
    pub fn paris() -> Self {
        Self {
            matches: vec![GeoMatch {
                latitude: 48.85,
                longitude: 2.35,
                name: "Paris, Île-de-France".into(),
            }],
        }
    }

    pub fn empty() -> Self {
        Self { matches: vec![] }
    }
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    async fn search(&self, _city: &str) -> Result<Vec<GeoMatch>, GatewayError> {
        Ok(self.matches.clone())
    }
}

/// Reverse-geocoder fake returning a fixed place.
pub struct FakeReverse {
    pub place: Place,
}

#[async_trait]
impl ReverseGeocoder for FakeReverse {
    async fn lookup(&self, _lat: f64, _lon: f64) -> Result<Place, GatewayError> {
        Ok(self.place.clone())
    }
}

/// Weather fake returning fixed current conditions.
pub struct FakeWeather;

#[async_trait]
impl WeatherProvider for FakeWeather {
    async fn current(&self, _lat: f64, _lon: f64) -> Result<CurrentWeather, GatewayError> {
        Ok(CurrentWeather {
            temperature: 18.5,
            windspeed: 3.2,
            winddirection: 270.0,
            weathercode: 2,
        })
    }
}

/// Image-generation fake returning a fixed URL, or failing when `fail` is
/// set.
pub struct FakeImageGen {
    pub fail: bool,
}

#[async_trait]
impl ImageGenerator for FakeImageGen {
    async fn generate(&self, _prompt: &str) -> Result<String, GatewayError> {
        if self.fail {
            return Err(GatewayError::Status {
                status: 500,
                body: "boom".into(),
            });
        }
        Ok("https://img.example/generated.png".into())
    }
}

pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        upstream_timeout_secs: 10,
        genai_api_key: "test-key".to_string(),
    }
}

/// Gateway set for one test app; swap individual fields to steer behavior.
pub struct TestGateways {
    pub store: Arc<dyn ItemStore>,
    pub geocoder: Arc<dyn Geocoder>,
    pub reverse: Arc<dyn ReverseGeocoder>,
    pub weather: Arc<dyn WeatherProvider>,
    pub image: Arc<dyn ImageGenerator>,
}

impl Default for TestGateways {
    fn default() -> Self {
        Self {
            store: Arc::new(MemStore::default()),
            geocoder: Arc::new(FakeGeocoder::paris()),
            reverse: Arc::new(FakeReverse {
                place: Place::default(),
            }),
            weather: Arc::new(FakeWeather),
            image: Arc::new(FakeImageGen { fail: false }),
        }
    }
}

/// Build the full application router over the given gateways.
///
/// Mirrors the wiring in `main.rs`: same resolvers, same
/// `build_app_router`, so tests exercise the production middleware stack.
pub fn build_test_app_with(gateways: TestGateways) -> Router {
    let items = ItemResolver::new(gateways.store);
    let location = LocationResolver::new(gateways.geocoder, gateways.reverse);
    let weather = WeatherResolver::new(location, gateways.weather);
    let image = ImageResolver::new(gateways.image);

    let state = AppState::new(items, weather, image, test_config());
    build_app_router(state)
}

/// Build a test app with the default happy-path fakes.
pub fn build_test_app() -> Router {
    build_test_app_with(TestGateways::default())
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a request with a JSON body.
pub async fn request_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a bodyless request with an arbitrary method.
pub async fn request_empty(app: Router, method: Method, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body into raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Run a GraphQL document against the app and return the raw envelope.
pub async fn graphql(app: Router, query: &str) -> serde_json::Value {
    let response = request_json(
        app,
        Method::POST,
        "/graphql",
        serde_json::json!({ "query": query }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

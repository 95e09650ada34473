//! GraphQL surface (Transport B).
//!
//! One schema exposing the same operations as the REST routes, dispatching
//! into the same resolver instances. Field and argument names follow the
//! REST wire names (`resultUrl`, `cityName`) so the two surfaces produce
//! value-identical result objects.

use async_graphql::{EmptySubscription, Error, ErrorExtensions, Object, Result, Schema, SimpleObject};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::routing::post;
use axum::Router;

use promptlab_core::error::CoreError;
use promptlab_core::resolver::{ImageResolver, ItemResolver, LocationQuery, WeatherResolver};
use promptlab_core::types::{Item, WeatherRecord};

use crate::state::AppState;

/// The application schema type.
pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema over the given resolvers (the same instances the REST
/// routes hold).
pub fn build_schema(
    items: ItemResolver,
    weather: WeatherResolver,
    image: ImageResolver,
) -> AppSchema {
    Schema::build(
        QueryRoot {
            items: items.clone(),
            weather,
        },
        MutationRoot { items, image },
        EmptySubscription,
    )
    .finish()
}

/// Axum handler for `POST /graphql`.
pub async fn graphql_handler(
    State(state): State<AppState>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

pub fn router() -> Router<AppState> {
    Router::new().route("/graphql", post(graphql_handler))
}

/// Map a resolver error into the GraphQL error envelope, carrying the same
/// machine code the REST surface returns.
fn gql_err(err: CoreError) -> Error {
    let code = err.code();
    Error::new(err.message().to_string()).extend_with(|_, e| e.set("code", code))
}

#[derive(SimpleObject)]
#[graphql(name = "Item")]
struct ItemObject {
    id: String,
    prompt: String,
    result_url: String,
    timestamp: i64,
}

impl From<Item> for ItemObject {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            prompt: item.prompt,
            result_url: item.result_url,
            timestamp: item.timestamp,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "WeatherRecord")]
struct WeatherObject {
    latitude: f64,
    longitude: f64,
    city_name: String,
    temperature: f64,
    windspeed: f64,
    winddirection: f64,
    weathercode: i32,
}

impl From<WeatherRecord> for WeatherObject {
    fn from(record: WeatherRecord) -> Self {
        Self {
            latitude: record.latitude,
            longitude: record.longitude,
            city_name: record.city_name,
            temperature: record.temperature,
            windspeed: record.windspeed,
            winddirection: record.winddirection,
            weathercode: record.weathercode,
        }
    }
}

pub struct QueryRoot {
    items: ItemResolver,
    weather: WeatherResolver,
}

#[Object]
impl QueryRoot {
    /// All saved items, newest first.
    async fn get_items(&self) -> Result<Vec<ItemObject>> {
        let items = self.items.list().await.map_err(gql_err)?;
        Ok(items.into_iter().map(ItemObject::from).collect())
    }

    /// One item by id.
    async fn get_item(&self, id: String) -> Result<ItemObject> {
        let item = self.items.get(&id).await.map_err(gql_err)?;
        Ok(item.into())
    }

    /// Current weather for a city name or a coordinate pair.
    async fn get_weather(
        &self,
        city: Option<String>,
        lat: Option<f64>,
        lon: Option<f64>,
    ) -> Result<WeatherObject> {
        let query = LocationQuery { city, lat, lon };
        let record = self.weather.resolve(&query).await.map_err(gql_err)?;
        Ok(record.into())
    }
}

pub struct MutationRoot {
    items: ItemResolver,
    image: ImageResolver,
}

#[Object]
impl MutationRoot {
    /// Save a generation record.
    async fn create_item(&self, prompt: String, result_url: String) -> Result<ItemObject> {
        let item = self
            .items
            .create(&prompt, &result_url)
            .await
            .map_err(gql_err)?;
        Ok(item.into())
    }

    /// Overwrite a record's prompt and result URL; refreshes the timestamp.
    async fn update_item(
        &self,
        id: String,
        prompt: String,
        result_url: String,
    ) -> Result<ItemObject> {
        let item = self
            .items
            .update(&id, &prompt, &result_url)
            .await
            .map_err(gql_err)?;
        Ok(item.into())
    }

    /// Delete a record; true even when the id no longer exists.
    async fn delete_item(&self, id: String) -> Result<bool> {
        self.items.delete(&id).await.map_err(gql_err)?;
        Ok(true)
    }

    /// Generate one image and return its URL.
    async fn generate_image(&self, prompt: String) -> Result<String> {
        self.image.generate(&prompt).await.map_err(gql_err)
    }
}

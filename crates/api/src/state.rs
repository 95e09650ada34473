use std::sync::Arc;

use promptlab_core::resolver::{ImageResolver, ItemResolver, WeatherResolver};

use crate::config::ServerConfig;
use crate::graphql::AppSchema;

/// Shared application state available to all handlers via `State<AppState>`.
///
/// Cheaply cloneable: the resolvers hold their gateways behind `Arc`, and
/// the GraphQL schema is itself an `Arc` internally. Both transports
/// dispatch into the same resolver instances, which is what makes them
/// observably equivalent.
#[derive(Clone)]
pub struct AppState {
    pub items: ItemResolver,
    pub weather: WeatherResolver,
    pub image: ImageResolver,
    pub schema: AppSchema,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Assemble state from the three resolvers plus config; builds the
    /// GraphQL schema over the same resolver instances the REST routes use.
    pub fn new(
        items: ItemResolver,
        weather: WeatherResolver,
        image: ImageResolver,
        config: ServerConfig,
    ) -> Self {
        let schema = crate::graphql::build_schema(items.clone(), weather.clone(), image.clone());
        Self {
            items,
            weather,
            image,
            schema,
            config: Arc::new(config),
        }
    }
}

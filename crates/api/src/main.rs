use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use promptlab_api::config::ServerConfig;
use promptlab_api::router::build_app_router;
use promptlab_api::state::AppState;
use promptlab_core::resolver::{ImageResolver, ItemResolver, LocationResolver, WeatherResolver};
use promptlab_db::PgItemStore;
use promptlab_upstream::{
    http_client, BigDataCloudReverse, OpenAiImageGen, OpenMeteoGeocoder, OpenMeteoWeather,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "promptlab_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database (Datastore Gateway) ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = promptlab_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    promptlab_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    promptlab_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Upstream gateways ---
    // One pooled HTTP client with a bounded per-call timeout serves all
    // third-party APIs; a timeout surfaces as an upstream error.
    let client = http_client(Duration::from_secs(config.upstream_timeout_secs))
        .expect("Failed to build upstream HTTP client");

    let geocoder = Arc::new(OpenMeteoGeocoder::new(client.clone()));
    let reverse = Arc::new(BigDataCloudReverse::new(client.clone()));
    let forecast = Arc::new(OpenMeteoWeather::new(client.clone()));
    let image_gen = Arc::new(OpenAiImageGen::new(client, config.genai_api_key.clone()));

    // --- Resolvers ---
    let items = ItemResolver::new(Arc::new(PgItemStore::new(pool)));
    let location = LocationResolver::new(geocoder, reverse);
    let weather = WeatherResolver::new(location, forecast);
    let image = ImageResolver::new(image_gen);

    // --- App state & router ---
    let state = AppState::new(items, weather, image, config.clone());
    let app = build_app_router(state);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server shuts
/// down cleanly whether stopped interactively or by a process manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development; override via
/// environment variables in production.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Whole-request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Per-upstream-call timeout in seconds (default: `10`).
    pub upstream_timeout_secs: u64,
    /// Bearer key for the image-generation upstream. Empty when unset;
    /// generation requests will then fail upstream with an auth error.
    pub genai_api_key: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default   |
    /// |-------------------------|-----------|
    /// | `HOST`                  | `0.0.0.0` |
    /// | `PORT`                  | `8080`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`      |
    /// | `UPSTREAM_TIMEOUT_SECS` | `10`      |
    /// | `GENAI_API_KEY`         | (empty)   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upstream_timeout_secs: u64 = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("UPSTREAM_TIMEOUT_SECS must be a valid u64");

        let genai_api_key = std::env::var("GENAI_API_KEY").unwrap_or_default();
        if genai_api_key.is_empty() {
            tracing::warn!("GENAI_API_KEY is not set; image generation will fail upstream");
        }

        Self {
            host,
            port,
            request_timeout_secs,
            upstream_timeout_secs,
            genai_api_key,
        }
    }
}

//! OpenAI image-generation client.

use async_trait::async_trait;
use serde::Deserialize;

use promptlab_core::error::GatewayError;
use promptlab_core::gateway::ImageGenerator;

use crate::{check_status, transport_err};

/// Production base URL.
pub const BASE_URL: &str = "https://api.openai.com";

/// Fixed output resolution; the service never exposes a size knob.
const IMAGE_SIZE: &str = "1024x1024";

/// Client for `POST /v1/images/generations`.
///
/// Always requests exactly one image at [`IMAGE_SIZE`] and returns its URL.
pub struct OpenAiImageGen {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct GenerationsResponse {
    data: Vec<GeneratedImage>,
}

#[derive(Debug, Deserialize)]
struct GeneratedImage {
    url: String,
}

impl OpenAiImageGen {
    pub fn new(client: reqwest::Client, api_key: String) -> Self {
        Self::with_base_url(client, BASE_URL.to_string(), api_key)
    }

    pub fn with_base_url(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl ImageGenerator for OpenAiImageGen {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let body = serde_json::json!({
            "prompt": prompt,
            "n": 1,
            "size": IMAGE_SIZE,
        });

        let response = self
            .client
            .post(format!("{}/v1/images/generations", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_err)?;

        let parsed: GenerationsResponse = check_status(response)
            .await?
            .json()
            .await
            .map_err(transport_err)?;

        parsed
            .data
            .into_iter()
            .next()
            .map(|img| img.url)
            .ok_or_else(|| GatewayError::Transport("empty generations response".into()))
    }
}

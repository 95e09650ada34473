//! Prompt-to-image generation.

use std::sync::Arc;

use crate::error::CoreError;
use crate::gateway::ImageGenerator;

/// Validates a prompt and forwards it to the image-generation gateway.
///
/// Generation and history-saving are deliberately separate: a successful
/// generate followed by a failed save leaves no record, and that is fine.
#[derive(Clone)]
pub struct ImageResolver {
    generator: Arc<dyn ImageGenerator>,
}

impl ImageResolver {
    pub fn new(generator: Arc<dyn ImageGenerator>) -> Self {
        Self { generator }
    }

    /// Generate one image and return its URL.
    ///
    /// # Errors
    ///
    /// `Validation` on an empty prompt; any gateway failure becomes
    /// `Upstream("generation failed")`.
    pub async fn generate(&self, prompt: &str) -> Result<String, CoreError> {
        if prompt.trim().is_empty() {
            return Err(CoreError::Validation("prompt is required".into()));
        }

        match self.generator.generate(prompt).await {
            Ok(url) => {
                tracing::info!(prompt_len = prompt.len(), "Image generated");
                Ok(url)
            }
            Err(err) => {
                tracing::error!(error = %err, "Image generation failed");
                Err(CoreError::Upstream("generation failed".into()))
            }
        }
    }
}

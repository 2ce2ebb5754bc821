//! Image synthesis client over the image generations endpoint.

use super::{IMAGE_COUNT, IMAGE_QUALITY, IMAGE_SIZE, OpenAiConfig, PROVIDER};
use crate::{ImageGenerationRequest, ImageGenerationResponse, ModelMetrics, classify_error};
use async_trait::async_trait;
use reqwest::Client;
use sketch_core::{Description, GeneratedImageRef, StyleChoice, synthesis_prompt};
use sketch_error::{BuilderError, SketchResult, SynthesisError, SynthesisErrorKind};
use sketch_interface::Synthesizer;
use std::time::Instant;
use tracing::{debug, error, instrument, warn};

/// Image-generation client that renders a description in a chosen style.
#[derive(Debug, Clone)]
pub struct ImageGenerationClient {
    client: Client,
    config: OpenAiConfig,
    api_key: String,
}

impl ImageGenerationClient {
    /// Creates a new image-generation client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no API key is set.
    #[instrument(skip_all, fields(base_url = %config.base_url, model = %config.image_model))]
    pub fn new(config: OpenAiConfig) -> SketchResult<Self> {
        let api_key = config.require_api_key()?.to_string();
        debug!("Creating image generation client");
        Ok(Self {
            client: Client::new(),
            config,
            api_key,
        })
    }

    /// Builds the generation request: one `hd` image at 1792x1024 for the
    /// styled prompt.
    pub fn build_request(
        &self,
        description: &Description,
        style: StyleChoice,
    ) -> SketchResult<ImageGenerationRequest> {
        Ok(ImageGenerationRequest::builder()
            .model(&self.config.image_model)
            .prompt(synthesis_prompt(description, style))
            .n(IMAGE_COUNT)
            .size(IMAGE_SIZE)
            .quality(IMAGE_QUALITY)
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?)
    }

    #[instrument(skip(self, description), fields(model = %self.config.image_model, style = %style))]
    async fn request_image(
        &self,
        description: &Description,
        style: StyleChoice,
    ) -> SketchResult<GeneratedImageRef> {
        let request = self.build_request(description, style)?;
        let url = self.config.endpoint("images/generations");
        debug!(url = %url, "Sending image generation request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send image generation request");
                SynthesisError::new(SynthesisErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SynthesisError::new(SynthesisErrorKind::Transport(e.to_string())))?;

        if !status.is_success() {
            error!(status = %status, body = %body, "Image generation endpoint returned error");
            return Err(SynthesisError::new(SynthesisErrorKind::Status {
                status: status.as_u16(),
                body,
            })
            .into());
        }

        let parsed: ImageGenerationResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Failed to parse image generation response");
            SynthesisError::new(SynthesisErrorKind::Parse(e.to_string()))
        })?;

        let first = parsed.data().first();
        if let Some(revised) = first.and_then(|image| image.revised_prompt().as_deref()) {
            debug!(revised_prompt = %revised, "Model revised the prompt");
        }

        match first.and_then(|image| image.url().as_deref()) {
            Some(image_url) if !image_url.is_empty() => {
                debug!(image_url = %image_url, "Received generated image");
                Ok(GeneratedImageRef::new(image_url))
            }
            _ => {
                warn!(images = parsed.data().len(), "Image generation response has no URL");
                Err(SynthesisError::new(SynthesisErrorKind::MissingUrl).into())
            }
        }
    }
}

#[async_trait]
impl Synthesizer for ImageGenerationClient {
    async fn synthesize(
        &self,
        description: &Description,
        style: StyleChoice,
    ) -> SketchResult<GeneratedImageRef> {
        let started = Instant::now();
        let result = self.request_image(description, style).await;

        let metrics = ModelMetrics::get();
        match &result {
            Ok(_) => metrics.record_request(
                PROVIDER,
                &self.config.image_model,
                started.elapsed().as_secs_f64(),
            ),
            Err(e) => metrics.record_error(PROVIDER, &self.config.image_model, classify_error(e)),
        }
        result
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    fn model_name(&self) -> &str {
        &self.config.image_model
    }
}

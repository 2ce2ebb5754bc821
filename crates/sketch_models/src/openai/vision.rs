//! Description client over the chat completions endpoint.

use super::{MAX_DESCRIPTION_TOKENS, OpenAiConfig, PROVIDER};
use crate::{ChatCompletionRequest, ChatMessage, ChatRole, ContentPart, ModelMetrics, classify_error};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use sketch_core::{DESCRIBE_INSTRUCTION, Description, EncodedImage};
use sketch_error::{BuilderError, SketchResult, VisionError, VisionErrorKind};
use sketch_interface::Describer;
use std::time::Instant;
use tracing::{debug, error, instrument};

/// Vision-language client that turns a drawing into a description.
#[derive(Debug, Clone)]
pub struct VisionClient {
    client: Client,
    config: OpenAiConfig,
    api_key: String,
}

impl VisionClient {
    /// Creates a new vision client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no API key is set.
    #[instrument(skip_all, fields(base_url = %config.base_url, model = %config.vision_model))]
    pub fn new(config: OpenAiConfig) -> SketchResult<Self> {
        let api_key = config.require_api_key()?.to_string();
        debug!("Creating vision client");
        Ok(Self {
            client: Client::new(),
            config,
            api_key,
        })
    }

    /// Builds the completion request: the fixed instruction, the image as a
    /// data URI and the token cap.
    pub fn build_request(&self, image: &EncodedImage) -> SketchResult<ChatCompletionRequest> {
        let message = ChatMessage::builder()
            .role(ChatRole::User)
            .content(vec![
                ContentPart::text(DESCRIBE_INSTRUCTION),
                ContentPart::image_url(image.data_uri()),
            ])
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;

        Ok(ChatCompletionRequest::builder()
            .model(&self.config.vision_model)
            .messages(vec![message])
            .max_tokens(MAX_DESCRIPTION_TOKENS)
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?)
    }

    #[instrument(skip(self, image), fields(model = %self.config.vision_model, image_len = image.as_str().len()))]
    async fn request_description(&self, image: &EncodedImage) -> SketchResult<Description> {
        let request = self.build_request(image)?;
        let url = self.config.endpoint("chat/completions");
        debug!(url = %url, "Sending description request");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send description request");
                VisionError::new(VisionErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| VisionError::new(VisionErrorKind::Transport(e.to_string())))?;

        if status != StatusCode::OK {
            error!(status = %status, body = %body, "Description endpoint returned error");
            return Err(VisionError::new(VisionErrorKind::Status {
                status: status.as_u16(),
                body,
            })
            .into());
        }

        let json: Value = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Description response is not JSON");
            VisionError::new(VisionErrorKind::Parse(e.to_string()))
        })?;

        let text = extract_description(&json)?;
        debug!(chars = text.len(), "Received description");
        Ok(Description::new(text))
    }
}

/// Pulls `choices[0].message.content` out of a completion response.
///
/// # Errors
///
/// Returns [`VisionErrorKind::MissingField`] naming the first absent key, or
/// [`VisionErrorKind::Parse`] when the content is present but not text.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sketch_models::extract_description;
///
/// let body = json!({"choices": [{"message": {"content": "a red ball on a table"}}]});
/// assert_eq!(extract_description(&body).unwrap(), "a red ball on a table");
///
/// let err = extract_description(&json!({"unexpected": "shape"})).unwrap_err();
/// assert!(err.to_string().contains("KeyError: 'choices'"));
/// ```
pub fn extract_description(json: &Value) -> Result<String, VisionError> {
    let missing = |key: &str| VisionError::new(VisionErrorKind::MissingField(key.to_string()));

    let content = json
        .get("choices")
        .ok_or_else(|| missing("choices"))?
        .get(0)
        .ok_or_else(|| missing("choices[0]"))?
        .get("message")
        .ok_or_else(|| missing("message"))?
        .get("content")
        .ok_or_else(|| missing("content"))?;

    content.as_str().map(str::to_owned).ok_or_else(|| {
        VisionError::new(VisionErrorKind::Parse(format!(
            "expected text content, got {}",
            content
        )))
    })
}

#[async_trait]
impl Describer for VisionClient {
    async fn describe(&self, image: &EncodedImage) -> SketchResult<Description> {
        let started = Instant::now();
        let result = self.request_description(image).await;

        let metrics = ModelMetrics::get();
        match &result {
            Ok(_) => metrics.record_request(
                PROVIDER,
                &self.config.vision_model,
                started.elapsed().as_secs_f64(),
            ),
            Err(e) => metrics.record_error(PROVIDER, &self.config.vision_model, classify_error(e)),
        }
        result
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    fn model_name(&self) -> &str {
        &self.config.vision_model
    }
}

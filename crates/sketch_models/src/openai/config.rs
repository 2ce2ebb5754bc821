//! Connection settings shared by both OpenAI clients.

use serde::{Deserialize, Serialize};
use sketch_error::ConfigError;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Default model for describing drawings.
pub const DEFAULT_VISION_MODEL: &str = "gpt-4-vision-preview";
/// Default model for rendering descriptions.
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";

/// Generated-token cap for a description.
pub const MAX_DESCRIPTION_TOKENS: u32 = 300;
/// Output resolution of generated images.
pub const IMAGE_SIZE: &str = "1792x1024";
/// Quality tier of generated images.
pub const IMAGE_QUALITY: &str = "hd";
/// Images requested per generation call.
pub const IMAGE_COUNT: u8 = 1;

/// OpenAI connection settings.
///
/// Deserialized from the `[openai]` configuration section. The API key is
/// never serialized back out.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// API root, e.g. "https://api.openai.com/v1"
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Secret API key
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Model used by the description client
    #[serde(default = "default_vision_model")]
    pub vision_model: String,
    /// Model used by the image-generation client
    #[serde(default = "default_image_model")]
    pub image_model: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_vision_model() -> String {
    DEFAULT_VISION_MODEL.to_string()
}

fn default_image_model() -> String {
    DEFAULT_IMAGE_MODEL.to_string()
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            vision_model: default_vision_model(),
            image_model: default_image_model(),
        }
    }
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("vision_model", &self.vision_model)
            .field("image_model", &self.image_model)
            .finish()
    }
}

impl OpenAiConfig {
    /// Set the API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the description model.
    pub fn with_vision_model(mut self, model: impl Into<String>) -> Self {
        self.vision_model = model.into();
        self
    }

    /// Set the image-generation model.
    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    /// The API key, or a configuration error when none was supplied.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ConfigError::new(
                "OpenAI API key not set (export OPENAI_API_KEY or set openai.api_key)",
            )),
        }
    }

    /// Full URL of an endpoint below the API root.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = OpenAiConfig::default().with_base_url("http://localhost:9000/v1/");
        assert_eq!(
            config.endpoint("/chat/completions"),
            "http://localhost:9000/v1/chat/completions"
        );
    }

    #[test]
    fn blank_key_is_rejected() {
        assert!(OpenAiConfig::default().require_api_key().is_err());
        assert!(OpenAiConfig::default().with_api_key("  ").require_api_key().is_err());
        assert_eq!(
            OpenAiConfig::default().with_api_key("sk-test").require_api_key().ok(),
            Some("sk-test")
        );
    }

    #[test]
    fn debug_redacts_key() {
        let rendered = format!("{:?}", OpenAiConfig::default().with_api_key("sk-secret"));
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}

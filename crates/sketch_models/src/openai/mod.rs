//! OpenAI API integration.

mod config;
mod dto;
mod images;
mod vision;

pub use config::{
    DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_VISION_MODEL, IMAGE_COUNT, IMAGE_QUALITY,
    IMAGE_SIZE, MAX_DESCRIPTION_TOKENS, OpenAiConfig,
};
pub use dto::{
    ChatCompletionRequest, ChatCompletionRequestBuilder, ChatMessage, ChatMessageBuilder, ChatRole,
    ContentPart, GeneratedImageData, ImageGenerationRequest, ImageGenerationRequestBuilder,
    ImageGenerationResponse, ImageUrl,
};
pub use images::ImageGenerationClient;
pub use vision::{VisionClient, extract_description};

const PROVIDER: &str = "openai";

//! Model provider clients for Sketch Realizer.
//!
//! Two thin HTTP adapters over the OpenAI API:
//!
//! - [`VisionClient`] implements [`sketch_interface::Describer`] against the
//!   chat completions endpoint with an image content part.
//! - [`ImageGenerationClient`] implements [`sketch_interface::Synthesizer`]
//!   against the image generations endpoint.
//!
//! Each call is a single request with no retry and no timeout override.
//!
//! # Example
//!
//! ```no_run
//! use sketch_core::{EncodedImage, StyleChoice};
//! use sketch_interface::{Describer, Synthesizer};
//! use sketch_models::{ImageGenerationClient, OpenAiConfig, VisionClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = OpenAiConfig::default().with_api_key(std::env::var("OPENAI_API_KEY")?);
//! let vision = VisionClient::new(config.clone())?;
//! let images = ImageGenerationClient::new(config)?;
//!
//! let drawing = EncodedImage::from("/9j/4AAQSkZJRg...".to_string());
//! let description = vision.describe(&drawing).await?;
//! let image = images.synthesize(&description, StyleChoice::Ghibli).await?;
//! println!("{}", image.url());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod metrics;
mod openai;

pub use metrics::{ModelMetrics, classify_error};
pub use openai::{
    ChatCompletionRequest, ChatCompletionRequestBuilder, ChatMessage, ChatMessageBuilder, ChatRole,
    ContentPart, DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_VISION_MODEL, GeneratedImageData,
    IMAGE_COUNT, IMAGE_QUALITY, IMAGE_SIZE, ImageGenerationClient, ImageGenerationRequest,
    ImageGenerationRequestBuilder, ImageGenerationResponse, ImageUrl, MAX_DESCRIPTION_TOKENS,
    OpenAiConfig, VisionClient, extract_description,
};

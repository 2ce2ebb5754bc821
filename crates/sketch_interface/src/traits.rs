//! Backend traits.

use async_trait::async_trait;
use sketch_core::{Description, EncodedImage, GeneratedImageRef, StyleChoice};
use sketch_error::SketchResult;

/// A vision-language backend that describes an encoded drawing.
///
/// One call is one request: implementations must not retry.
#[async_trait]
pub trait Describer: Send + Sync {
    /// Describe the object positions in the image.
    async fn describe(&self, image: &EncodedImage) -> SketchResult<Description>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4-vision-preview").
    fn model_name(&self) -> &str;
}

/// An image-generation backend that renders a description in a style.
///
/// One call is one request: implementations must not retry.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Generate a single image and return where it is hosted.
    async fn synthesize(
        &self,
        description: &Description,
        style: StyleChoice,
    ) -> SketchResult<GeneratedImageRef>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "dall-e-3").
    fn model_name(&self) -> &str;
}

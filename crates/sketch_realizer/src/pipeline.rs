//! The realize pipeline: decode, encode, describe, synthesize.

use crate::RealizerConfig;
use sketch_core::{EncodedImage, RealizeOutcome, SourceImage, StyleChoice};
use sketch_error::{SketchError, SketchResult};
use sketch_interface::{Describer, Synthesizer};
use sketch_models::{ImageGenerationClient, VisionClient};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Runs one drawing through both model calls.
///
/// The backends are immutable and shared, so a single `Realizer` serves every
/// request.
#[derive(Clone)]
pub struct Realizer {
    describer: Arc<dyn Describer>,
    synthesizer: Arc<dyn Synthesizer>,
}

impl std::fmt::Debug for Realizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Realizer")
            .field("describer", &self.describer.model_name())
            .field("synthesizer", &self.synthesizer.model_name())
            .finish()
    }
}

impl Realizer {
    /// Creates a realizer over arbitrary backends.
    pub fn new(describer: Arc<dyn Describer>, synthesizer: Arc<dyn Synthesizer>) -> Self {
        Self {
            describer,
            synthesizer,
        }
    }

    /// Creates a realizer backed by the OpenAI clients.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no API key is configured.
    pub fn from_config(config: &RealizerConfig) -> SketchResult<Self> {
        let describer = VisionClient::new(config.openai.clone())?;
        let synthesizer = ImageGenerationClient::new(config.openai.clone())?;
        Ok(Self::new(Arc::new(describer), Arc::new(synthesizer)))
    }

    /// Realizes an uploaded drawing in the given style.
    ///
    /// Produces either both outputs or one error message. A failed
    /// description stops the run before any image is requested.
    #[instrument(skip(self, upload), fields(len = upload.len(), style = %style))]
    pub async fn realize(&self, upload: &[u8], style: StyleChoice) -> RealizeOutcome {
        match self.run(upload, style).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, "Realize failed");
                RealizeOutcome::Failed {
                    message: e.user_message(),
                }
            }
        }
    }

    async fn run(&self, upload: &[u8], style: StyleChoice) -> Result<RealizeOutcome, SketchError> {
        let source = SourceImage::from_bytes(upload)?;
        let encoded = EncodedImage::encode(&source)?;

        let description = self.describer.describe(&encoded).await?;
        info!(
            provider = self.describer.provider_name(),
            chars = description.as_str().len(),
            "Drawing described"
        );

        let image = self.synthesizer.synthesize(&description, style).await?;
        info!(
            provider = self.synthesizer.provider_name(),
            url = %image,
            "Image generated"
        );

        Ok(RealizeOutcome::Realized { description, image })
    }
}

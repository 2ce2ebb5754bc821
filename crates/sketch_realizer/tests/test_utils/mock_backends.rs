//! Mock describe and synthesize backends.

use async_trait::async_trait;
use sketch_core::{Description, EncodedImage, GeneratedImageRef, StyleChoice};
use sketch_error::{SketchError, SketchResult, SynthesisError, SynthesisErrorKind, VisionError, VisionErrorKind};
use sketch_interface::{Describer, Synthesizer};
use std::sync::{Arc, Mutex};

/// What a mock backend returns on every call.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return this text (description) or URL (image)
    Success(String),
    /// Fail with a non-success HTTP status
    Status(u16, String),
    /// Fail with a missing field (describer) or missing URL (synthesizer)
    Malformed,
}

/// Mock vision backend that records what it was asked.
pub struct MockDescriber {
    behavior: MockBehavior,
    calls: Arc<Mutex<Vec<EncodedImage>>>,
}

impl MockDescriber {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn succeeding(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Success(text.into()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("lock poisoned").len()
    }

    pub fn last_image(&self) -> Option<EncodedImage> {
        self.calls.lock().expect("lock poisoned").last().cloned()
    }
}

#[async_trait]
impl Describer for MockDescriber {
    async fn describe(&self, image: &EncodedImage) -> SketchResult<Description> {
        self.calls.lock().expect("lock poisoned").push(image.clone());
        match &self.behavior {
            MockBehavior::Success(text) => Ok(Description::new(text.clone())),
            MockBehavior::Status(status, body) => Err(SketchError::from(VisionError::new(
                VisionErrorKind::Status {
                    status: *status,
                    body: body.clone(),
                },
            ))),
            MockBehavior::Malformed => Err(VisionError::new(VisionErrorKind::MissingField(
                "choices".to_string(),
            ))
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-vision"
    }
}

/// Mock image backend that records what it was asked.
pub struct MockSynthesizer {
    behavior: MockBehavior,
    calls: Arc<Mutex<Vec<(Description, StyleChoice)>>>,
}

impl MockSynthesizer {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn succeeding(url: impl Into<String>) -> Self {
        Self::new(MockBehavior::Success(url.into()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("lock poisoned").len()
    }

    pub fn last_call(&self) -> Option<(Description, StyleChoice)> {
        self.calls.lock().expect("lock poisoned").last().cloned()
    }
}

#[async_trait]
impl Synthesizer for MockSynthesizer {
    async fn synthesize(
        &self,
        description: &Description,
        style: StyleChoice,
    ) -> SketchResult<GeneratedImageRef> {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push((description.clone(), style));
        match &self.behavior {
            MockBehavior::Success(url) => Ok(GeneratedImageRef::new(url.clone())),
            MockBehavior::Status(status, body) => Err(SynthesisError::new(
                SynthesisErrorKind::Status {
                    status: *status,
                    body: body.clone(),
                },
            )
            .into()),
            MockBehavior::Malformed => Err(SynthesisError::new(SynthesisErrorKind::MissingUrl).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-image"
    }
}

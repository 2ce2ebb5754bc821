//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, ImageError, ServerError, SynthesisError, VisionError};

/// Every error class the pipeline and its surfaces can raise.
///
/// # Examples
///
/// ```
/// use sketch_error::{ConfigError, SketchError};
///
/// let err: SketchError = ConfigError::new("Missing api key").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SketchErrorKind {
    /// Upload could not be decoded or re-encoded
    #[from(ImageError)]
    Image(ImageError),
    /// Description endpoint failure
    #[from(VisionError)]
    Vision(VisionError),
    /// Image-generation endpoint failure
    #[from(SynthesisError)]
    Synthesis(SynthesisError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Request payload could not be assembled
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Form server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Sketch Realizer error with kind discrimination.
///
/// # Examples
///
/// ```
/// use sketch_error::{SketchResult, SynthesisError, SynthesisErrorKind};
///
/// fn generate() -> SketchResult<String> {
///     Err(SynthesisError::new(SynthesisErrorKind::MissingUrl))?
/// }
///
/// let err = generate().unwrap_err();
/// assert_eq!(
///     err.user_message(),
///     "An error occurred during image generation. Please try again."
/// );
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Sketch Error: {}", _0)]
pub struct SketchError(Box<SketchErrorKind>);

impl SketchError {
    /// Create a new error from a kind.
    pub fn new(kind: SketchErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SketchErrorKind {
        &self.0
    }

    /// The message shown inline to the user, without source locations.
    pub fn user_message(&self) -> String {
        match self.kind() {
            SketchErrorKind::Image(e) => e.kind.to_string(),
            SketchErrorKind::Vision(e) => e.kind.to_string(),
            SketchErrorKind::Synthesis(e) => e.kind.to_string(),
            SketchErrorKind::Config(e) => e.message.clone(),
            SketchErrorKind::Builder(e) => e.kind().to_string(),
            SketchErrorKind::Server(e) => e.kind.to_string(),
        }
    }
}

// Generic From implementation for any type that converts to SketchErrorKind
impl<T> From<T> for SketchError
where
    T: Into<SketchErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Sketch Realizer operations.
pub type SketchResult<T> = std::result::Result<T, SketchError>;

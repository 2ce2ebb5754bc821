//! Errors from the image-generation endpoint.

/// Image-generation failure conditions.
///
/// Every variant is terminal for the request; a response without a URL is
/// reported the same way as a failed call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SynthesisErrorKind {
    /// Request never produced a response
    #[display("Image generation request failed: {}", _0)]
    Transport(String),

    /// Endpoint answered with a non-success status
    #[display("Image generation failed. Status Code: {} - Response: {}", status, body)]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Response body was not the expected JSON
    #[display("Failed to parse image generation response: {}", _0)]
    Parse(String),

    /// Response carried no image URL
    #[display("An error occurred during image generation. Please try again.")]
    MissingUrl,
}

/// Synthesis error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Synthesis Error: {} at line {} in {}", kind, line, file)]
pub struct SynthesisError {
    /// The specific error kind
    pub kind: SynthesisErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl SynthesisError {
    /// Create a new synthesis error.
    #[track_caller]
    pub fn new(kind: SynthesisErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

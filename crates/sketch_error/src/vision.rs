//! Errors from the vision-language description endpoint.

/// Description endpoint failure conditions.
///
/// The `Status` and `MissingField` messages are shown to the user verbatim,
/// so they carry the raw status code, response body and offending key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum VisionErrorKind {
    /// Request never produced a response
    #[display("Request failed: {}", _0)]
    Transport(String),

    /// Endpoint answered with anything other than 200
    #[display("Failed to get description. Status Code: {} - Response: {}", status, body)]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Response JSON lacks one of the nested fields leading to the text
    #[display(
        "KeyError: '{}' - the structure of the response JSON is not as expected.",
        _0
    )]
    MissingField(String),

    /// Response body could not be read as the expected JSON
    #[display("Failed to parse description response: {}", _0)]
    Parse(String),
}

/// Vision error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Vision Error: {} at line {} in {}", kind, line, file)]
pub struct VisionError {
    /// The specific error kind
    pub kind: VisionErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl VisionError {
    /// Create a new vision error.
    #[track_caller]
    pub fn new(kind: VisionErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

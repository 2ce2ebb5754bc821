//! Image decode and encode errors.

/// Ways an uploaded bitmap can fail to become an encoded image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ImageErrorKind {
    /// Upload is neither PNG nor JPEG
    #[display("Unsupported image format: {}", _0)]
    UnsupportedFormat(String),
    /// Upload bytes could not be decoded into a bitmap
    #[display("Failed to decode image: {}", _0)]
    Decode(String),
    /// Bitmap could not be serialized as JPEG
    #[display("Failed to encode image as JPEG: {}", _0)]
    Encode(String),
}

/// Image error with location tracking.
///
/// # Examples
///
/// ```
/// use sketch_error::{ImageError, ImageErrorKind};
///
/// let err = ImageError::new(ImageErrorKind::UnsupportedFormat("Gif".to_string()));
/// assert!(format!("{}", err).contains("Unsupported image format: Gif"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Error: {} at line {} in {}", kind, line, file)]
pub struct ImageError {
    /// The kind of error that occurred
    pub kind: ImageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ImageError {
    /// Create a new image error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

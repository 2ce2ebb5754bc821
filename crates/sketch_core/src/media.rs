//! Uploaded bitmaps and their transport encoding.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::{ColorType, DynamicImage, ImageFormat};
use sketch_error::{ImageError, ImageErrorKind};
use std::borrow::Cow;
use std::io::Cursor;
use tracing::{debug, instrument};

/// A decoded upload. Lives only for the duration of one request.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct SourceImage {
    /// Decoded bitmap
    image: DynamicImage,
    /// Container format the upload arrived in
    format: ImageFormat,
}

impl SourceImage {
    /// Decodes PNG or JPEG upload bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ImageErrorKind::UnsupportedFormat`] for any other container
    /// and [`ImageErrorKind::Decode`] when the bytes cannot be decoded.
    #[instrument(skip_all, fields(len = bytes.len()))]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ImageError> {
        let format = image::guess_format(bytes)
            .map_err(|e| ImageError::new(ImageErrorKind::Decode(e.to_string())))?;

        if !matches!(format, ImageFormat::Png | ImageFormat::Jpeg) {
            return Err(ImageError::new(ImageErrorKind::UnsupportedFormat(format!(
                "{:?}",
                format
            ))));
        }

        let image = image::load_from_memory_with_format(bytes, format)
            .map_err(|e| ImageError::new(ImageErrorKind::Decode(e.to_string())))?;

        debug!(
            width = image.width(),
            height = image.height(),
            ?format,
            "Decoded upload"
        );
        Ok(Self { image, format })
    }
}

/// Base64 text of a bitmap re-encoded as JPEG.
///
/// # Examples
///
/// ```
/// use sketch_core::EncodedImage;
///
/// let encoded = EncodedImage::from("/9j/4AAQ".to_string());
/// assert_eq!(encoded.data_uri(), "data:image/jpeg;base64,/9j/4AAQ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::From)]
pub struct EncodedImage(String);

impl EncodedImage {
    /// MIME type of the encoded bytes.
    pub const MIME: &'static str = "image/jpeg";

    /// Re-serializes the bitmap as JPEG with encoder defaults and base64-encodes it.
    ///
    /// No resizing or quality control is applied. Pixel layouts JPEG cannot
    /// carry (alpha channels, 16-bit samples) are converted to 8-bit RGB.
    ///
    /// # Errors
    ///
    /// Returns [`ImageErrorKind::Encode`] if the JPEG encoder rejects the bitmap.
    #[instrument(skip_all, fields(width = source.image().width(), height = source.image().height()))]
    pub fn encode(source: &SourceImage) -> Result<Self, ImageError> {
        let image = match source.image().color() {
            ColorType::L8 | ColorType::Rgb8 => Cow::Borrowed(source.image()),
            other => {
                debug!(color = ?other, "Converting to 8-bit RGB for JPEG");
                Cow::Owned(DynamicImage::ImageRgb8(source.image().to_rgb8()))
            }
        };

        let mut buffer = Cursor::new(Vec::new());
        image
            .write_to(&mut buffer, ImageFormat::Jpeg)
            .map_err(|e| ImageError::new(ImageErrorKind::Encode(e.to_string())))?;

        let bytes = buffer.into_inner();
        debug!(jpeg_bytes = bytes.len(), "Encoded image as JPEG");
        Ok(Self(STANDARD.encode(bytes)))
    }

    /// The base64 text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The image as a `data:` URI suitable for embedding in a request.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", Self::MIME, self.0)
    }
}

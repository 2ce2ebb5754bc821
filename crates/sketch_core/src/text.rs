//! Opaque text values passed between the two model calls.

use serde::{Deserialize, Serialize};

/// Free-text description returned by the vision endpoint.
///
/// Never inspected; forwarded verbatim into the synthesis prompt and the page.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    /// Wrap the text returned by the endpoint.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The description text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// URL of a generated image, valid only while the remote host serves it.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct GeneratedImageRef(String);

impl GeneratedImageRef {
    /// Wrap a URL returned by the image-generation endpoint.
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The image URL.
    pub fn url(&self) -> &str {
        &self.0
    }
}

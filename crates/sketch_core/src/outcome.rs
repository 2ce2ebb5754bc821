//! What a single pipeline run shows the user.

use crate::{Description, GeneratedImageRef};
use serde::Serialize;

/// Result of one realize request.
///
/// A run either yields both a description and a generated image, or exactly
/// one error message; there is no partial outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RealizeOutcome {
    /// Both model calls succeeded.
    Realized {
        /// Text returned by the vision endpoint
        description: Description,
        /// URL returned by the image-generation endpoint
        image: GeneratedImageRef,
    },
    /// Some step failed; nothing else is shown.
    Failed {
        /// Inline message for the user
        message: String,
    },
}

impl RealizeOutcome {
    /// Whether both outputs are available.
    pub fn is_realized(&self) -> bool {
        matches!(self, RealizeOutcome::Realized { .. })
    }
}

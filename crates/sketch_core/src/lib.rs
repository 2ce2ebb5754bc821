//! Core data types for Sketch Realizer.
//!
//! This crate holds the data model shared by the clients and the pipeline:
//! the uploaded bitmap and its transport encoding, the style vocabulary,
//! the opaque description and generated-image reference, and the two fixed
//! prompts sent to the model endpoints.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod media;
mod outcome;
mod prompt;
mod style;
mod text;

pub use media::{EncodedImage, SourceImage};
pub use outcome::RealizeOutcome;
pub use prompt::{DESCRIBE_INSTRUCTION, synthesis_prompt};
pub use style::StyleChoice;
pub use text::{Description, GeneratedImageRef};

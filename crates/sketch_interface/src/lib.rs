//! Trait definitions for the two model backends of the pipeline.
//!
//! The pipeline talks to a [`Describer`] (drawing to text) and a
//! [`Synthesizer`] (text and style to image). Concrete HTTP clients live in
//! `sketch_models`; tests substitute in-memory doubles.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{Describer, Synthesizer};

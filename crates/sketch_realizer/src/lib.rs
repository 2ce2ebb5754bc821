//! Kid Sketch Realizer.
//!
//! Upload a child's drawing, get back a description of what is on the page
//! and a photo-like rendering of it in one of five styles.
//!
//! A request runs three steps in order: the upload is decoded and re-encoded
//! as base64 JPEG, a vision model describes the drawing, and an
//! image-generation model renders the description in the chosen style.
//! Either both results are shown or exactly one error message is.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sketch_core::StyleChoice;
//! use sketch_realizer::{RealizerConfig, Realizer};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RealizerConfig::load()?;
//! let realizer = Realizer::from_config(&config)?;
//!
//! let bytes = std::fs::read("drawing.png")?;
//! let outcome = realizer.realize(&bytes, StyleChoice::Ghibli).await;
//! println!("{}", serde_json::to_string_pretty(&outcome)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `sketch_error` - Error types
//! - `sketch_core` - Data model, image encoding, prompts
//! - `sketch_interface` - `Describer` and `Synthesizer` traits
//! - `sketch_models` - OpenAI clients
//! - `sketch_realizer` - Configuration, pipeline, form server, CLI

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod observability;
mod pipeline;
mod server;

pub use config::{RealizerConfig, ServerSettings};
pub use observability::{
    ObservabilityConfig, init_observability_with_config, shutdown_observability,
};
pub use pipeline::Realizer;
pub use server::{AppState, PageView, Pages, create_router, serve};

//! Error types for Sketch Realizer.
//!
//! This crate provides the error types used throughout the Sketch Realizer workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The four request-terminal classes are image failures ([`ImageError`]),
//! description endpoint failures ([`VisionError`]), synthesis failures
//! ([`SynthesisError`]) and configuration problems ([`ConfigError`]).
//!
//! # Examples
//!
//! ```
//! use sketch_error::{SketchResult, VisionError, VisionErrorKind};
//!
//! fn describe() -> SketchResult<String> {
//!     Err(VisionError::new(VisionErrorKind::Status {
//!         status: 500,
//!         body: "server error".to_string(),
//!     }))?
//! }
//!
//! match describe() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e.user_message()),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod image;
mod server;
mod synthesis;
mod vision;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{SketchError, SketchErrorKind, SketchResult};
pub use image::{ImageError, ImageErrorKind};
pub use server::{ServerError, ServerErrorKind};
pub use synthesis::{SynthesisError, SynthesisErrorKind};
pub use vision::{VisionError, VisionErrorKind};

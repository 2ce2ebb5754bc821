//! Test utilities for Sketch Realizer tests.
//!
//! Mock backends and drawing fixtures.

#![allow(dead_code)]

pub mod mock_backends;

#[allow(unused_imports)]
pub use mock_backends::{MockBehavior, MockDescriber, MockSynthesizer};

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;

/// A small crayon-like drawing as PNG bytes, with an alpha channel.
pub fn drawing_png() -> Vec<u8> {
    let mut img = RgbaImage::from_pixel(32, 24, Rgba([255, 255, 255, 0]));
    for x in 8..24 {
        for y in 8..16 {
            img.put_pixel(x, y, Rgba([220, 30, 30, 255]));
        }
    }
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png)
        .expect("Failed to encode PNG fixture");
    bytes.into_inner()
}

/// A flat drawing as JPEG bytes.
pub fn drawing_jpeg() -> Vec<u8> {
    let img = RgbImage::from_pixel(16, 16, Rgb([30, 120, 220]));
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Jpeg)
        .expect("Failed to encode JPEG fixture");
    bytes.into_inner()
}

//! Shared test utilities for the screenstitch test suite.
//!
//! Synthetic-image constructors used by the scan, stitch, write, and run
//! tests. Solid single-color images make composition results easy to assert
//! pixel-by-pixel.

use image::{Rgb, RgbImage};
use std::path::Path;

/// A solid single-color RGB image.
pub fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

/// Write a solid-color PNG named `name` into `dir`.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 3]) {
    solid(width, height, color).save(dir.join(name)).unwrap();
}

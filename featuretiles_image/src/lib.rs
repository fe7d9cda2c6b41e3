//! RGBA tile images: allocation, colors, drawing primitives and encoding.

pub mod color;
pub mod draw;
mod format;
mod traits;

pub use color::Color;
pub use format::*;
pub use traits::*;

use anyhow::{Result, ensure};
use featuretiles_derive::context;
use image::RgbaImage;

/// Allocates a fully transparent square tile image.
#[context("Failed to allocate a {size}x{size} tile image")]
pub fn new_tile_image(size: u32) -> Result<RgbaImage> {
	ensure!(size > 0, "tile size must be positive");
	ensure!(size <= 8192, "tile size must not exceed 8192");
	Ok(RgbaImage::new(size, size))
}

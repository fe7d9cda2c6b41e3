//! Encoders for finished tiles.

pub mod png;
pub mod webp;

use anyhow::{Result, bail};
use image::RgbaImage;
use std::{fmt::Display, path::Path, str::FromStr};

/// Output format of an encoded tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TileImageFormat {
	#[default]
	Png,
	Webp,
}

impl TileImageFormat {
	/// Derives the format from a file extension, defaulting to PNG when there is none.
	pub fn from_path(path: &Path) -> Result<TileImageFormat> {
		match path.extension().and_then(|e| e.to_str()) {
			None => Ok(TileImageFormat::Png),
			Some(extension) => extension.parse(),
		}
	}

	#[must_use]
	pub fn extension(&self) -> &'static str {
		match self {
			TileImageFormat::Png => "png",
			TileImageFormat::Webp => "webp",
		}
	}

	pub fn encode(&self, image: &RgbaImage) -> Result<Vec<u8>> {
		match self {
			TileImageFormat::Png => png::encode(image),
			TileImageFormat::Webp => webp::encode(image),
		}
	}

	pub fn decode(&self, bytes: &[u8]) -> Result<RgbaImage> {
		match self {
			TileImageFormat::Png => png::decode(bytes),
			TileImageFormat::Webp => webp::decode(bytes),
		}
	}
}

impl FromStr for TileImageFormat {
	type Err = anyhow::Error;

	fn from_str(input: &str) -> Result<Self> {
		Ok(match input.trim().to_lowercase().as_str() {
			"png" => TileImageFormat::Png,
			"webp" => TileImageFormat::Webp,
			other => bail!("unsupported image format '{other}', expected 'png' or 'webp'"),
		})
	}
}

impl Display for TileImageFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.extension())
	}
}

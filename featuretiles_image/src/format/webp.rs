use anyhow::{Result, anyhow};
use image::{ExtendedColorType, ImageEncoder, ImageFormat, RgbaImage, codecs::webp::WebPEncoder, load_from_memory_with_format};

/// Encodes losslessly; the `image` crate has no lossy WebP encoder.
pub fn encode(image: &RgbaImage) -> Result<Vec<u8>> {
	let mut buffer: Vec<u8> = Vec::new();
	WebPEncoder::new_lossless(&mut buffer).write_image(
		image.as_raw(),
		image.width(),
		image.height(),
		ExtendedColorType::Rgba8,
	)?;
	Ok(buffer)
}

pub fn decode(bytes: &[u8]) -> Result<RgbaImage> {
	load_from_memory_with_format(bytes, ImageFormat::WebP)
		.map(|image| image.to_rgba8())
		.map_err(|e| anyhow!("Failed to decode WebP image: {e}"))
}

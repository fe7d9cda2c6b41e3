use anyhow::{Result, anyhow};
use image::{
	ExtendedColorType, ImageEncoder, ImageFormat, RgbaImage,
	codecs::png::{CompressionType, FilterType, PngEncoder},
	load_from_memory_with_format,
};

pub fn encode(image: &RgbaImage) -> Result<Vec<u8>> {
	let mut buffer: Vec<u8> = Vec::new();
	PngEncoder::new_with_quality(&mut buffer, CompressionType::Default, FilterType::Adaptive).write_image(
		image.as_raw(),
		image.width(),
		image.height(),
		ExtendedColorType::Rgba8,
	)?;
	Ok(buffer)
}

pub fn decode(bytes: &[u8]) -> Result<RgbaImage> {
	load_from_memory_with_format(bytes, ImageFormat::Png)
		.map(|image| image.to_rgba8())
		.map_err(|e| anyhow!("Failed to decode PNG image: {e}"))
}

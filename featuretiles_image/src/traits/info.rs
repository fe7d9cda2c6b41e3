//! Alpha inspection for rendered tiles.

use image::RgbaImage;

/// Queries about the coverage of an RGBA tile.
pub trait TileImageInfo {
	/// Returns `true` when every pixel is fully transparent.
	fn is_blank(&self) -> bool;

	/// Returns `true` when every pixel is fully opaque.
	fn is_opaque(&self) -> bool;

	/// Number of pixels with a non-zero alpha value.
	fn painted_pixels(&self) -> usize;
}

impl TileImageInfo for RgbaImage {
	fn is_blank(&self) -> bool {
		self.pixels().all(|p| p.0[3] == 0)
	}

	fn is_opaque(&self) -> bool {
		self.pixels().all(|p| p.0[3] == 255)
	}

	fn painted_pixels(&self) -> usize {
		self.pixels().filter(|p| p.0[3] != 0).count()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use image::Rgba;
	use rstest::rstest;

	fn sample(alpha: u8) -> RgbaImage {
		RgbaImage::from_fn(4, 3, |x, y| Rgba([x as u8, y as u8, (x + y) as u8, alpha]))
	}

	#[rstest]
	#[case::blank(sample(0), true, false, 0)]
	#[case::partial(sample(100), false, false, 12)]
	#[case::opaque(sample(255), false, true, 12)]
	fn coverage(#[case] img: RgbaImage, #[case] blank: bool, #[case] opaque: bool, #[case] painted: usize) {
		assert_eq!(img.is_blank(), blank);
		assert_eq!(img.is_opaque(), opaque);
		assert_eq!(img.painted_pixels(), painted);
	}

	#[test]
	fn single_pixel() {
		let mut img = sample(0);
		img.put_pixel(1, 1, Rgba([0, 0, 0, 1]));
		assert!(!img.is_blank());
		assert_eq!(img.painted_pixels(), 1);
	}
}

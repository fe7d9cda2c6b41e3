//! Rasterization primitives in pixel space.
//!
//! Coordinates are floating point pixels with the origin in the top left corner.
//! Polygon fills blend with the existing pixels; strokes and point markers are drawn
//! through `imageproc` and overwrite them.

use crate::Color;
use image::{Rgba, RgbaImage};
use imageproc::{
	drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_polygon_mut},
	point::Point,
};

/// Fills the area enclosed by `rings` using the even-odd rule, so inner rings cut holes.
///
/// Rings are treated as closed whether or not the last vertex repeats the first.
pub fn fill_polygon(image: &mut RgbaImage, rings: &[Vec<(f64, f64)>], color: Color) {
	if color.is_transparent() {
		return;
	}
	let edges: Vec<((f64, f64), (f64, f64))> = rings
		.iter()
		.filter(|ring| ring.len() >= 3)
		.flat_map(|ring| ring.iter().copied().zip(ring.iter().copied().cycle().skip(1)))
		.filter(|(a, b)| a.1 != b.1)
		.collect();
	if edges.is_empty() {
		return;
	}

	let y_min = edges.iter().map(|(a, b)| a.1.min(b.1)).fold(f64::INFINITY, f64::min);
	let y_max = edges.iter().map(|(a, b)| a.1.max(b.1)).fold(f64::NEG_INFINITY, f64::max);
	let height = f64::from(image.height());
	let width = f64::from(image.width());
	let row_start = y_min.floor().clamp(0.0, height) as u32;
	let row_end = y_max.ceil().clamp(0.0, height) as u32;

	let mut crossings: Vec<f64> = Vec::new();
	for row in row_start..row_end {
		let y = f64::from(row) + 0.5;
		crossings.clear();
		for &((x0, y0), (x1, y1)) in &edges {
			if (y0 <= y && y < y1) || (y1 <= y && y < y0) {
				crossings.push(x0 + (y - y0) / (y1 - y0) * (x1 - x0));
			}
		}
		crossings.sort_by(f64::total_cmp);
		for span in crossings.chunks_exact(2) {
			let col_start = (span[0] - 0.5).ceil().clamp(0.0, width) as u32;
			let col_end = ((span[1] - 0.5).ceil()).clamp(0.0, width) as u32;
			for col in col_start..col_end {
				blend(image.get_pixel_mut(col, row), color.rgba());
			}
		}
	}
}

/// Strokes the polyline `points` with the given width in pixels and round joins.
pub fn stroke_line(image: &mut RgbaImage, points: &[(f64, f64)], width: f32, color: Color) {
	if color.is_transparent() || points.len() < 2 {
		return;
	}
	if width <= 1.0 {
		for pair in points.windows(2) {
			draw_line_segment_mut(image, to_f32(pair[0]), to_f32(pair[1]), color.rgba());
		}
		return;
	}

	let half = f64::from(width) / 2.0;
	for pair in points.windows(2) {
		let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
		let length = (x1 - x0).hypot(y1 - y0);
		if length < f64::EPSILON {
			continue;
		}
		let (nx, ny) = (-(y1 - y0) / length * half, (x1 - x0) / length * half);
		let quad = [
			to_point(x0 + nx, y0 + ny),
			to_point(x1 + nx, y1 + ny),
			to_point(x1 - nx, y1 - ny),
			to_point(x0 - nx, y0 - ny),
		];
		if quad[0] != quad[3] && quad[1] != quad[2] {
			draw_polygon_mut(image, &quad, color.rgba());
		}
	}
	let radius = (half.round() as i32).max(1) - 1;
	for &point in points {
		draw_point(image, point, radius, color);
	}
}

/// Draws a filled disc. A radius of zero sets a single pixel.
pub fn draw_point(image: &mut RgbaImage, center: (f64, f64), radius: i32, color: Color) {
	if color.is_transparent() || !center.0.is_finite() || !center.1.is_finite() {
		return;
	}
	let center = (center.0.floor() as i32, center.1.floor() as i32);
	draw_filled_circle_mut(image, center, radius.max(0), color.rgba());
}

/// Source-over compositing in integer math. An opaque destination stays opaque.
fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>) {
	let sa = u32::from(src[3]);
	match sa {
		0 => return,
		255 => {
			*dst = src;
			return;
		}
		_ => {}
	}
	let da = u32::from(dst[3]);
	// all terms scaled by 255 * 255
	let src_weight = sa * 255;
	let dst_weight = da * (255 - sa);
	let total = src_weight + dst_weight;
	for i in 0..3 {
		let value = u32::from(src[i]) * src_weight + u32::from(dst[i]) * dst_weight;
		dst[i] = ((value + total / 2) / total) as u8;
	}
	dst[3] = ((total + 127) / 255) as u8;
}

fn to_f32(point: (f64, f64)) -> (f32, f32) {
	(point.0 as f32, point.1 as f32)
}

fn to_point(x: f64, y: f64) -> Point<i32> {
	Point::new(x.round() as i32, y.round() as i32)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{TileImageInfo, new_tile_image};

	fn red() -> Color {
		Color::new(255, 0, 0, 255)
	}

	#[test]
	fn fill_square() {
		let mut image = new_tile_image(10).unwrap();
		fill_polygon(&mut image, &[vec![(2.0, 2.0), (6.0, 2.0), (6.0, 6.0), (2.0, 6.0)]], red());
		assert_eq!(image.painted_pixels(), 16);
		assert_eq!(image.get_pixel(2, 2).0, [255, 0, 0, 255]);
		assert_eq!(image.get_pixel(6, 6).0[3], 0);
	}

	#[test]
	fn fill_with_hole() {
		let mut image = new_tile_image(10).unwrap();
		let outer = vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)];
		let hole = vec![(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)];
		fill_polygon(&mut image, &[outer, hole], red());
		assert_eq!(image.painted_pixels(), 96);
		assert_eq!(image.get_pixel(5, 5).0[3], 0);
	}

	#[test]
	fn fill_clips_to_image() {
		let mut image = new_tile_image(8).unwrap();
		fill_polygon(&mut image, &[vec![(-100.0, -100.0), (100.0, -100.0), (100.0, 100.0), (-100.0, 100.0)]], red());
		assert!(image.is_opaque());
	}

	#[test]
	fn fill_blends_translucent_color() {
		let mut image = new_tile_image(4).unwrap();
		let square = vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
		fill_polygon(&mut image, &[square.clone()], Color::WHITE);
		fill_polygon(&mut image, &[square], Color::new(0, 0, 0, 128));
		let pixel = image.get_pixel(1, 1).0;
		assert_eq!(pixel, [127, 127, 127, 255]);
	}

	#[test]
	fn fill_blends_onto_transparent_and_translucent() {
		let mut image = new_tile_image(4).unwrap();
		let square = vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
		fill_polygon(&mut image, &[square.clone()], Color::new(200, 100, 0, 128));
		assert_eq!(image.get_pixel(0, 0).0, [200, 100, 0, 128]);

		fill_polygon(&mut image, &[square], Color::new(0, 0, 200, 128));
		let pixel = image.get_pixel(0, 0).0;
		assert_eq!(pixel[3], 192);
		assert!(pixel[2] > pixel[0] && pixel[0] > 0);
	}

	#[test]
	fn stroke_thin_and_thick() {
		let mut thin = new_tile_image(16).unwrap();
		stroke_line(&mut thin, &[(0.0, 8.0), (15.0, 8.0)], 1.0, red());
		assert_eq!(thin.painted_pixels(), 16);

		let mut thick = new_tile_image(16).unwrap();
		stroke_line(&mut thick, &[(2.0, 8.0), (13.0, 8.0)], 4.0, red());
		assert!(thick.painted_pixels() > thin.painted_pixels());
		assert_eq!(thick.get_pixel(7, 7).0, [255, 0, 0, 255]);
		assert_eq!(thick.get_pixel(7, 1).0[3], 0);
	}

	#[test]
	fn stroke_needs_two_points() {
		let mut image = new_tile_image(8).unwrap();
		stroke_line(&mut image, &[(1.0, 1.0)], 3.0, red());
		assert!(image.is_blank());
	}

	#[test]
	fn points() {
		let mut image = new_tile_image(16).unwrap();
		draw_point(&mut image, (3.5, 3.5), 0, red());
		assert_eq!(image.painted_pixels(), 1);
		draw_point(&mut image, (10.0, 10.0), 2, red());
		assert!(image.painted_pixels() > 5);
		draw_point(&mut image, (f64::NAN, 1.0), 2, red());
	}

	#[test]
	fn transparent_color_draws_nothing() {
		let mut image = new_tile_image(8).unwrap();
		let transparent = Color::new(255, 255, 255, 0);
		fill_polygon(&mut image, &[vec![(0.0, 0.0), (8.0, 0.0), (8.0, 8.0)]], transparent);
		stroke_line(&mut image, &[(0.0, 0.0), (8.0, 8.0)], 3.0, transparent);
		draw_point(&mut image, (4.0, 4.0), 2, transparent);
		assert!(image.is_blank());
	}
}

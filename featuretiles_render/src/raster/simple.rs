use crate::{Feature, FeatureProfile, FeatureRenderer, Style};
use anyhow::{Context, Result};
use featuretiles_core::{GeoExtent, SpatialReference};
use featuretiles_geometry::{Coordinates, Geometry};
use featuretiles_image::{
	Color,
	draw::{draw_point, fill_polygon, stroke_line},
};
use image::RgbaImage;

/// Counters collected while rendering one tile.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RasterStats {
	pub batches: usize,
	pub features: usize,
	/// Features dropped because their coordinates could not be transformed.
	pub skipped: usize,
	/// Reference the feature coordinates are expressed in.
	pub source_srs: Option<SpatialReference>,
}

/// Draws features with the point, line and polygon symbols of their style.
///
/// Features rendered with an empty style use [`Style::fallback`]. A symbol the style
/// does not define is not drawn, except that polygons without a polygon symbol are
/// outlined with the line symbol.
#[derive(Clone, Debug, Default)]
pub struct SimpleRasterizer {
	background: Option<Color>,
}

impl SimpleRasterizer {
	#[must_use]
	pub fn new() -> SimpleRasterizer {
		SimpleRasterizer::default()
	}

	/// Fills every tile with `color` before drawing.
	#[must_use]
	pub fn with_background(color: Color) -> SimpleRasterizer {
		SimpleRasterizer {
			background: Some(color),
		}
	}
}

impl FeatureRenderer for SimpleRasterizer {
	type BuildData = RasterStats;

	fn create_build_data(&self, profile: &FeatureProfile) -> RasterStats {
		RasterStats {
			source_srs: Some(profile.srs().clone()),
			..RasterStats::default()
		}
	}

	fn pre_process(&self, image: &mut RgbaImage, _build_data: &mut RasterStats) {
		if let Some(color) = self.background {
			for pixel in image.pixels_mut() {
				*pixel = color.rgba();
			}
		}
	}

	fn post_process(&self, _image: &mut RgbaImage, build_data: &mut RasterStats) {
		log::trace!(
			"rasterized {} feature(s) in {} batch(es), skipped {}",
			build_data.features,
			build_data.batches,
			build_data.skipped
		);
	}

	fn render_features_for_style(
		&self,
		style: &Style,
		features: &[Feature],
		build_data: &mut RasterStats,
		tile_extent: &GeoExtent,
		image: &mut RgbaImage,
	) -> Result<()> {
		let bounds = tile_extent.bounds().context("cannot render into an invalid tile extent")?;
		let fallback;
		let style = if style.is_empty() {
			fallback = Style::fallback();
			&fallback
		} else {
			style
		};

		let tile_srs = tile_extent.srs();
		let source_srs = build_data.source_srs.clone().unwrap_or_else(|| tile_srs.clone());
		let scale_x = f64::from(image.width()) / bounds.width();
		let scale_y = f64::from(image.height()) / bounds.height();

		build_data.batches += 1;
		for feature in features {
			let Some(geometry) = &feature.geometry else {
				continue;
			};
			let pixels = geometry.try_map_coords(&mut |c: &Coordinates| {
				let (x, y) = source_srs.transform_point(c.x(), c.y(), tile_srs)?;
				Some(Coordinates::new(
					(x - bounds.x_min) * scale_x,
					(bounds.y_max - y) * scale_y,
				))
			});
			match pixels {
				Some(pixels) => {
					draw_geometry(image, &pixels, style);
					build_data.features += 1;
				}
				None => {
					log::debug!("feature {}: cannot transform from {source_srs} to {tile_srs}", feature.id);
					build_data.skipped += 1;
				}
			}
		}
		Ok(())
	}
}

fn to_pixels(coords: &[Coordinates]) -> Vec<(f64, f64)> {
	coords.iter().map(|c| (c.x(), c.y())).collect()
}

fn draw_geometry(image: &mut RgbaImage, geometry: &Geometry, style: &Style) {
	match geometry {
		Geometry::PointSet(points) => {
			if let Some(symbol) = &style.point {
				let radius = symbol.size.round() as i32;
				for p in points.points() {
					draw_point(image, (p.x(), p.y()), radius, symbol.color);
				}
			}
		}
		Geometry::LineString(line) => {
			if let Some(symbol) = &style.line {
				stroke_line(image, &to_pixels(line.points()), symbol.width, symbol.color);
			}
		}
		Geometry::Polygon(polygon) => {
			let outline = match &style.polygon {
				Some(symbol) => {
					let rings: Vec<Vec<(f64, f64)>> = polygon.rings().iter().map(|r| to_pixels(r.points())).collect();
					fill_polygon(image, &rings, symbol.fill);
					symbol.stroke.as_ref()
				}
				None => style.line.as_ref(),
			};
			if let Some(symbol) = outline {
				for ring in polygon.rings() {
					stroke_line(image, &to_pixels(&ring.closed_points()), symbol.width, symbol.color);
				}
			}
		}
		Geometry::Multi(multi) => {
			for component in multi.components() {
				draw_geometry(image, component, style);
			}
		}
	}
}

//! Renderers and feature sets shared by the unit tests.

use crate::{Feature, FeatureProfile, FeatureRenderer, MemoryFeatureSource, Style};
use anyhow::{Result, bail};
use featuretiles_core::{GeoExtent, SpatialReference};
use featuretiles_geometry::Geometry;
use image::RgbaImage;
use std::sync::Mutex;

/// One call of `render_features_for_style`.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderCall {
	pub style: String,
	pub ids: Vec<u64>,
	pub tile_extent: GeoExtent,
}

/// Records every step instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
	pub calls: Mutex<Vec<RenderCall>>,
	pub steps: Mutex<Vec<String>>,
	/// Fail every batch rendered with this style.
	pub fail_style: Option<String>,
}

impl RecordingRenderer {
	pub fn failing(style: &str) -> RecordingRenderer {
		RecordingRenderer {
			fail_style: Some(style.to_string()),
			..RecordingRenderer::default()
		}
	}

	pub fn calls(&self) -> Vec<RenderCall> {
		self.calls.lock().unwrap().clone()
	}

	pub fn styles(&self) -> Vec<String> {
		self.calls().into_iter().map(|c| c.style).collect()
	}

	pub fn steps(&self) -> Vec<String> {
		self.steps.lock().unwrap().clone()
	}
}

impl FeatureRenderer for RecordingRenderer {
	/// Number of batches seen in the current tile.
	type BuildData = usize;

	fn create_build_data(&self, profile: &FeatureProfile) -> usize {
		self.steps.lock().unwrap().push(format!("build {}", profile.srs()));
		0
	}

	fn pre_process(&self, _image: &mut RgbaImage, _build_data: &mut usize) {
		self.steps.lock().unwrap().push("pre".to_string());
	}

	fn post_process(&self, _image: &mut RgbaImage, build_data: &mut usize) {
		self.steps.lock().unwrap().push(format!("post {build_data}"));
	}

	fn render_features_for_style(
		&self,
		style: &Style,
		features: &[Feature],
		build_data: &mut usize,
		tile_extent: &GeoExtent,
		_image: &mut RgbaImage,
	) -> Result<()> {
		*build_data += 1;
		self.calls.lock().unwrap().push(RenderCall {
			style: style.name.clone(),
			ids: features.iter().map(|f| f.id).collect(),
			tile_extent: tile_extent.clone(),
		});
		if self.fail_style.as_deref() == Some(style.name.as_str()) {
			bail!("cannot draw style '{}'", style.name);
		}
		Ok(())
	}
}

/// Four features in the western hemisphere: two roads, a town and a lake.
pub fn sample_features() -> Vec<Feature> {
	vec![
		Feature::new(1, Geometry::new_line_string(vec![[-60.0, 10.0], [-50.0, 20.0]])).with_property("kind", "road"),
		Feature::new(2, Geometry::new_point_set(vec![[-40.0, 30.0]])).with_property("kind", "town"),
		Feature::new(
			3,
			Geometry::new_polygon(vec![vec![[-30.0, 0.0], [-20.0, 0.0], [-20.0, 10.0], [-30.0, 0.0]]]),
		)
		.with_property("kind", "lake"),
		Feature::new(4, Geometry::new_line_string(vec![[-10.0, -10.0], [-5.0, -5.0], [-1.0, -10.0]]))
			.with_property("kind", "road"),
	]
}

pub fn sample_source() -> MemoryFeatureSource {
	MemoryFeatureSource::new(SpatialReference::Geographic, sample_features())
}

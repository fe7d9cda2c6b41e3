use crate::{Feature, FeatureProfile, Style};
use anyhow::Result;
use featuretiles_core::GeoExtent;
use image::RgbaImage;

/// The drawing strategy plugged into a [`FeatureTileSource`](crate::FeatureTileSource).
///
/// For every tile the source creates fresh build data, calls
/// [`pre_process`](Self::pre_process) once, [`render_features_for_style`](Self::render_features_for_style)
/// once per batch and [`post_process`](Self::post_process) once. Build data lives for
/// that one tile only and is never shared between tiles.
pub trait FeatureRenderer: Send + Sync {
	/// Per-tile state threaded through all render steps.
	type BuildData: Default;

	fn create_build_data(&self, _profile: &FeatureProfile) -> Self::BuildData {
		Self::BuildData::default()
	}

	fn pre_process(&self, _image: &mut RgbaImage, _build_data: &mut Self::BuildData) {}

	fn post_process(&self, _image: &mut RgbaImage, _build_data: &mut Self::BuildData) {}

	/// Draws one batch of features with `style` into `image`.
	///
	/// `tile_extent` is the extent of the whole tile in the tile's reference; the
	/// feature coordinates are in the reference of the feature profile.
	fn render_features_for_style(
		&self,
		style: &Style,
		features: &[Feature],
		build_data: &mut Self::BuildData,
		tile_extent: &GeoExtent,
		image: &mut RgbaImage,
	) -> Result<()>;
}

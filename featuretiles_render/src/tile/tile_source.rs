use crate::{
	Feature, FeatureRenderer, FeatureSource, FeatureSourceFactory, FeatureTileSourceOptions, Query,
	RenderFailurePolicy, SourceOptions, Style, StylePolicy, coerce_feature, collect_features, features,
};
use anyhow::{Context, Result};
use featuretiles_core::{GeoExtent, TileKey, TileProfile, progress::ProgressCallback};
use featuretiles_image::new_tile_image;
use image::RgbaImage;
use std::path::Path;

/// Renders tiles from a feature source with a pluggable [`FeatureRenderer`].
///
/// Rendering one tile is a single synchronous pass. The source holds no per-tile
/// state, so different tiles may be rendered concurrently through a shared reference.
pub struct FeatureTileSource<R: FeatureRenderer> {
	options: FeatureTileSourceOptions,
	features: Option<Box<dyn FeatureSource>>,
	profile: Option<TileProfile>,
	renderer: R,
}

impl<R: FeatureRenderer> FeatureTileSource<R> {
	/// Creates a tile source, building the feature source with the default factory.
	pub fn new(options: impl Into<SourceOptions>, renderer: R) -> Result<FeatureTileSource<R>> {
		FeatureTileSource::new_with_factory(options, renderer, &FeatureSourceFactory::new_default())
	}

	/// Creates a tile source, building the feature source with `factory`.
	///
	/// A feature source that cannot be created is logged and left out; such a
	/// tile source renders no images.
	pub fn new_with_factory(
		options: impl Into<SourceOptions>,
		renderer: R,
		factory: &FeatureSourceFactory,
	) -> Result<FeatureTileSource<R>> {
		let options = FeatureTileSourceOptions::resolve(options.into())?;
		let features = match &options.features {
			Some(feature_options) => match factory.create(feature_options) {
				Ok(source) => Some(source),
				Err(e) => {
					log::warn!("cannot create feature source: {e:#}");
					None
				}
			},
			None => {
				log::warn!("no feature source configured");
				None
			}
		};
		Ok(FeatureTileSource {
			options,
			features,
			profile: None,
			renderer,
		})
	}

	/// Replaces the feature source.
	#[must_use]
	pub fn with_feature_source(mut self, features: Box<dyn FeatureSource>) -> FeatureTileSource<R> {
		self.features = Some(features);
		self
	}

	/// Adopts `override_profile`, else the global geodetic profile, and initializes the
	/// feature source with `reference_uri`.
	pub fn initialize(&mut self, reference_uri: Option<&Path>, override_profile: Option<TileProfile>) -> Result<()> {
		self.profile = Some(override_profile.unwrap_or_default());
		if let Some(features) = self.features.as_mut() {
			features.initialize(reference_uri).context("Failed to initialize feature source")?;
		}
		Ok(())
	}

	#[must_use]
	pub fn options(&self) -> &FeatureTileSourceOptions {
		&self.options
	}

	/// The tile profile, once initialized.
	#[must_use]
	pub fn profile(&self) -> Option<TileProfile> {
		self.profile
	}

	#[must_use]
	pub fn feature_source(&self) -> Option<&dyn FeatureSource> {
		self.features.as_deref()
	}

	#[must_use]
	pub fn renderer(&self) -> &R {
		&self.renderer
	}

	#[must_use]
	pub fn pixels_per_tile(&self) -> u32 {
		self.options.tile_size
	}

	/// The style policy tiles are rendered with, or `None` without a feature source.
	#[must_use]
	pub fn style_policy(&self) -> Option<StylePolicy> {
		let features = self.features.as_ref()?;
		Some(StylePolicy::select(
			features.has_embedded_styles(),
			self.options.styles.as_ref(),
		))
	}

	/// Renders the tile `key`.
	///
	/// Returns `Ok(None)` when there is nothing to render from: no feature source or no
	/// feature profile. Tiles outside the coverage of the features come back as a fully
	/// transparent image. An error is only returned if the image cannot be allocated or
	/// a render step fails under [`RenderFailurePolicy::Abort`].
	pub fn create_image(&self, key: &TileKey, progress: Option<&dyn ProgressCallback>) -> Result<Option<RgbaImage>> {
		let Some(source) = self.features.as_deref() else {
			log::warn!("tile {key}: no feature source");
			return Ok(None);
		};
		let Some(feature_profile) = source.feature_profile() else {
			log::debug!("tile {key}: feature source has no profile");
			return Ok(None);
		};

		let mut pass = RenderPass {
			tile_source: self,
			features: source,
			build_data: self.renderer.create_build_data(feature_profile),
			tile_extent: key.geo_extent(),
			image: new_tile_image(self.options.tile_size)?,
			progress,
		};

		self.renderer.pre_process(&mut pass.image, &mut pass.build_data);

		match StylePolicy::select(source.has_embedded_styles(), self.options.styles.as_ref()) {
			StylePolicy::Embedded => pass.render_embedded()?,
			StylePolicy::Selectors(count) => {
				if let Some(catalog) = &self.options.styles {
					for (index, selector) in catalog.selectors().iter().enumerate() {
						let name = selector.selected_style_name();
						let style = catalog.get_style(name).cloned().unwrap_or_else(|| {
							log::debug!("style '{name}' is not in the catalog, using an empty style");
							Style::default()
						});
						pass.query_and_render(&style, &selector.query)?;
						pass.report(index + 1, count);
					}
				}
			}
			StylePolicy::DefaultStyle => {
				let style = self.options.styles.as_ref().map(|c| c.default_style()).unwrap_or_default();
				pass.query_and_render(&style, &Query::default())?;
				pass.report(1, 1);
			}
			StylePolicy::Unstyled => {
				pass.query_and_render(&Style::default(), &Query::default())?;
				pass.report(1, 1);
			}
		}

		self.renderer.post_process(&mut pass.image, &mut pass.build_data);
		Ok(Some(pass.image))
	}
}

/// State of one `create_image` call.
struct RenderPass<'a, R: FeatureRenderer> {
	tile_source: &'a FeatureTileSource<R>,
	features: &'a dyn FeatureSource,
	build_data: R::BuildData,
	tile_extent: GeoExtent,
	image: RgbaImage,
	progress: Option<&'a dyn ProgressCallback>,
}

impl<R: FeatureRenderer> RenderPass<'_, R> {
	fn report(&self, position: usize, total: usize) {
		if let Some(progress) = self.progress {
			progress.report(position as u64, total as u64);
		}
	}

	/// Renders every feature on its own with its embedded style.
	fn render_embedded(&mut self) -> Result<()> {
		let mut cursor = match self.features.create_feature_cursor(&Query::default()) {
			Ok(cursor) => cursor,
			Err(e) => {
				log::warn!("cannot query features: {e:#}");
				return Ok(());
			}
		};
		let mut count = 0;
		for feature in features(cursor.as_mut()) {
			let Some(mut feature) = coerce_feature(feature, self.tile_source.options.geometry_type) else {
				continue;
			};
			let style = feature.style.take().unwrap_or_default();
			self.render(&style, &[feature])?;
			count += 1;
			// the number of embedded batches is unknown until the cursor is drained
			self.report(count, 0);
		}
		Ok(())
	}

	/// Renders the features matching `query` within the tile with `style`.
	///
	/// Nothing is rendered if the tile does not overlap the features.
	fn query_and_render(&mut self, style: &Style, query: &Query) -> Result<()> {
		let Some(feature_profile) = self.features.feature_profile() else {
			return Ok(());
		};

		// extents are only comparable within one reference, so intersect them in the
		// geographic form of the feature reference
		let feature_srs = feature_profile.srs();
		let geographic = feature_srs.geographic();
		let features_geo = feature_profile.extent().transform(&geographic);
		let tile_geo = self.tile_extent.transform(&geographic);
		let query_extent = features_geo.intersection_same_srs(&tile_geo).transform(feature_srs);

		let Some(bounds) = query_extent.bounds() else {
			log::debug!(
				"style '{}': tile {} does not overlap features {}",
				style.name,
				self.tile_extent,
				feature_profile.extent()
			);
			return Ok(());
		};

		let mut local_query = query.clone();
		local_query.union_bounds(bounds);

		let batch: Vec<Feature> = match self.features.create_feature_cursor(&local_query) {
			Ok(mut cursor) => collect_features(cursor.as_mut(), self.tile_source.options.geometry_type),
			Err(e) => {
				log::warn!("style '{}': cannot query features: {e:#}", style.name);
				Vec::new()
			}
		};

		self.render(style, &batch)
	}

	fn render(&mut self, style: &Style, batch: &[Feature]) -> Result<()> {
		log::trace!("rendering {} feature(s) with style '{}'", batch.len(), style.name);
		let result = self.tile_source.renderer.render_features_for_style(
			style,
			batch,
			&mut self.build_data,
			&self.tile_extent,
			&mut self.image,
		);
		match (result, self.tile_source.options.render_failure) {
			(Ok(()), _) => Ok(()),
			(Err(e), RenderFailurePolicy::Continue) => {
				log::warn!("rendering style '{}' failed: {e:#}", style.name);
				Ok(())
			}
			(Err(e), RenderFailurePolicy::Abort) => {
				Err(e.context(format!("rendering style '{}' failed", style.name)))
			}
		}
	}
}

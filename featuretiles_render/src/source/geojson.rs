use crate::{Feature, FeatureCursor, FeatureProfile, FeatureSource, FeatureSourceOptions, MemoryFeatureSource, Query, Style};
use anyhow::{Context, Result, anyhow};
use featuretiles_core::GeoExtent;
use featuretiles_derive::context;
use featuretiles_geometry::{GeoFeature, GeoValue, read_geojson, read_ndgeojson_iter};
use std::{
	collections::HashSet,
	fs::File,
	io::BufReader,
	path::{Path, PathBuf},
};

/// Feature source reading a GeoJSON file.
///
/// Files ending in `.ndjson`, `.geojsonl` or `.geojsons` are read as newline-delimited
/// GeoJSON. A feature may carry a top-level `style` member holding a [`Style`]; as soon
/// as one feature does, the source reports embedded styles.
#[derive(Debug)]
pub struct GeoJsonFeatureSource {
	options: FeatureSourceOptions,
	path: Option<PathBuf>,
	data: Option<MemoryFeatureSource>,
}

impl GeoJsonFeatureSource {
	#[must_use]
	pub fn new(options: FeatureSourceOptions) -> GeoJsonFeatureSource {
		GeoJsonFeatureSource {
			options,
			path: None,
			data: None,
		}
	}

	/// Path of the loaded file, once initialized.
	#[must_use]
	pub fn path(&self) -> Option<&Path> {
		self.path.as_deref()
	}

	fn resolve_path(&self, reference_uri: Option<&Path>) -> Result<PathBuf> {
		let url = self
			.options
			.url
			.as_deref()
			.ok_or_else(|| anyhow!("the geojson driver requires a 'url'"))?;
		let url = url.strip_prefix("file://").unwrap_or(url);
		let path = Path::new(url);
		Ok(match reference_uri {
			Some(base) if path.is_relative() => base.join(path),
			_ => path.to_path_buf(),
		})
	}

	#[context("Failed to read features from '{}'", path.display())]
	fn read_features(path: &Path) -> Result<Vec<GeoFeature>> {
		let file = File::open(path)?;
		let extension = path
			.extension()
			.and_then(|e| e.to_str())
			.map(str::to_lowercase)
			.unwrap_or_default();
		if matches!(extension.as_str(), "ndjson" | "geojsonl" | "geojsons") {
			read_ndgeojson_iter(BufReader::new(file)).collect()
		} else {
			read_geojson(BufReader::new(file))
		}
	}
}

fn explicit_id(feature: &GeoFeature) -> Option<u64> {
	match feature.id {
		Some(GeoValue::UInt(id)) => Some(id),
		_ => None,
	}
}

/// Returns a unique id for every feature.
///
/// The first use of an unsigned integer id is kept. Features without one, and repeated
/// ids, are numbered upwards from above the largest kept id.
fn feature_ids(features: &[GeoFeature]) -> Vec<u64> {
	let mut next = features
		.iter()
		.filter_map(explicit_id)
		.max()
		.map_or(0, |max| max.saturating_add(1));
	let mut seen = HashSet::new();
	features
		.iter()
		.map(|feature| match explicit_id(feature) {
			Some(id) if seen.insert(id) => id,
			other => {
				if let Some(id) = other {
					log::debug!("feature id {id} is used more than once, renumbered to {next}");
				}
				let id = next;
				next = next.saturating_add(1);
				id
			}
		})
		.collect()
}

fn convert_feature(id: u64, feature: GeoFeature) -> Result<Feature> {
	let style = match feature.foreign_members.get("style") {
		Some(value) => Some(
			serde_json::from_value::<Style>(value.clone()).with_context(|| format!("invalid style of feature {id}"))?,
		),
		None => None,
	};
	Ok(Feature {
		id,
		geometry: feature.geometry,
		properties: feature.properties,
		style,
	})
}

impl FeatureSource for GeoJsonFeatureSource {
	fn initialize(&mut self, reference_uri: Option<&Path>) -> Result<()> {
		let path = self.resolve_path(reference_uri)?;
		let features = GeoJsonFeatureSource::read_features(&path)?;
		let features = feature_ids(&features)
			.into_iter()
			.zip(features)
			.map(|(id, feature)| convert_feature(id, feature))
			.collect::<Result<Vec<Feature>>>()?;
		let embedded_styles = features.iter().any(|f| f.style.is_some());
		log::debug!(
			"loaded {} features from {} (embedded styles: {embedded_styles})",
			features.len(),
			path.display()
		);

		let srs = self.options.srs_or_default();
		let mut data = MemoryFeatureSource::new(srs.clone(), features).with_embedded_styles(embedded_styles);
		if let Some(extent) = self.options.extent {
			data = data.with_extent(GeoExtent::new(srs, extent));
		}
		self.data = Some(data);
		self.path = Some(path);
		Ok(())
	}

	fn feature_profile(&self) -> Option<&FeatureProfile> {
		self.data.as_ref()?.feature_profile()
	}

	fn has_embedded_styles(&self) -> bool {
		self.data.as_ref().is_some_and(MemoryFeatureSource::has_embedded_styles)
	}

	fn create_feature_cursor(&self, query: &Query) -> Result<Box<dyn FeatureCursor>> {
		self.data
			.as_ref()
			.ok_or_else(|| anyhow!("feature source '{}' is not initialized", self.options.driver))?
			.create_feature_cursor(query)
	}
}

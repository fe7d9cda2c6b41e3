use crate::{Feature, FeatureCursor, FeatureProfile, FeatureSource, Query, VecCursor};
use anyhow::Result;
use featuretiles_core::{Bounds, GeoExtent, SpatialReference};
use rstar::{AABB, RTree, RTreeObject};
use std::{fmt::Debug, path::Path};

/// Envelope of one feature, pointing back into the feature list.
struct IndexedEnvelope {
	index: usize,
	envelope: AABB<[f64; 2]>,
}

impl RTreeObject for IndexedEnvelope {
	type Envelope = AABB<[f64; 2]>;

	fn envelope(&self) -> Self::Envelope {
		self.envelope
	}
}

/// Features held in memory, indexed by an R-tree.
///
/// Queries first collect candidates by envelope, then test the exact geometry
/// against the query bounds and finally apply the attribute filter. Results keep
/// the order in which the features were added.
pub struct MemoryFeatureSource {
	features: Vec<Feature>,
	index: RTree<IndexedEnvelope>,
	profile: Option<FeatureProfile>,
	embedded_styles: bool,
}

impl MemoryFeatureSource {
	/// Indexes `features`, which are expressed in `srs`.
	///
	/// The profile extent is the union of all geometry bounds; without any geometry
	/// the source has no profile.
	#[must_use]
	pub fn new(srs: SpatialReference, features: Vec<Feature>) -> MemoryFeatureSource {
		let envelopes: Vec<IndexedEnvelope> = features
			.iter()
			.enumerate()
			.filter_map(|(index, feature)| {
				let bounds = feature.geometry.as_ref()?.compute_bounds()?;
				Some(IndexedEnvelope {
					index,
					envelope: to_aabb(&bounds),
				})
			})
			.collect();

		let extent = features
			.iter()
			.filter_map(|f| f.geometry.as_ref()?.compute_bounds())
			.reduce(|a, b| a.union_with(&b));

		log::debug!(
			"indexed {} of {} features in {srs}",
			envelopes.len(),
			features.len()
		);

		MemoryFeatureSource {
			features,
			index: RTree::bulk_load(envelopes),
			profile: extent.map(|bounds| FeatureProfile::new(GeoExtent::new(srs, bounds))),
			embedded_styles: false,
		}
	}

	/// Replaces the computed profile extent.
	#[must_use]
	pub fn with_extent(mut self, extent: GeoExtent) -> MemoryFeatureSource {
		self.profile = Some(FeatureProfile::new(extent));
		self
	}

	#[must_use]
	pub fn with_embedded_styles(mut self, embedded_styles: bool) -> MemoryFeatureSource {
		self.embedded_styles = embedded_styles;
		self
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.features.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	/// Runs `query` and returns copies of the matching features.
	pub fn query_features(&self, query: &Query) -> Result<Vec<Feature>> {
		let filter = query.filter()?;

		let candidates: Vec<usize> = match &query.bounds {
			Some(bounds) => {
				let mut indexes: Vec<usize> = self
					.index
					.locate_in_envelope_intersecting(&to_aabb(bounds))
					.map(|entry| entry.index)
					.collect();
				indexes.sort_unstable();
				indexes
					.into_iter()
					.filter(|&i| {
						self.features[i]
							.geometry
							.as_ref()
							.is_some_and(|geometry| geometry.intersects_bounds(bounds))
					})
					.collect()
			}
			None => (0..self.features.len()).collect(),
		};

		Ok(candidates
			.into_iter()
			.map(|i| &self.features[i])
			.filter(|feature| filter.as_ref().is_none_or(|f| f.matches(&feature.properties)))
			.cloned()
			.collect())
	}
}

fn to_aabb(bounds: &Bounds) -> AABB<[f64; 2]> {
	AABB::from_corners([bounds.x_min, bounds.y_min], [bounds.x_max, bounds.y_max])
}

impl FeatureSource for MemoryFeatureSource {
	fn initialize(&mut self, _reference_uri: Option<&Path>) -> Result<()> {
		Ok(())
	}

	fn feature_profile(&self) -> Option<&FeatureProfile> {
		self.profile.as_ref()
	}

	fn has_embedded_styles(&self) -> bool {
		self.embedded_styles
	}

	fn create_feature_cursor(&self, query: &Query) -> Result<Box<dyn FeatureCursor>> {
		Ok(Box::new(VecCursor::new(self.query_features(query)?)))
	}
}

impl Debug for MemoryFeatureSource {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MemoryFeatureSource")
			.field("features", &self.features.len())
			.field("profile", &self.profile)
			.field("embedded_styles", &self.embedded_styles)
			.finish()
	}
}

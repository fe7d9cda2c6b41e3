use featuretiles_core::{GeoExtent, SpatialReference};

/// Native spatial reference and overall extent of a feature source.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureProfile {
	extent: GeoExtent,
}

impl FeatureProfile {
	#[must_use]
	pub fn new(extent: GeoExtent) -> FeatureProfile {
		FeatureProfile { extent }
	}

	#[must_use]
	pub fn extent(&self) -> &GeoExtent {
		&self.extent
	}

	#[must_use]
	pub fn srs(&self) -> &SpatialReference {
		self.extent.srs()
	}
}

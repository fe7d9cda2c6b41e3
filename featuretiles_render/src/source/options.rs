use featuretiles_core::{Bounds, SpatialReference};
use serde::{Deserialize, Serialize};

/// Configuration of a feature source, the `features` section of a tile source.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureSourceOptions {
	/// Driver name, e.g. `geojson`.
	pub driver: String,
	/// Location of the data, relative to the configuration file.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
	/// Reference the coordinates are expressed in. Defaults to geographic WGS84.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub srs: Option<SpatialReference>,
	/// Overrides the extent computed from the data.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub extent: Option<Bounds>,
}

impl FeatureSourceOptions {
	#[must_use]
	pub fn new(driver: &str, url: &str) -> FeatureSourceOptions {
		FeatureSourceOptions {
			driver: driver.to_string(),
			url: Some(url.to_string()),
			..FeatureSourceOptions::default()
		}
	}

	/// The configured reference, or geographic WGS84.
	#[must_use]
	pub fn srs_or_default(&self) -> SpatialReference {
		self.srs.clone().unwrap_or(SpatialReference::Geographic)
	}
}

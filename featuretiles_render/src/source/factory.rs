use crate::{FeatureSource, FeatureSourceOptions, GeoJsonFeatureSource};
use anyhow::{Result, bail};
use std::collections::BTreeMap;

type Constructor = Box<dyn Fn(&FeatureSourceOptions) -> Result<Box<dyn FeatureSource>> + Send + Sync>;

/// Creates feature sources from their options by driver name.
pub struct FeatureSourceFactory {
	drivers: BTreeMap<String, Constructor>,
}

impl FeatureSourceFactory {
	#[must_use]
	pub fn new_empty() -> FeatureSourceFactory {
		FeatureSourceFactory {
			drivers: BTreeMap::new(),
		}
	}

	/// A factory knowing the built-in drivers: `geojson` and its alias `json`.
	#[must_use]
	pub fn new_default() -> FeatureSourceFactory {
		let mut factory = FeatureSourceFactory::new_empty();
		for name in ["geojson", "json"] {
			factory.add_driver(
				name,
				Box::new(|options: &FeatureSourceOptions| -> Result<Box<dyn FeatureSource>> {
					Ok(Box::new(GeoJsonFeatureSource::new(options.clone())))
				}),
			);
		}
		factory
	}

	pub fn add_driver(&mut self, name: &str, constructor: Constructor) {
		self.drivers.insert(name.to_lowercase(), constructor);
	}

	pub fn driver_names(&self) -> impl Iterator<Item = &str> {
		self.drivers.keys().map(String::as_str)
	}

	/// Creates an uninitialized feature source for `options.driver`.
	pub fn create(&self, options: &FeatureSourceOptions) -> Result<Box<dyn FeatureSource>> {
		let name = options.driver.trim().to_lowercase();
		let Some(constructor) = self.drivers.get(&name) else {
			bail!(
				"unknown feature driver '{}', expected one of: {}",
				options.driver,
				self.driver_names().collect::<Vec<_>>().join(", ")
			);
		};
		constructor(options)
	}
}

impl Default for FeatureSourceFactory {
	fn default() -> Self {
		FeatureSourceFactory::new_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::MemoryFeatureSource;
	use featuretiles_core::SpatialReference;

	#[test]
	fn default_drivers() {
		let factory = FeatureSourceFactory::new_default();
		assert_eq!(factory.driver_names().collect::<Vec<_>>(), vec!["geojson", "json"]);
		let source = factory.create(&FeatureSourceOptions::new("GeoJSON", "x.geojson")).unwrap();
		assert!(source.feature_profile().is_none());
	}

	#[test]
	fn unknown_driver() {
		let factory = FeatureSourceFactory::new_default();
		let err = factory.create(&FeatureSourceOptions::new("ogr", "x.shp")).err().unwrap();
		assert_eq!(
			err.to_string(),
			"unknown feature driver 'ogr', expected one of: geojson, json"
		);
	}

	#[test]
	fn custom_driver() {
		let mut factory = FeatureSourceFactory::new_empty();
		factory.add_driver(
			"memory",
			Box::new(|options: &FeatureSourceOptions| -> Result<Box<dyn FeatureSource>> {
				Ok(Box::new(MemoryFeatureSource::new(options.srs_or_default(), vec![])))
			}),
		);
		let options = FeatureSourceOptions {
			driver: "memory".to_string(),
			srs: Some(SpatialReference::WebMercator),
			..FeatureSourceOptions::default()
		};
		assert!(factory.create(&options).is_ok());
	}
}

//! Options of a feature tile source and their configuration form.

use crate::{FeatureSourceOptions, StyleCatalog};
use anyhow::{Context, Result, bail, ensure};
use featuretiles_derive::context;
use featuretiles_geometry::GeometryType;
use serde::{Deserialize, Serialize};
use serde_yaml_ng::{Mapping, Value};
use std::{fmt::Display, fs::File, io::BufReader, path::Path, str::FromStr};

/// Generic configuration tree.
pub type Config = Value;

pub const DEFAULT_TILE_SIZE: u32 = 256;

/// What happens when the renderer fails for one style batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFailurePolicy {
	/// Log the failure and continue with the next batch.
	#[default]
	Continue,
	/// Stop rendering the tile and return the error.
	Abort,
}

impl FromStr for RenderFailurePolicy {
	type Err = anyhow::Error;

	fn from_str(input: &str) -> Result<Self> {
		Ok(match input.trim().to_lowercase().as_str() {
			"continue" => RenderFailurePolicy::Continue,
			"abort" => RenderFailurePolicy::Abort,
			other => bail!("unknown render failure policy '{other}', expected 'continue' or 'abort'"),
		})
	}
}

impl Display for RenderFailurePolicy {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			RenderFailurePolicy::Continue => "continue",
			RenderFailurePolicy::Abort => "abort",
		})
	}
}

/// Options of a [`FeatureTileSource`](crate::FeatureTileSource).
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureTileSourceOptions {
	/// Width and height of rendered tiles in pixels.
	pub tile_size: u32,
	pub features: Option<FeatureSourceOptions>,
	pub styles: Option<StyleCatalog>,
	/// Forces every feature geometry into this type before rendering.
	pub geometry_type: Option<GeometryType>,
	pub render_failure: RenderFailurePolicy,
}

impl Default for FeatureTileSourceOptions {
	fn default() -> Self {
		FeatureTileSourceOptions {
			tile_size: DEFAULT_TILE_SIZE,
			features: None,
			styles: None,
			geometry_type: None,
			render_failure: RenderFailurePolicy::default(),
		}
	}
}

/// Options as handed to a tile source: either a raw configuration tree or typed options.
#[derive(Clone, Debug, PartialEq)]
pub enum SourceOptions {
	Config(Config),
	Features(FeatureTileSourceOptions),
}

impl From<Config> for SourceOptions {
	fn from(config: Config) -> Self {
		SourceOptions::Config(config)
	}
}

impl From<FeatureTileSourceOptions> for SourceOptions {
	fn from(options: FeatureTileSourceOptions) -> Self {
		SourceOptions::Features(options)
	}
}

impl FeatureTileSourceOptions {
	/// Converts whatever options a source was given into typed options.
	pub fn resolve(options: SourceOptions) -> Result<FeatureTileSourceOptions> {
		match options {
			SourceOptions::Features(options) => Ok(options),
			SourceOptions::Config(config) => FeatureTileSourceOptions::from_config(&config),
		}
	}

	/// Reads the options from a configuration tree.
	///
	/// An unrecognized `geometry_type` leaves the override unset.
	#[context("Failed to read feature tile source options")]
	pub fn from_config(config: &Config) -> Result<FeatureTileSourceOptions> {
		let mut options = FeatureTileSourceOptions::default();
		if config.is_null() {
			return Ok(options);
		}
		let map = config.as_mapping().context("configuration must be a mapping")?;

		for (key, value) in map {
			let key = key.as_str().context("configuration keys must be strings")?;
			match key {
				"tile_size" => {
					let size = value.as_u64().context("'tile_size' must be a positive integer")?;
					ensure!(
						(1..=8192).contains(&size),
						"'tile_size' must be between 1 and 8192, got {size}"
					);
					options.tile_size = size as u32;
				}
				"features" => {
					options.features =
						Some(serde_yaml_ng::from_value(value.clone()).context("invalid 'features' section")?);
				}
				"styles" => {
					options.styles = Some(serde_yaml_ng::from_value(value.clone()).context("invalid 'styles' section")?);
				}
				"geometry_type" => {
					options.geometry_type = match value.as_str().map(str::parse) {
						Some(Ok(geometry_type)) => Some(geometry_type),
						Some(Err(e)) => {
							log::warn!("ignoring geometry_type: {e}");
							None
						}
						None => {
							log::warn!("ignoring geometry_type: {value:?} is not a geometry type name");
							None
						}
					};
				}
				"render_failure" => {
					options.render_failure = value
						.as_str()
						.context("'render_failure' must be a string")?
						.parse()?;
				}
				other => bail!("unknown option '{other}'"),
			}
		}
		Ok(options)
	}

	/// Writes the options as a configuration tree that [`from_config`](Self::from_config) reads back.
	pub fn to_config(&self) -> Result<Config> {
		let mut map = Mapping::new();
		map.insert("tile_size".into(), Value::from(u64::from(self.tile_size)));
		if let Some(features) = &self.features {
			map.insert("features".into(), serde_yaml_ng::to_value(features)?);
		}
		if let Some(styles) = &self.styles {
			map.insert("styles".into(), serde_yaml_ng::to_value(styles)?);
		}
		if let Some(geometry_type) = self.geometry_type {
			map.insert("geometry_type".into(), geometry_type.as_config_str().into());
		}
		map.insert("render_failure".into(), self.render_failure.to_string().into());
		Ok(Value::Mapping(map))
	}

	#[context("Failed to parse options from YAML")]
	pub fn from_yaml_str(yaml: &str) -> Result<FeatureTileSourceOptions> {
		let config: Config = serde_yaml_ng::from_str(yaml)?;
		FeatureTileSourceOptions::from_config(&config)
	}

	#[context("Failed to read options from '{}'", path.display())]
	pub fn from_path(path: &Path) -> Result<FeatureTileSourceOptions> {
		let config: Config = serde_yaml_ng::from_reader(BufReader::new(File::open(path)?))?;
		FeatureTileSourceOptions::from_config(&config)
	}

	pub fn to_yaml_string(&self) -> Result<String> {
		Ok(serde_yaml_ng::to_string(&self.to_config()?)?)
	}
}

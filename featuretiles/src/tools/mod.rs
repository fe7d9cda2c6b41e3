pub mod probe;
pub mod render;

use anyhow::Result;
use featuretiles_render::{FeatureTileSource, FeatureTileSourceOptions, SimpleRasterizer};
use featuretiles_core::TileProfile;
use std::path::Path;

/// Reads the options at `config` and initializes a tile source with them.
///
/// Relative feature paths resolve against the directory of the configuration file.
pub fn open_tile_source(
	config: &Path,
	rasterizer: SimpleRasterizer,
	profile: Option<TileProfile>,
) -> Result<FeatureTileSource<SimpleRasterizer>> {
	let options = FeatureTileSourceOptions::from_path(config)?;
	let mut source = FeatureTileSource::new(options, rasterizer)?;
	source.initialize(config.parent(), profile)?;
	Ok(source)
}

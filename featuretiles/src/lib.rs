//! # featuretiles
//!
//! Renders vector features (GeoJSON and friends) into raster map tiles.
//!
//! The work is split over a few crates, re-exported here:
//! - [`core`]: bounds, spatial references, extents, tile profiles and keys
//! - [`geometry`]: the geometry model and GeoJSON reading
//! - [`image`]: colors, drawing primitives and tile image encoding
//! - [`render`]: feature sources, styles and the tile render pipeline
//!
//! ## Usage Example
//!
//! ```rust
//! use featuretiles::{
//! 	core::{TileKey, TileProfile},
//! 	render::{FeatureTileSource, FeatureTileSourceOptions, SimpleRasterizer},
//! };
//!
//! let options = FeatureTileSourceOptions::from_yaml_str("tile_size: 64").unwrap();
//! let mut source = FeatureTileSource::new(options, SimpleRasterizer::new()).unwrap();
//! source.initialize(None, None).unwrap();
//!
//! // without a feature source there is nothing to render
//! let key = TileKey::new(0, 0, 0, TileProfile::GlobalGeodetic).unwrap();
//! assert!(source.create_image(&key, None).unwrap().is_none());
//! ```

pub use featuretiles_core as core;
pub use featuretiles_geometry as geometry;
pub use featuretiles_image as image;
pub use featuretiles_render as render;

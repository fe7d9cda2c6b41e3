//! Renders vector features into raster tiles.
//!
//! A [`FeatureTileSource`] combines a [`FeatureSource`], an optional [`StyleCatalog`]
//! and a [`FeatureRenderer`]. For every tile it intersects the tile extent with the
//! coverage of the feature source, queries the matching features per style, coerces
//! their geometry if configured and hands each batch to the renderer.

pub mod feature;
#[cfg(test)]
mod helpers;
pub mod raster;
pub mod source;
pub mod style;
pub mod tile;

pub use feature::*;
pub use raster::*;
pub use source::*;
pub use style::*;
pub use tile::*;

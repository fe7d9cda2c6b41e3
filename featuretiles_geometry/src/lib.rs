//! Geometry model for features: coordinates, typed geometries with type coercion,
//! attribute values and GeoJSON parsing.

pub mod geojson;
pub mod geom;

pub use geojson::*;
pub use geom::*;

//! Spatial primitives: rectangles, spatial references, referenced extents and tile addressing.

mod bounds;
pub use bounds::*;

mod geo_extent;
pub use geo_extent::*;

mod spatial_reference;
pub use spatial_reference::*;

mod tile_key;
pub use tile_key::*;

mod tile_profile;
pub use tile_profile::*;

//! Contains spatial types like bounds, spatial references, extents and tile keys.

pub mod progress;

pub mod types;
pub use types::*;

use crate::{GeoExtent, TileProfile};
use anyhow::{Result, ensure};
use featuretiles_derive::context;
use std::fmt::{self, Debug, Display};

/// Addresses one tile of a [`TileProfile`] by level, column and row.
///
/// # Examples
///
/// ```
/// use featuretiles_core::{TileKey, TileProfile};
///
/// let key = TileKey::new(1, 3, 0, TileProfile::GlobalGeodetic).unwrap();
/// assert_eq!(key.geo_extent().bounds().unwrap().as_array(), [90.0, 0.0, 180.0, 90.0]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileKey {
	pub level: u8,
	pub x: u32,
	pub y: u32,
	profile: TileProfile,
}

impl TileKey {
	/// Creates a tile key, checking that the tile exists in `profile`.
	#[context("Invalid tile key {level}/{x}/{y}")]
	pub fn new(level: u8, x: u32, y: u32, profile: TileProfile) -> Result<TileKey> {
		ensure!(level <= 30, "level ({level}) must be <= 30");
		let (cols, rows) = profile.tiles_at_level(level);
		ensure!(x < cols, "x ({x}) must be < {cols} at level {level}");
		ensure!(y < rows, "y ({y}) must be < {rows} at level {level}");
		Ok(TileKey {
			level,
			x,
			y,
			profile,
		})
	}

	#[must_use]
	pub fn profile(&self) -> TileProfile {
		self.profile
	}

	/// Returns the extent of the tile in the profile's spatial reference.
	#[must_use]
	pub fn geo_extent(&self) -> GeoExtent {
		// bounds are verified in `new`
		self.profile
			.tile_extent(self.level, self.x, self.y)
			.unwrap_or_else(|_| GeoExtent::invalid())
	}
}

impl Display for TileKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}/{}", self.level, self.x, self.y)
	}
}

impl Debug for TileKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileKey({}, {self})", self.profile)
	}
}

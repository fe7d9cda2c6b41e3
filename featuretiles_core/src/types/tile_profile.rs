//! Tiling schemes that map tile addresses to geographic extents.

use crate::{Bounds, GeoExtent, SpatialReference};
use anyhow::{Result, bail};
use std::{
	fmt::{self, Display},
	str::FromStr,
};

const MERCATOR_MAX: f64 = 20_037_508.342_789_244;

/// Deepest level with addressable tiles.
const MAX_LEVEL: u8 = 30;

/// A tiling scheme: the reference the tiles are expressed in, the overall extent and
/// how that extent is subdivided per level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileProfile {
	/// WGS84 longitude/latitude, two tiles (west, east) at level 0.
	#[default]
	GlobalGeodetic,
	/// Spherical Web Mercator, a single tile at level 0.
	SphericalMercator,
}

impl TileProfile {
	#[must_use]
	pub fn srs(&self) -> SpatialReference {
		match self {
			TileProfile::GlobalGeodetic => SpatialReference::Geographic,
			TileProfile::SphericalMercator => SpatialReference::WebMercator,
		}
	}

	/// Returns the full extent covered by the profile.
	#[must_use]
	pub fn extent(&self) -> GeoExtent {
		let bounds = match self {
			TileProfile::GlobalGeodetic => Bounds {
				x_min: -180.0,
				y_min: -90.0,
				x_max: 180.0,
				y_max: 90.0,
			},
			TileProfile::SphericalMercator => Bounds {
				x_min: -MERCATOR_MAX,
				y_min: -MERCATOR_MAX,
				x_max: MERCATOR_MAX,
				y_max: MERCATOR_MAX,
			},
		};
		GeoExtent::new(self.srs(), bounds)
	}

	/// Returns the number of tiles `(columns, rows)` at `level`.
	///
	/// Levels deeper than 30 are counted as level 30.
	#[must_use]
	pub fn tiles_at_level(&self, level: u8) -> (u32, u32) {
		let rows = 1u32 << level.min(MAX_LEVEL);
		match self {
			TileProfile::GlobalGeodetic => (rows * 2, rows),
			TileProfile::SphericalMercator => (rows, rows),
		}
	}

	/// Returns the extent of tile `x`/`y` at `level`. Row 0 is the northernmost row.
	///
	/// # Errors
	/// Returns an error if `level` exceeds 30 or the tile lies outside the profile.
	pub fn tile_extent(&self, level: u8, x: u32, y: u32) -> Result<GeoExtent> {
		if level > MAX_LEVEL {
			bail!("level ({level}) must be <= {MAX_LEVEL}");
		}
		let (cols, rows) = self.tiles_at_level(level);
		if x >= cols || y >= rows {
			bail!("tile {level}/{x}/{y} is outside of the {self} profile ({cols}x{rows} tiles)");
		}

		let full = self.extent();
		let Some(full) = full.bounds() else {
			bail!("profile {self} has no valid extent");
		};
		let width = full.width() / f64::from(cols);
		let height = full.height() / f64::from(rows);
		let x_min = full.x_min + width * f64::from(x);
		let y_max = full.y_max - height * f64::from(y);

		Ok(GeoExtent::new(
			self.srs(),
			Bounds::new(x_min, y_max - height, x_min + width, y_max)?,
		))
	}
}

impl FromStr for TileProfile {
	type Err = anyhow::Error;

	fn from_str(input: &str) -> Result<Self> {
		Ok(match input.trim().to_lowercase().as_str() {
			"global-geodetic" | "geodetic" | "wgs84" => TileProfile::GlobalGeodetic,
			"spherical-mercator" | "mercator" | "global-mercator" => TileProfile::SphericalMercator,
			_ => bail!("unknown tile profile '{input}', expected 'global-geodetic' or 'spherical-mercator'"),
		})
	}
}

impl Display for TileProfile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			TileProfile::GlobalGeodetic => "global-geodetic",
			TileProfile::SphericalMercator => "spherical-mercator",
		})
	}
}

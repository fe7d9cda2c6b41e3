//! Spatial reference systems and point reprojection.
//!
//! Every supported reference can be converted to and from geographic WGS84
//! coordinates, so any pair of references is transformed by pivoting through
//! geographic longitude/latitude.

use serde::{Deserialize, Serialize};
use std::{
	f64::consts::{FRAC_PI_2, FRAC_PI_4},
	fmt::{self, Display},
	str::FromStr,
};

/// Latitude limit of the Web Mercator projection.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;

/// Spherical earth radius used by the projected references (WGS84 semi-major axis).
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// A spatial reference system a coordinate or extent is expressed in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum SpatialReference {
	/// Longitude/latitude in degrees on WGS84 (EPSG:4326).
	Geographic,
	/// Spherical Web Mercator in meters (EPSG:3857).
	WebMercator,
	/// Equirectangular projection in meters (EPSG:32663).
	PlateCarree,
	/// A reference that could not be resolved. It only transforms to itself.
	Unknown(String),
}

impl SpatialReference {
	/// Returns the geographic form of this reference.
	///
	/// All resolvable references share WGS84 as their geographic form; an unknown
	/// reference has none and returns itself.
	#[must_use]
	pub fn geographic(&self) -> SpatialReference {
		match self {
			SpatialReference::Unknown(_) => self.clone(),
			_ => SpatialReference::Geographic,
		}
	}

	/// Returns the canonical init string, e.g. `epsg:4326`.
	#[must_use]
	pub fn init_string(&self) -> &str {
		match self {
			SpatialReference::Geographic => "epsg:4326",
			SpatialReference::WebMercator => "epsg:3857",
			SpatialReference::PlateCarree => "epsg:32663",
			SpatialReference::Unknown(init) => init,
		}
	}

	/// Transforms a single point from `self` into `target`.
	///
	/// Returns `None` if either side cannot be resolved or the result is not finite.
	#[must_use]
	pub fn transform_point(&self, x: f64, y: f64, target: &SpatialReference) -> Option<(f64, f64)> {
		if self == target {
			return Some((x, y));
		}
		let (lon, lat) = self.unproject(x, y)?;
		let (tx, ty) = target.project(lon, lat)?;
		(tx.is_finite() && ty.is_finite()).then_some((tx, ty))
	}

	fn unproject(&self, x: f64, y: f64) -> Option<(f64, f64)> {
		match self {
			SpatialReference::Geographic => Some((x, y)),
			SpatialReference::WebMercator => {
				let lon = (x / EARTH_RADIUS).to_degrees();
				let lat = (2.0 * (y / EARTH_RADIUS).exp().atan() - FRAC_PI_2).to_degrees();
				Some((lon, lat))
			}
			SpatialReference::PlateCarree => Some(((x / EARTH_RADIUS).to_degrees(), (y / EARTH_RADIUS).to_degrees())),
			SpatialReference::Unknown(_) => None,
		}
	}

	fn project(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
		match self {
			SpatialReference::Geographic => Some((lon, lat)),
			SpatialReference::WebMercator => {
				let lat = lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT);
				let x = EARTH_RADIUS * lon.to_radians();
				let y = EARTH_RADIUS * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();
				Some((x, y))
			}
			SpatialReference::PlateCarree => Some((EARTH_RADIUS * lon.to_radians(), EARTH_RADIUS * lat.to_radians())),
			SpatialReference::Unknown(_) => None,
		}
	}
}

impl FromStr for SpatialReference {
	type Err = std::convert::Infallible;

	/// Resolves an init string. Unrecognized strings become [`SpatialReference::Unknown`].
	fn from_str(input: &str) -> Result<Self, Self::Err> {
		let normalized = input.trim().to_lowercase();
		Ok(match normalized.as_str() {
			"wgs84" | "epsg:4326" | "geographic" | "+proj=longlat +datum=wgs84 +no_defs" => SpatialReference::Geographic,
			"spherical-mercator" | "epsg:3857" | "epsg:900913" | "epsg:3785" | "web-mercator" => {
				SpatialReference::WebMercator
			}
			"plate-carre" | "plate-carree" | "epsg:32663" => SpatialReference::PlateCarree,
			_ => SpatialReference::Unknown(input.trim().to_string()),
		})
	}
}

impl From<String> for SpatialReference {
	fn from(value: String) -> Self {
		match value.parse() {
			Ok(srs) => srs,
			Err(never) => match never {},
		}
	}
}

impl From<&str> for SpatialReference {
	fn from(value: &str) -> Self {
		SpatialReference::from(value.to_string())
	}
}

impl From<SpatialReference> for String {
	fn from(value: SpatialReference) -> Self {
		value.init_string().to_string()
	}
}

impl Display for SpatialReference {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.init_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use rstest::rstest;

	const MERCATOR_MAX: f64 = 20_037_508.342_789_244;

	#[rstest]
	#[case("wgs84", SpatialReference::Geographic)]
	#[case("EPSG:4326", SpatialReference::Geographic)]
	#[case("spherical-mercator", SpatialReference::WebMercator)]
	#[case("epsg:900913", SpatialReference::WebMercator)]
	#[case(" epsg:3857 ", SpatialReference::WebMercator)]
	#[case("plate-carre", SpatialReference::PlateCarree)]
	#[case("epsg:2056", SpatialReference::Unknown("epsg:2056".to_string()))]
	fn parse_init_strings(#[case] input: &str, #[case] expected: SpatialReference) {
		assert_eq!(SpatialReference::from(input), expected);
	}

	#[test]
	fn geographic_form() {
		assert_eq!(SpatialReference::WebMercator.geographic(), SpatialReference::Geographic);
		assert_eq!(SpatialReference::PlateCarree.geographic(), SpatialReference::Geographic);
		assert_eq!(SpatialReference::Geographic.geographic(), SpatialReference::Geographic);
		let unknown = SpatialReference::from("epsg:2056");
		assert_eq!(unknown.geographic(), unknown);
	}

	#[test]
	fn geographic_to_mercator() {
		let (x, y) = SpatialReference::Geographic
			.transform_point(180.0, MAX_MERCATOR_LAT, &SpatialReference::WebMercator)
			.unwrap();
		assert_relative_eq!(x, MERCATOR_MAX, epsilon = 1e-6);
		assert_relative_eq!(y, MERCATOR_MAX, epsilon = 1e-2);
	}

	#[test]
	fn mercator_clamps_poles() {
		let (_, y) = SpatialReference::Geographic
			.transform_point(0.0, 90.0, &SpatialReference::WebMercator)
			.unwrap();
		assert_relative_eq!(y, MERCATOR_MAX, epsilon = 1e-2);
	}

	#[rstest]
	#[case(SpatialReference::WebMercator)]
	#[case(SpatialReference::PlateCarree)]
	fn round_trip_through_projection(#[case] projected: SpatialReference) {
		let geo = SpatialReference::Geographic;
		let (x, y) = geo.transform_point(13.4, 52.5, &projected).unwrap();
		let (lon, lat) = projected.transform_point(x, y, &geo).unwrap();
		assert_relative_eq!(lon, 13.4, epsilon = 1e-9);
		assert_relative_eq!(lat, 52.5, epsilon = 1e-9);
	}

	#[test]
	fn mercator_to_plate_carree() {
		let (x, y) = SpatialReference::WebMercator
			.transform_point(0.0, 0.0, &SpatialReference::PlateCarree)
			.unwrap();
		assert_relative_eq!(x, 0.0);
		assert_relative_eq!(y, 0.0, epsilon = 1e-9);
	}

	#[test]
	fn unknown_references_do_not_transform() {
		let unknown = SpatialReference::from("epsg:2056");
		assert_eq!(unknown.transform_point(1.0, 2.0, &SpatialReference::Geographic), None);
		assert_eq!(SpatialReference::Geographic.transform_point(1.0, 2.0, &unknown), None);
		assert_eq!(unknown.transform_point(1.0, 2.0, &unknown.clone()), Some((1.0, 2.0)));
	}

	#[test]
	fn serde_as_string() {
		let json = serde_json::to_string(&SpatialReference::WebMercator).unwrap();
		assert_eq!(json, "\"epsg:3857\"");
		let parsed: SpatialReference = serde_json::from_str("\"wgs84\"").unwrap();
		assert_eq!(parsed, SpatialReference::Geographic);
	}
}

use anyhow::{Result, bail};
use std::{fmt::Display, str::FromStr};

/// The primitive kind of a geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryType {
	PointSet,
	LineString,
	Polygon,
}

impl GeometryType {
	/// Name used when writing configuration.
	#[must_use]
	pub fn as_config_str(&self) -> &'static str {
		match self {
			GeometryType::PointSet => "point",
			GeometryType::LineString => "line",
			GeometryType::Polygon => "polygon",
		}
	}
}

impl FromStr for GeometryType {
	type Err = anyhow::Error;

	fn from_str(input: &str) -> Result<Self> {
		Ok(match input {
			"line" | "lines" | "linestring" => GeometryType::LineString,
			"point" | "pointset" | "points" => GeometryType::PointSet,
			"polygon" | "polygons" => GeometryType::Polygon,
			other => bail!("unknown geometry type '{other}'"),
		})
	}
}

impl Display for GeometryType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_config_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("line", GeometryType::LineString)]
	#[case("lines", GeometryType::LineString)]
	#[case("linestring", GeometryType::LineString)]
	#[case("point", GeometryType::PointSet)]
	#[case("pointset", GeometryType::PointSet)]
	#[case("points", GeometryType::PointSet)]
	#[case("polygon", GeometryType::Polygon)]
	#[case("polygons", GeometryType::Polygon)]
	fn parse(#[case] input: &str, #[case] expected: GeometryType) {
		assert_eq!(input.parse::<GeometryType>().unwrap(), expected);
	}

	#[rstest]
	#[case("triangle")]
	#[case("LINE")]
	#[case("LineString")]
	#[case(" polygons ")]
	#[case("")]
	fn parse_unknown(#[case] input: &str) {
		assert!(input.parse::<GeometryType>().is_err());
	}

	#[test]
	fn display_uses_config_names() {
		assert_eq!(GeometryType::LineString.to_string(), "line");
		assert_eq!(GeometryType::PointSet.to_string(), "point");
		assert_eq!(GeometryType::Polygon.to_string(), "polygon");
	}
}

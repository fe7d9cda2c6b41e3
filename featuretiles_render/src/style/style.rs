use featuretiles_image::Color;
use serde::{Deserialize, Serialize};

fn default_point_size() -> f32 {
	2.0
}

fn default_line_width() -> f32 {
	1.0
}

/// Symbol for point geometries: a filled disc.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PointSymbol {
	pub color: Color,
	/// Radius in pixels.
	#[serde(default = "default_point_size")]
	pub size: f32,
}

/// Symbol for lines and polygon outlines.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LineSymbol {
	pub color: Color,
	/// Stroke width in pixels.
	#[serde(default = "default_line_width")]
	pub width: f32,
}

/// Symbol for polygons: a fill plus an optional outline.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PolygonSymbol {
	pub fill: Color,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub stroke: Option<LineSymbol>,
}

/// A named bundle of symbolization rules.
///
/// The default style has no name and no symbols; renderers decide how to draw
/// features with such an empty style.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Style {
	#[serde(skip_serializing_if = "String::is_empty")]
	pub name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub point: Option<PointSymbol>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub line: Option<LineSymbol>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub polygon: Option<PolygonSymbol>,
}

impl Style {
	#[must_use]
	pub fn named(name: &str) -> Style {
		Style {
			name: name.to_string(),
			..Style::default()
		}
	}

	/// Returns `true` if the style defines no symbol at all.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.point.is_none() && self.line.is_none() && self.polygon.is_none()
	}

	/// Symbols drawn for features without a style of their own.
	#[must_use]
	pub fn fallback() -> Style {
		Style {
			name: String::new(),
			point: Some(PointSymbol {
				color: Color::WHITE,
				size: default_point_size(),
			}),
			line: Some(LineSymbol {
				color: Color::WHITE,
				width: default_line_width(),
			}),
			polygon: Some(PolygonSymbol {
				fill: Color::WHITE,
				stroke: None,
			}),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn parse_yaml() {
		let style: Style = serde_yaml_ng::from_str(
			"name: water\npolygon:\n  fill: '#3366cc'\n  stroke: { color: '#001133', width: 2 }\nline: { color: '#3366cc' }",
		)
		.unwrap();
		assert_eq!(style.name, "water");
		assert_eq!(style.line.as_ref().unwrap().width, 1.0);
		let polygon = style.polygon.as_ref().unwrap();
		assert_eq!(polygon.fill, Color::new(0x33, 0x66, 0xcc, 255));
		assert_eq!(polygon.stroke.as_ref().unwrap().width, 2.0);
		assert!(style.point.is_none());
		assert!(!style.is_empty());
	}

	#[test]
	fn reject_unknown_symbol() {
		assert!(serde_yaml_ng::from_str::<Style>("name: x\ntext: { color: '#fff' }").is_err());
		assert!(serde_yaml_ng::from_str::<Style>("line: { color: 'blue' }").is_err());
	}

	#[test]
	fn empty_and_fallback() {
		assert!(Style::default().is_empty());
		assert!(Style::named("plain").is_empty());
		let fallback = Style::fallback();
		assert_eq!(fallback.line.unwrap().color, Color::WHITE);
	}

	#[test]
	fn serialize_skips_unset() {
		let yaml = serde_yaml_ng::to_string(&Style::named("roads")).unwrap();
		assert_eq!(yaml, "name: roads\n");
	}
}

use crate::Style;
use featuretiles_geometry::{GeoProperties, GeoValue, Geometry, GeometryType};

/// A single geographic entity: geometry, attributes and an optional embedded style.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Feature {
	pub id: u64,
	pub geometry: Option<Geometry>,
	pub properties: GeoProperties,
	pub style: Option<Style>,
}

impl Feature {
	#[must_use]
	pub fn new(id: u64, geometry: Geometry) -> Feature {
		Feature {
			id,
			geometry: Some(geometry),
			..Feature::default()
		}
	}

	#[must_use]
	pub fn with_property(mut self, key: &str, value: impl Into<GeoValue>) -> Feature {
		self.properties.insert(key.to_string(), value.into());
		self
	}

	#[must_use]
	pub fn with_style(mut self, style: Style) -> Feature {
		self.style = Some(style);
		self
	}

	/// Component type of the geometry, see [`Geometry::component_type`].
	#[must_use]
	pub fn component_type(&self) -> Option<GeometryType> {
		self.geometry.as_ref().and_then(Geometry::component_type)
	}

	/// Returns this feature with its geometry expressed as `target`.
	///
	/// Features that already have the target component type are returned unchanged.
	/// Returns `None` if the feature has no geometry or the conversion fails.
	#[must_use]
	pub fn coerce_to(mut self, target: GeometryType) -> Option<Feature> {
		let geometry = self.geometry.take()?;
		self.geometry = if geometry.component_type() == Some(target) {
			Some(geometry)
		} else {
			geometry.clone_as(target)
		};
		self.geometry.is_some().then_some(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn ring() -> Geometry {
		Geometry::new_polygon(vec![vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 0.0]]])
	}

	#[test]
	fn builder() {
		let feature = Feature::new(3, ring()).with_property("name", "pond").with_property("depth", 4);
		assert_eq!(feature.id, 3);
		assert_eq!(feature.properties.get("name"), Some(&GeoValue::from("pond")));
		assert_eq!(feature.component_type(), Some(GeometryType::Polygon));
		assert_eq!(Feature::default().component_type(), None);
	}

	#[test]
	fn coerce_same_type_keeps_geometry() {
		let feature = Feature::new(1, ring());
		assert_eq!(feature.clone().coerce_to(GeometryType::Polygon), Some(feature));
	}

	#[test]
	fn coerce_polygon_to_line() {
		let line = Feature::new(1, ring())
			.with_property("kind", "lake")
			.coerce_to(GeometryType::LineString)
			.unwrap();
		assert_eq!(line.component_type(), Some(GeometryType::LineString));
		assert_eq!(line.properties.get("kind"), Some(&GeoValue::from("lake")));
	}

	#[test]
	fn coerce_failure_drops_feature() {
		let single_point = Feature::new(1, Geometry::new_point_set(vec![[0.0, 0.0]]));
		assert_eq!(single_point.coerce_to(GeometryType::LineString), None);
		assert_eq!(Feature::default().coerce_to(GeometryType::PointSet), None);
	}
}

use crate::{Feature, FeatureCursor, features};
use featuretiles_geometry::GeometryType;

/// Applies the geometry type override to one feature.
///
/// Features without geometry, or whose geometry cannot be converted, are dropped.
#[must_use]
pub fn coerce_feature(feature: Feature, geometry_type: Option<GeometryType>) -> Option<Feature> {
	feature.geometry.as_ref()?;
	match geometry_type {
		Some(target) => feature.coerce_to(target),
		None => Some(feature),
	}
}

/// Drains `cursor` into a render batch, coercing every feature.
pub fn collect_features(cursor: &mut dyn FeatureCursor, geometry_type: Option<GeometryType>) -> Vec<Feature> {
	features(cursor)
		.filter_map(|feature| coerce_feature(feature, geometry_type))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::VecCursor;
	use featuretiles_geometry::Geometry;
	use pretty_assertions::assert_eq;

	fn batch() -> Vec<Feature> {
		vec![
			Feature::new(1, Geometry::new_point_set(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]])),
			Feature::new(2, Geometry::new_point_set(vec![[5.0, 5.0]])),
			Feature {
				id: 3,
				..Feature::default()
			},
			Feature::new(4, Geometry::new_line_string(vec![[0.0, 0.0], [2.0, 2.0]])),
		]
	}

	#[test]
	fn without_override_only_drops_missing_geometry() {
		let collected = collect_features(&mut VecCursor::new(batch()), None);
		assert_eq!(collected.iter().map(|f| f.id).collect::<Vec<_>>(), vec![1, 2, 4]);
	}

	#[test]
	fn override_converts_and_drops_failures() {
		let collected = collect_features(&mut VecCursor::new(batch()), Some(GeometryType::LineString));
		assert_eq!(collected.iter().map(|f| f.id).collect::<Vec<_>>(), vec![1, 4]);
		assert!(collected.iter().all(|f| f.component_type() == Some(GeometryType::LineString)));
		assert_eq!(collected[1], batch()[3]);
	}

	#[test]
	fn coercion_is_idempotent() {
		let once = collect_features(&mut VecCursor::new(batch()), Some(GeometryType::Polygon));
		let twice = collect_features(&mut VecCursor::new(once.clone()), Some(GeometryType::Polygon));
		assert_eq!(once, twice);
	}
}

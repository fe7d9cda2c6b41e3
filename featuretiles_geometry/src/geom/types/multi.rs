use super::{Coordinates, GeometryTrait};
use crate::geom::Geometry;
use anyhow::{Context, Result, ensure};
use featuretiles_core::Bounds;
use std::fmt::Debug;

/// A collection of component geometries.
///
/// Components may be of different types; the type of the first component is what
/// the collection reports as its [component type](Geometry::component_type).
#[derive(Clone, Default, PartialEq)]
pub struct MultiGeometry(pub Vec<Geometry>);

impl MultiGeometry {
	#[must_use]
	pub fn new(components: Vec<Geometry>) -> Self {
		Self(components)
	}

	#[must_use]
	pub fn components(&self) -> &[Geometry] {
		&self.0
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}
}

impl GeometryTrait for MultiGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "multi geometry must have at least one component");
		for (index, component) in self.0.iter().enumerate() {
			component
				.verify()
				.with_context(|| format!("invalid component {index}"))?;
		}
		Ok(())
	}

	fn compute_bounds(&self) -> Option<Bounds> {
		self.0
			.iter()
			.filter_map(Geometry::compute_bounds)
			.reduce(|a, b| a.union_with(&b))
	}

	fn vertex_count(&self) -> usize {
		self.0.iter().map(Geometry::vertex_count).sum()
	}

	fn try_map_coords<F>(&self, f: &mut F) -> Option<Self>
	where
		F: FnMut(&Coordinates) -> Option<Coordinates>,
	{
		self.0
			.iter()
			.map(|component| component.try_map_coords(f))
			.collect::<Option<Vec<_>>>()
			.map(Self)
	}
}

impl Debug for MultiGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bounds_cover_all_components() {
		let multi = MultiGeometry::new(vec![
			Geometry::new_point_set(vec![[5.0, 5.0]]),
			Geometry::new_line_string(vec![[-1.0, 0.0], [2.0, 3.0]]),
		]);
		assert_eq!(multi.compute_bounds().unwrap().as_array(), [-1.0, 0.0, 5.0, 5.0]);
		assert_eq!(multi.vertex_count(), 3);
		assert_eq!(MultiGeometry::default().compute_bounds(), None);
	}

	#[test]
	fn verify_reports_component() {
		let multi = MultiGeometry::new(vec![Geometry::new_line_string(vec![[0.0, 0.0]])]);
		let err = multi.verify().unwrap_err();
		assert_eq!(format!("{err}"), "invalid component 0");
		assert!(MultiGeometry::default().verify().is_err());
	}
}

use super::{Coordinates, GeometryTrait, RingGeometry};
use anyhow::{Context, Result, ensure};
use featuretiles_core::Bounds;
use std::fmt::Debug;

/// A polygon made of an outer ring followed by zero or more holes.
#[derive(Clone, Default, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	#[must_use]
	pub fn new(rings: Vec<RingGeometry>) -> Self {
		Self(rings)
	}

	#[must_use]
	pub fn outer(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	#[must_use]
	pub fn holes(&self) -> &[RingGeometry] {
		self.0.get(1..).unwrap_or_default()
	}

	#[must_use]
	pub fn rings(&self) -> &[RingGeometry] {
		&self.0
	}
}

impl GeometryTrait for PolygonGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "polygon must have an outer ring");
		for (index, ring) in self.0.iter().enumerate() {
			ring.verify().with_context(|| format!("invalid ring {index}"))?;
		}
		Ok(())
	}

	fn compute_bounds(&self) -> Option<Bounds> {
		self.outer()?.compute_bounds()
	}

	fn vertex_count(&self) -> usize {
		self.0.iter().map(GeometryTrait::vertex_count).sum()
	}

	fn try_map_coords<F>(&self, f: &mut F) -> Option<Self>
	where
		F: FnMut(&Coordinates) -> Option<Coordinates>,
	{
		self.0
			.iter()
			.map(|ring| ring.try_map_coords(f))
			.collect::<Option<Vec<_>>>()
			.map(Self)
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl<T> From<Vec<Vec<T>>> for PolygonGeometry
where
	Coordinates: From<T>,
{
	fn from(value: Vec<Vec<T>>) -> Self {
		Self(value.into_iter().map(RingGeometry::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn square_with_hole() -> PolygonGeometry {
		PolygonGeometry::from(vec![
			vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]],
			vec![[2.0, 2.0], [2.0, 4.0], [4.0, 4.0], [4.0, 2.0], [2.0, 2.0]],
		])
	}

	#[test]
	fn outer_and_holes() {
		let polygon = square_with_hole();
		assert_eq!(polygon.outer().unwrap().points().len(), 5);
		assert_eq!(polygon.holes().len(), 1);
		assert!(PolygonGeometry::default().holes().is_empty());
	}

	#[test]
	fn bounds_follow_outer_ring() {
		assert_eq!(
			square_with_hole().compute_bounds().unwrap().as_array(),
			[0.0, 0.0, 10.0, 10.0]
		);
		assert_eq!(PolygonGeometry::default().compute_bounds(), None);
	}

	#[test]
	fn verify() {
		square_with_hole().verify().unwrap();
		assert!(PolygonGeometry::default().verify().is_err());
		let broken = PolygonGeometry::from(vec![vec![[0.0, 0.0], [1.0, 1.0]]]);
		assert!(broken.verify().is_err());
	}
}

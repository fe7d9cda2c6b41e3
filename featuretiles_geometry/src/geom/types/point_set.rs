use super::{Coordinates, GeometryTrait, bounds_of, traits::map_coord_vec};
use anyhow::{Result, ensure};
use featuretiles_core::Bounds;
use std::fmt::Debug;

/// An unordered set of points.
#[derive(Clone, Default, PartialEq)]
pub struct PointSetGeometry(pub Vec<Coordinates>);

impl PointSetGeometry {
	#[must_use]
	pub fn new(points: Vec<Coordinates>) -> Self {
		Self(points)
	}

	#[must_use]
	pub fn points(&self) -> &[Coordinates] {
		&self.0
	}
}

impl GeometryTrait for PointSetGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "point set must contain at least one point");
		Ok(())
	}

	fn compute_bounds(&self) -> Option<Bounds> {
		bounds_of(&self.0)
	}

	fn vertex_count(&self) -> usize {
		self.0.len()
	}

	fn try_map_coords<F>(&self, f: &mut F) -> Option<Self>
	where
		F: FnMut(&Coordinates) -> Option<Coordinates>,
	{
		map_coord_vec(&self.0, f).map(Self)
	}
}

impl Debug for PointSetGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl<T> From<Vec<T>> for PointSetGeometry
where
	Coordinates: From<T>,
{
	fn from(value: Vec<T>) -> Self {
		Self(value.into_iter().map(Coordinates::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verify_and_bounds() {
		let points = PointSetGeometry::from(vec![[1.0, 2.0], [3.0, -1.0]]);
		points.verify().unwrap();
		assert_eq!(points.vertex_count(), 2);
		assert_eq!(points.compute_bounds().unwrap().as_array(), [1.0, -1.0, 3.0, 2.0]);
		assert!(PointSetGeometry::default().verify().is_err());
	}

	#[test]
	fn map_coords() {
		let points = PointSetGeometry::from(vec![[1.0, 2.0]]);
		let shifted = points
			.try_map_coords(&mut |c| Some(Coordinates::new(c.x() + 1.0, c.y())))
			.unwrap();
		assert_eq!(shifted, PointSetGeometry::from(vec![[2.0, 2.0]]));
		assert_eq!(points.try_map_coords(&mut |_| None), None);
	}
}

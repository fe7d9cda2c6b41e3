use super::{Coordinates, GeometryTrait, bounds_of, traits::map_coord_vec};
use anyhow::{Result, ensure};
use featuretiles_core::Bounds;
use std::fmt::Debug;

/// An ordered sequence of at least two vertices.
#[derive(Clone, Default, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl LineStringGeometry {
	#[must_use]
	pub fn new(points: Vec<Coordinates>) -> Self {
		Self(points)
	}

	#[must_use]
	pub fn points(&self) -> &[Coordinates] {
		&self.0
	}
}

impl GeometryTrait for LineStringGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 2, "line string must have at least 2 points");
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

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl<T> From<Vec<T>> for LineStringGeometry
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
	fn verify() {
		assert!(LineStringGeometry::from(vec![[0.0, 0.0], [1.0, 1.0]]).verify().is_ok());
		assert!(LineStringGeometry::from(vec![[0.0, 0.0]]).verify().is_err());
	}
}

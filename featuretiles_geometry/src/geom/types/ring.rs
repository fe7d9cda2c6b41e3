use super::{Coordinates, GeometryTrait, bounds_of, traits::map_coord_vec};
use anyhow::{Result, ensure};
use featuretiles_core::Bounds;
use std::fmt::Debug;

/// A closed sequence of vertices bounding an area.
///
/// The closing vertex may be stored explicitly or implied; [`RingGeometry::closed_points`]
/// always returns the explicitly closed form.
#[derive(Clone, Default, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	#[must_use]
	pub fn new(points: Vec<Coordinates>) -> Self {
		Self(points)
	}

	#[must_use]
	pub fn points(&self) -> &[Coordinates] {
		&self.0
	}

	#[must_use]
	pub fn is_closed(&self) -> bool {
		self.0.len() > 1 && self.0.first() == self.0.last()
	}

	/// Returns the vertices with the first vertex repeated at the end if needed.
	#[must_use]
	pub fn closed_points(&self) -> Vec<Coordinates> {
		let mut points = self.0.clone();
		if !self.is_closed()
			&& let Some(first) = points.first().copied()
		{
			points.push(first);
		}
		points
	}
}

impl GeometryTrait for RingGeometry {
	fn verify(&self) -> Result<()> {
		let distinct = if self.is_closed() { self.0.len() - 1 } else { self.0.len() };
		ensure!(distinct >= 3, "ring must have at least 3 distinct points");
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

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl<T> From<Vec<T>> for RingGeometry
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
	fn closing() {
		let open = RingGeometry::from(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
		assert!(!open.is_closed());
		assert_eq!(open.closed_points().len(), 4);
		assert_eq!(open.closed_points()[3], Coordinates::new(0.0, 0.0));
		open.verify().unwrap();
	}

	#[test]
	fn verify_too_few_points() {
		let ring = RingGeometry::from(vec![[0.0, 0.0], [1.0, 0.0], [0.0, 0.0]]);
		assert!(ring.verify().is_err());
	}
}

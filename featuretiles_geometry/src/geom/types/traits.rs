use super::Coordinates;
use anyhow::Result;
use featuretiles_core::Bounds;
use std::fmt::Debug;

/// Common interface of all geometric primitives.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Checks structural validity, e.g. enough vertices for the type.
	fn verify(&self) -> Result<()>;

	/// Returns the envelope of all vertices, or `None` for an empty geometry.
	fn compute_bounds(&self) -> Option<Bounds>;

	/// Number of vertices over all parts.
	fn vertex_count(&self) -> usize;

	/// Builds a copy with every vertex passed through `f`.
	///
	/// Returns `None` as soon as `f` returns `None` for any vertex.
	fn try_map_coords<F>(&self, f: &mut F) -> Option<Self>
	where
		F: FnMut(&Coordinates) -> Option<Coordinates>;
}

pub(crate) fn map_coord_vec<F>(coords: &[Coordinates], f: &mut F) -> Option<Vec<Coordinates>>
where
	F: FnMut(&Coordinates) -> Option<Coordinates>,
{
	coords.iter().map(|c| f(c)).collect()
}

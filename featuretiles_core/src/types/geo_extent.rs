use crate::{Bounds, SpatialReference};
use std::fmt::{self, Debug, Display};

/// A bounding rectangle tagged with the spatial reference its coordinates are expressed in.
///
/// An extent may be *invalid*: that is how "no overlap" and "could not be transformed"
/// are represented. Invalid extents carry no bounds, and every operation that receives
/// an invalid extent produces an invalid extent.
///
/// Combining two extents (intersection, union) only makes sense when both share a
/// reference. Extents in different references have to be [transformed](GeoExtent::transform)
/// first; the `*_same_srs` operations return an invalid extent otherwise.
#[derive(Clone, PartialEq)]
pub struct GeoExtent {
	srs: SpatialReference,
	bounds: Bounds,
	valid: bool,
}

impl GeoExtent {
	#[must_use]
	pub fn new(srs: SpatialReference, bounds: Bounds) -> GeoExtent {
		GeoExtent {
			srs,
			bounds,
			valid: true,
		}
	}

	/// Returns the invalid extent.
	#[must_use]
	pub fn invalid() -> GeoExtent {
		GeoExtent {
			srs: SpatialReference::Unknown(String::new()),
			bounds: Bounds {
				x_min: 0.0,
				y_min: 0.0,
				x_max: 0.0,
				y_max: 0.0,
			},
			valid: false,
		}
	}

	#[must_use]
	pub fn is_valid(&self) -> bool {
		self.valid
	}

	#[must_use]
	pub fn srs(&self) -> &SpatialReference {
		&self.srs
	}

	/// Returns the bounds of a valid extent, `None` for an invalid one.
	#[must_use]
	pub fn bounds(&self) -> Option<&Bounds> {
		self.valid.then_some(&self.bounds)
	}

	/// Reprojects this extent into `target`.
	///
	/// The four corners are transformed and the envelope of the results is returned.
	/// If any corner cannot be transformed the result is invalid.
	#[must_use]
	pub fn transform(&self, target: &SpatialReference) -> GeoExtent {
		if !self.valid {
			return GeoExtent::invalid();
		}
		if &self.srs == target {
			return self.clone();
		}

		let b = &self.bounds;
		let corners = [
			(b.x_min, b.y_min),
			(b.x_max, b.y_min),
			(b.x_max, b.y_max),
			(b.x_min, b.y_max),
		];

		let mut envelope: Option<Bounds> = None;
		for (x, y) in corners {
			let Some((tx, ty)) = self.srs.transform_point(x, y, target) else {
				log::debug!("cannot transform {self} to {target}");
				return GeoExtent::invalid();
			};
			let Ok(point) = Bounds::new(tx, ty, tx, ty) else {
				return GeoExtent::invalid();
			};
			envelope = Some(match envelope {
				Some(e) => e.union_with(&point),
				None => point,
			});
		}

		match envelope {
			Some(bounds) => GeoExtent::new(target.clone(), bounds),
			None => GeoExtent::invalid(),
		}
	}

	/// Intersects two extents sharing the same reference.
	///
	/// Returns an invalid extent if either input is invalid, the references differ or
	/// the extents do not overlap.
	#[must_use]
	pub fn intersection_same_srs(&self, other: &GeoExtent) -> GeoExtent {
		if !self.valid || !other.valid {
			return GeoExtent::invalid();
		}
		if self.srs != other.srs {
			log::debug!("refusing to intersect {self} with {other}: spatial references differ");
			return GeoExtent::invalid();
		}
		match self.bounds.intersection(&other.bounds) {
			Some(bounds) => GeoExtent::new(self.srs.clone(), bounds),
			None => GeoExtent::invalid(),
		}
	}

	/// Unions two extents sharing the same reference.
	///
	/// An invalid operand is ignored; differing references yield an invalid extent.
	#[must_use]
	pub fn union_same_srs(&self, other: &GeoExtent) -> GeoExtent {
		match (self.valid, other.valid) {
			(false, false) => GeoExtent::invalid(),
			(true, false) => self.clone(),
			(false, true) => other.clone(),
			(true, true) if self.srs == other.srs => {
				GeoExtent::new(self.srs.clone(), self.bounds.union_with(&other.bounds))
			}
			(true, true) => GeoExtent::invalid(),
		}
	}
}

impl Debug for GeoExtent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "GeoExtent({self})")
	}
}

impl Display for GeoExtent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.valid {
			let b = &self.bounds;
			write!(f, "{}: [{}, {}, {}, {}]", self.srs, b.x_min, b.y_min, b.x_max, b.y_max)
		} else {
			f.write_str("invalid")
		}
	}
}

use anyhow::{Result, ensure};
use featuretiles_derive::context;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// An axis-aligned rectangle `[x_min, y_min, x_max, y_max]` without a spatial reference.
///
/// `Bounds` is the raw coordinate box used by queries and wrapped by [`GeoExtent`](crate::GeoExtent),
/// which adds the spatial reference. All operations on `Bounds` assume both operands are
/// expressed in the same coordinate system.
///
/// # Examples
///
/// ```
/// use featuretiles_core::Bounds;
///
/// let a = Bounds::new(-10.0, -5.0, 10.0, 5.0).unwrap();
/// let b = Bounds::new(-12.0, -3.0, 8.0, 6.0).unwrap();
/// assert_eq!(a.union_with(&b).as_array(), [-12.0, -5.0, 10.0, 6.0]);
/// assert_eq!(a.intersection(&b).unwrap().as_array(), [-10.0, -3.0, 8.0, 5.0]);
/// ```
#[derive(Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 4]")]
pub struct Bounds {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
}

impl Bounds {
	/// Creates new bounds, failing if a value is not finite or min exceeds max.
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Bounds> {
		Bounds {
			x_min,
			y_min,
			x_max,
			y_max,
		}
		.checked()
	}

	/// Creates bounds from two arbitrary corners, sorting the coordinates.
	pub fn from_corners(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Bounds> {
		Bounds::new(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
	}

	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.x_min, self.y_min, self.x_max, self.y_max]
	}

	#[must_use]
	pub fn width(&self) -> f64 {
		self.x_max - self.x_min
	}

	#[must_use]
	pub fn height(&self) -> f64 {
		self.y_max - self.y_min
	}

	/// Expands the bounds in place so that they include `other`.
	pub fn extend(&mut self, other: &Bounds) {
		self.x_min = self.x_min.min(other.x_min);
		self.y_min = self.y_min.min(other.y_min);
		self.x_max = self.x_max.max(other.x_max);
		self.y_max = self.y_max.max(other.y_max);
	}

	/// Returns the smallest bounds covering both `self` and `other`.
	#[must_use]
	pub fn union_with(mut self, other: &Bounds) -> Bounds {
		self.extend(other);
		self
	}

	/// Returns the overlapping area of `self` and `other`, or `None` if they are disjoint.
	///
	/// Bounds that only share an edge intersect in a degenerate (zero-width or
	/// zero-height) rectangle.
	#[must_use]
	pub fn intersection(&self, other: &Bounds) -> Option<Bounds> {
		let result = Bounds {
			x_min: self.x_min.max(other.x_min),
			y_min: self.y_min.max(other.y_min),
			x_max: self.x_max.min(other.x_max),
			y_max: self.y_max.min(other.y_max),
		};
		(result.x_min <= result.x_max && result.y_min <= result.y_max).then_some(result)
	}

	#[must_use]
	pub fn intersects(&self, other: &Bounds) -> bool {
		self.intersection(other).is_some()
	}

	fn checked(self) -> Result<Self> {
		ensure!(
			self.as_array().iter().all(|v| v.is_finite()),
			"bounds must be finite, got {self:?}"
		);
		ensure!(
			self.x_min <= self.x_max,
			"x_min ({}) must be <= x_max ({})",
			self.x_min,
			self.x_max
		);
		ensure!(
			self.y_min <= self.y_max,
			"y_min ({}) must be <= y_max ({})",
			self.y_min,
			self.y_max
		);
		Ok(self)
	}
}

impl Debug for Bounds {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Bounds({}, {}, {}, {})",
			self.x_min, self.y_min, self.x_max, self.y_max
		)
	}
}

impl TryFrom<Vec<f64>> for Bounds {
	type Error = anyhow::Error;

	#[context("Failed to convert {input:?} to Bounds")]
	fn try_from(input: Vec<f64>) -> Result<Self> {
		ensure!(
			input.len() == 4,
			"Bounds must have 4 elements (x_min, y_min, x_max, y_max)"
		);
		Bounds::new(input[0], input[1], input[2], input[3])
	}
}

impl TryFrom<[f64; 4]> for Bounds {
	type Error = anyhow::Error;

	fn try_from(input: [f64; 4]) -> Result<Self> {
		Bounds::new(input[0], input[1], input[2], input[3])
	}
}

impl From<Bounds> for [f64; 4] {
	fn from(bounds: Bounds) -> Self {
		bounds.as_array()
	}
}

use super::{
	Coordinates, GeometryTrait, GeometryType, LineStringGeometry, MultiGeometry, PointSetGeometry, PolygonGeometry,
	RingGeometry,
};
use anyhow::Result;
use featuretiles_core::Bounds;
use geo::Intersects;
use std::fmt::Debug;

/// A feature geometry: one of the primitive kinds or a collection of them.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	PointSet(PointSetGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	Multi(MultiGeometry),
}

impl Geometry {
	pub fn new_point_set<T>(value: Vec<T>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::PointSet(PointSetGeometry::from(value))
	}

	pub fn new_line_string<T>(value: Vec<T>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}

	pub fn new_polygon<T>(value: Vec<Vec<T>>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}

	#[must_use]
	pub fn new_multi(components: Vec<Geometry>) -> Self {
		Self::Multi(MultiGeometry::new(components))
	}

	/// Returns the primitive kind, or `None` for a collection.
	#[must_use]
	pub fn geometry_type(&self) -> Option<GeometryType> {
		match self {
			Geometry::PointSet(_) => Some(GeometryType::PointSet),
			Geometry::LineString(_) => Some(GeometryType::LineString),
			Geometry::Polygon(_) => Some(GeometryType::Polygon),
			Geometry::Multi(_) => None,
		}
	}

	/// Returns the primitive kind; for a collection the kind of its first component.
	///
	/// An empty collection has no component type.
	#[must_use]
	pub fn component_type(&self) -> Option<GeometryType> {
		match self {
			Geometry::Multi(multi) => multi.components().first().and_then(Geometry::component_type),
			other => other.geometry_type(),
		}
	}

	/// Builds a copy of this geometry expressed as `target`.
	///
	/// Conversions follow the vertex sequence: a point set becomes a line (needs two
	/// points) or a ring (needs three), a polygon yields its closed outer ring as a line
	/// or its outer vertices as points, and a line is reused as a ring or as points.
	/// Collections convert each component and drop those that cannot be converted.
	///
	/// Returns `None` if no meaningful geometry of the target type can be built.
	#[must_use]
	pub fn clone_as(&self, target: GeometryType) -> Option<Geometry> {
		if self.geometry_type() == Some(target) {
			return Some(self.clone());
		}
		match self {
			Geometry::Multi(multi) => {
				let components: Vec<Geometry> = multi
					.components()
					.iter()
					.filter_map(|component| component.clone_as(target))
					.collect();
				(!components.is_empty()).then(|| Geometry::new_multi(components))
			}
			Geometry::PointSet(points) => vertices_as(points.points(), target),
			Geometry::LineString(line) => vertices_as(line.points(), target),
			Geometry::Polygon(polygon) => {
				let outer = polygon.outer()?;
				match target {
					GeometryType::LineString => vertices_as(&outer.closed_points(), target),
					_ => vertices_as(outer.points(), target),
				}
			}
		}
	}

	pub fn verify(&self) -> Result<()> {
		match self {
			Geometry::PointSet(g) => g.verify(),
			Geometry::LineString(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
			Geometry::Multi(g) => g.verify(),
		}
	}

	#[must_use]
	pub fn compute_bounds(&self) -> Option<Bounds> {
		match self {
			Geometry::PointSet(g) => g.compute_bounds(),
			Geometry::LineString(g) => g.compute_bounds(),
			Geometry::Polygon(g) => g.compute_bounds(),
			Geometry::Multi(g) => g.compute_bounds(),
		}
	}

	#[must_use]
	pub fn vertex_count(&self) -> usize {
		match self {
			Geometry::PointSet(g) => g.vertex_count(),
			Geometry::LineString(g) => g.vertex_count(),
			Geometry::Polygon(g) => g.vertex_count(),
			Geometry::Multi(g) => g.vertex_count(),
		}
	}

	/// Builds a copy with every vertex passed through `f`, failing if any vertex fails.
	pub fn try_map_coords<F>(&self, f: &mut F) -> Option<Geometry>
	where
		F: FnMut(&Coordinates) -> Option<Coordinates>,
	{
		Some(match self {
			Geometry::PointSet(g) => Geometry::PointSet(g.try_map_coords(f)?),
			Geometry::LineString(g) => Geometry::LineString(g.try_map_coords(f)?),
			Geometry::Polygon(g) => Geometry::Polygon(g.try_map_coords(f)?),
			Geometry::Multi(g) => Geometry::Multi(g.try_map_coords(f)?),
		})
	}

	/// Converts into a [`geo::Geometry`] for exact spatial predicates.
	#[must_use]
	pub fn to_geo(&self) -> geo::Geometry<f64> {
		fn line(coords: &[Coordinates]) -> geo::LineString<f64> {
			geo::LineString::new(coords.iter().copied().map(geo::Coord::from).collect())
		}
		match self {
			Geometry::PointSet(g) => geo::Geometry::MultiPoint(geo::MultiPoint::new(
				g.points().iter().map(|c| geo::Point::new(c.x(), c.y())).collect(),
			)),
			Geometry::LineString(g) => geo::Geometry::LineString(line(g.points())),
			Geometry::Polygon(g) => {
				let mut rings = g.rings().iter().map(|ring| line(&ring.closed_points()));
				let exterior = rings.next().unwrap_or_else(|| geo::LineString::new(vec![]));
				geo::Geometry::Polygon(geo::Polygon::new(exterior, rings.collect()))
			}
			Geometry::Multi(g) => geo::Geometry::GeometryCollection(geo::GeometryCollection::new_from(
				g.components().iter().map(Geometry::to_geo).collect(),
			)),
		}
	}

	/// Exact test whether the geometry touches the rectangle `bounds`.
	#[must_use]
	pub fn intersects_bounds(&self, bounds: &Bounds) -> bool {
		let rect = geo::Rect::new(
			geo::Coord {
				x: bounds.x_min,
				y: bounds.y_min,
			},
			geo::Coord {
				x: bounds.x_max,
				y: bounds.y_max,
			},
		);
		self.to_geo().intersects(&rect)
	}
}

fn vertices_as(coords: &[Coordinates], target: GeometryType) -> Option<Geometry> {
	match target {
		GeometryType::PointSet => (!coords.is_empty()).then(|| Geometry::PointSet(PointSetGeometry::new(coords.to_vec()))),
		GeometryType::LineString => {
			(coords.len() >= 2).then(|| Geometry::LineString(LineStringGeometry::new(coords.to_vec())))
		}
		GeometryType::Polygon => {
			let ring = RingGeometry::new(coords.to_vec());
			ring
				.verify()
				.is_ok()
				.then(|| Geometry::Polygon(PolygonGeometry::new(vec![ring])))
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let (name, inner): (&str, &dyn Debug) = match self {
			Geometry::PointSet(g) => ("PointSet", g),
			Geometry::LineString(g) => ("LineString", g),
			Geometry::Polygon(g) => ("Polygon", g),
			Geometry::Multi(g) => ("Multi", g),
		};
		f.debug_tuple(name).field(inner).finish()
	}
}

use crate::geom::{Coordinates, GeoProperties, GeoValue, Geometry, PolygonGeometry, RingGeometry};
use anyhow::{Context, Result, anyhow, bail, ensure};
use serde_json::{Map, Value};

/// A feature as read from GeoJSON.
///
/// `foreign_members` keeps every top-level member other than `type`, `id`, `geometry`
/// and `properties`, so callers can pick up extensions such as embedded styles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoFeature {
	pub id: Option<GeoValue>,
	pub geometry: Option<Geometry>,
	pub properties: GeoProperties,
	pub foreign_members: Map<String, Value>,
}

/// Parses a GeoJSON document into its features.
///
/// Accepts a `FeatureCollection`, a single `Feature` or a bare geometry object, which
/// becomes one feature without properties.
pub fn parse_geojson(json: &str) -> Result<Vec<GeoFeature>> {
	let value: Value = serde_json::from_str(json).context("invalid JSON")?;
	parse_geojson_value(&value)
}

pub fn parse_geojson_value(value: &Value) -> Result<Vec<GeoFeature>> {
	match type_of(value)? {
		"FeatureCollection" => {
			let features = value
				.get("features")
				.and_then(Value::as_array)
				.ok_or_else(|| anyhow!("FeatureCollection must have a 'features' array"))?;
			features
				.iter()
				.enumerate()
				.map(|(index, feature)| parse_geojson_feature(feature).with_context(|| format!("feature {index}")))
				.collect()
		}
		"Feature" => Ok(vec![parse_geojson_feature(value)?]),
		_ => Ok(vec![GeoFeature {
			geometry: parse_geojson_geometry(value)?,
			..GeoFeature::default()
		}]),
	}
}

pub fn parse_geojson_feature(value: &Value) -> Result<GeoFeature> {
	let object = value.as_object().ok_or_else(|| anyhow!("feature must be an object"))?;
	ensure!(type_of(value)? == "Feature", "expected type 'Feature'");

	let mut feature = GeoFeature::default();
	for (key, member) in object {
		match key.as_str() {
			"type" => {}
			"id" => feature.id = Some(GeoValue::from_json(member)),
			"geometry" => feature.geometry = parse_geojson_geometry(member)?,
			"properties" => feature.properties = parse_geojson_properties(member)?,
			_ => {
				feature.foreign_members.insert(key.clone(), member.clone());
			}
		}
	}
	Ok(feature)
}

/// Parses a `properties` member; `null` yields empty properties.
pub fn parse_geojson_properties(value: &Value) -> Result<GeoProperties> {
	match value {
		Value::Null => Ok(GeoProperties::new()),
		Value::Object(map) => Ok(map
			.iter()
			.map(|(key, value)| (key.clone(), GeoValue::from_json(value)))
			.collect()),
		_ => bail!("properties must be an object or null"),
	}
}

/// Parses a geometry object; `null` yields no geometry.
///
/// `Point` and `MultiPoint` both become point sets; the multi variants and geometry
/// collections become collections.
pub fn parse_geojson_geometry(value: &Value) -> Result<Option<Geometry>> {
	if value.is_null() {
		return Ok(None);
	}
	let kind = type_of(value)?;
	if kind == "GeometryCollection" {
		let members = value
			.get("geometries")
			.and_then(Value::as_array)
			.ok_or_else(|| anyhow!("GeometryCollection must have a 'geometries' array"))?;
		let mut components = Vec::with_capacity(members.len());
		for member in members {
			if let Some(geometry) = parse_geojson_geometry(member)? {
				components.push(geometry);
			}
		}
		return Ok(Some(Geometry::new_multi(components)));
	}

	let coordinates = value
		.get("coordinates")
		.ok_or_else(|| anyhow!("{kind} must have 'coordinates'"))?;
	let geometry = match kind {
		"Point" => Geometry::new_point_set(vec![parse_position(coordinates)?]),
		"MultiPoint" => Geometry::new_point_set(parse_positions(coordinates)?),
		"LineString" => Geometry::new_line_string(parse_positions(coordinates)?),
		"MultiLineString" => Geometry::new_multi(
			as_array(coordinates)?
				.iter()
				.map(|line| Ok(Geometry::new_line_string(parse_positions(line)?)))
				.collect::<Result<_>>()?,
		),
		"Polygon" => Geometry::Polygon(parse_polygon(coordinates)?),
		"MultiPolygon" => Geometry::new_multi(
			as_array(coordinates)?
				.iter()
				.map(|polygon| Ok(Geometry::Polygon(parse_polygon(polygon)?)))
				.collect::<Result<_>>()?,
		),
		other => bail!("unknown geometry type '{other}'"),
	};
	Ok(Some(geometry))
}

fn type_of(value: &Value) -> Result<&str> {
	value
		.get("type")
		.and_then(Value::as_str)
		.ok_or_else(|| anyhow!("GeoJSON object must have a string 'type'"))
}

fn as_array(value: &Value) -> Result<&Vec<Value>> {
	value.as_array().ok_or_else(|| anyhow!("expected an array, got {value}"))
}

fn parse_position(value: &Value) -> Result<Coordinates> {
	let position = as_array(value)?;
	ensure!(position.len() >= 2, "position must have at least 2 numbers");
	let number = |v: &Value| v.as_f64().ok_or_else(|| anyhow!("expected a number, got {v}"));
	Ok(Coordinates::new(number(&position[0])?, number(&position[1])?))
}

fn parse_positions(value: &Value) -> Result<Vec<Coordinates>> {
	as_array(value)?.iter().map(parse_position).collect()
}

fn parse_polygon(value: &Value) -> Result<PolygonGeometry> {
	Ok(PolygonGeometry::new(
		as_array(value)?
			.iter()
			.map(|ring| Ok(RingGeometry::new(parse_positions(ring)?)))
			.collect::<Result<_>>()?,
	))
}

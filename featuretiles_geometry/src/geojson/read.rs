use super::{GeoFeature, parse_geojson, parse_geojson_feature};
use anyhow::{Context, Result, anyhow};
use std::io::{BufRead, Read};

/// Reads a complete GeoJSON document.
pub fn read_geojson(mut reader: impl Read) -> Result<Vec<GeoFeature>> {
	let mut buffer = String::new();
	reader.read_to_string(&mut buffer)?;
	parse_geojson(&buffer)
}

fn process_line(line: std::io::Result<String>, index: usize) -> Result<Option<GeoFeature>> {
	match line {
		Ok(line) if line.trim().is_empty() => Ok(None),
		Ok(line) => {
			let value: serde_json::Value =
				serde_json::from_str(&line).with_context(|| format!("line {}: invalid JSON", index + 1))?;
			parse_geojson_feature(&value)
				.map(Some)
				.with_context(|| format!("line {}", index + 1))
		}
		Err(e) => Err(anyhow!("line {}: {}", index + 1, e)),
	}
}

/// Reads newline-delimited GeoJSON, one feature per line. Blank lines are skipped.
pub fn read_ndgeojson_iter(reader: impl BufRead) -> impl Iterator<Item = Result<GeoFeature>> {
	reader
		.lines()
		.enumerate()
		.filter_map(|(index, line)| process_line(line, index).transpose())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::GeometryType;
	use std::io::{BufReader, Cursor};

	#[test]
	fn read_collection() -> Result<()> {
		let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{}}]}"#;
		let features = read_geojson(Cursor::new(json))?;
		assert_eq!(features.len(), 1);
		assert_eq!(
			features[0].geometry.as_ref().unwrap().geometry_type(),
			Some(GeometryType::PointSet)
		);
		Ok(())
	}

	#[test]
	fn read_lines_skipping_blanks() {
		let json = r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,1]},"properties":{}}"#;
		let input = format!("{json}\n\n{json}");
		let results: Vec<_> = read_ndgeojson_iter(BufReader::new(Cursor::new(input))).collect();
		assert_eq!(results.len(), 2);
		assert!(results.iter().all(Result::is_ok));
	}

	#[test]
	fn read_lines_reports_line_number() {
		let input = "{\"type\":\"Feature\",\"geometry\":null}\n{oops}";
		let results: Vec<_> = read_ndgeojson_iter(BufReader::new(Cursor::new(input))).collect();
		assert!(results[0].is_ok());
		let err = results[1].as_ref().unwrap_err();
		assert_eq!(err.to_string(), "line 2: invalid JSON");
	}
}

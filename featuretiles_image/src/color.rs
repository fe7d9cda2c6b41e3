//! Color parsing.

use anyhow::{Result, anyhow, bail};
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Parses a hex color string into RGB or RGBA bytes.
///
/// Supports `RGB`, `RGBA`, `RRGGBB` and `RRGGBBAA`, with an optional leading `#`.
///
/// ```
/// use featuretiles_image::color::parse_hex_color;
///
/// assert_eq!(parse_hex_color("FF5733").unwrap(), vec![255, 87, 51]);
/// assert_eq!(parse_hex_color("#F00").unwrap(), vec![255, 0, 0]);
/// assert_eq!(parse_hex_color("FF573380").unwrap(), vec![255, 87, 51, 128]);
/// ```
pub fn parse_hex_color(hex: &str) -> Result<Vec<u8>> {
	let hex = hex.trim().trim_start_matches('#');

	let expanded: String = match hex.len() {
		3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
		6 | 8 => hex.to_string(),
		_ => bail!("Invalid hex color '{hex}': expected 3, 4, 6, or 8 hex characters"),
	};
	if !expanded.is_ascii() {
		bail!("Invalid hex color '{hex}': non-ASCII characters");
	}

	(0..expanded.len())
		.step_by(2)
		.map(|i| u8::from_str_radix(&expanded[i..i + 2], 16))
		.collect::<Result<Vec<u8>, _>>()
		.map_err(|e| anyhow!("Invalid hex color '{hex}': {e}"))
}

/// An RGBA color, written as `#rrggbbaa` in configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub Rgba<u8>);

impl Color {
	pub const WHITE: Color = Color(Rgba([255, 255, 255, 255]));
	pub const BLACK: Color = Color(Rgba([0, 0, 0, 255]));

	#[must_use]
	pub fn new(r: u8, g: u8, b: u8, a: u8) -> Color {
		Color(Rgba([r, g, b, a]))
	}

	#[must_use]
	pub fn rgba(&self) -> Rgba<u8> {
		self.0
	}

	#[must_use]
	pub fn alpha(&self) -> u8 {
		self.0.0[3]
	}

	#[must_use]
	pub fn is_transparent(&self) -> bool {
		self.alpha() == 0
	}
}

impl FromStr for Color {
	type Err = anyhow::Error;

	fn from_str(input: &str) -> Result<Self> {
		let bytes = parse_hex_color(input)?;
		Ok(match bytes.as_slice() {
			[r, g, b] => Color::new(*r, *g, *b, 255),
			[r, g, b, a] => Color::new(*r, *g, *b, *a),
			_ => bail!("Invalid color '{input}'"),
		})
	}
}

impl TryFrom<String> for Color {
	type Error = anyhow::Error;

	fn try_from(value: String) -> Result<Self> {
		value.parse()
	}
}

impl From<Color> for String {
	fn from(value: Color) -> Self {
		value.to_string()
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let [r, g, b, a] = self.0.0;
		if a == 255 {
			write!(f, "#{r:02x}{g:02x}{b:02x}")
		} else {
			write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
		}
	}
}

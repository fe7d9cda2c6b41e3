use std::{
	cmp::Ordering,
	fmt::{Debug, Display},
};

/// An attribute value attached to a feature.
#[derive(Clone, PartialEq)]
pub enum GeoValue {
	Bool(bool),
	Double(f64),
	Int(i64),
	Null,
	String(String),
	UInt(u64),
}

impl GeoValue {
	/// Converts a JSON scalar. Arrays and objects are kept as their JSON text.
	#[must_use]
	pub fn from_json(value: &serde_json::Value) -> GeoValue {
		use serde_json::Value;
		match value {
			Value::Null => GeoValue::Null,
			Value::Bool(b) => GeoValue::Bool(*b),
			Value::Number(n) => {
				if let Some(u) = n.as_u64() {
					GeoValue::UInt(u)
				} else if let Some(i) = n.as_i64() {
					GeoValue::Int(i)
				} else {
					GeoValue::Double(n.as_f64().unwrap_or(f64::NAN))
				}
			}
			Value::String(s) => GeoValue::String(s.clone()),
			Value::Array(_) | Value::Object(_) => GeoValue::String(value.to_string()),
		}
	}

	/// Returns the numeric value of numeric variants.
	#[must_use]
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			GeoValue::Double(v) => Some(*v),
			GeoValue::Int(v) => Some(*v as f64),
			GeoValue::UInt(v) => Some(*v as f64),
			_ => None,
		}
	}

	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, GeoValue::Null)
	}

	/// Compares two values the way filter expressions do.
	///
	/// Numbers compare numerically regardless of their variant, strings lexically and
	/// booleans with `false < true`. Values of unrelated kinds are not comparable.
	#[must_use]
	pub fn compare(&self, other: &GeoValue) -> Option<Ordering> {
		match (self, other) {
			(GeoValue::String(a), GeoValue::String(b)) => Some(a.cmp(b)),
			(GeoValue::Bool(a), GeoValue::Bool(b)) => Some(a.cmp(b)),
			(GeoValue::Null, GeoValue::Null) => Some(Ordering::Equal),
			(GeoValue::Int(a), GeoValue::Int(b)) => Some(a.cmp(b)),
			(GeoValue::UInt(a), GeoValue::UInt(b)) => Some(a.cmp(b)),
			(a, b) => a.as_f64()?.partial_cmp(&b.as_f64()?),
		}
	}
}

impl Debug for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
			Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Null => f.write_str("Null"),
		}
	}
}

impl Display for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GeoValue::Bool(v) => write!(f, "{v}"),
			GeoValue::Double(v) => write!(f, "{v}"),
			GeoValue::Int(v) => write!(f, "{v}"),
			GeoValue::Null => f.write_str("null"),
			GeoValue::String(v) => f.write_str(v),
			GeoValue::UInt(v) => write!(f, "{v}"),
		}
	}
}

impl From<&str> for GeoValue {
	fn from(value: &str) -> Self {
		GeoValue::String(value.to_string())
	}
}

impl From<String> for GeoValue {
	fn from(value: String) -> Self {
		GeoValue::String(value)
	}
}

impl From<i32> for GeoValue {
	fn from(value: i32) -> Self {
		if value < 0 {
			GeoValue::Int(i64::from(value))
		} else {
			GeoValue::UInt(u64::from(value.unsigned_abs()))
		}
	}
}

impl From<i64> for GeoValue {
	fn from(value: i64) -> Self {
		GeoValue::Int(value)
	}
}

impl From<u64> for GeoValue {
	fn from(value: u64) -> Self {
		GeoValue::UInt(value)
	}
}

impl From<f64> for GeoValue {
	fn from(value: f64) -> Self {
		GeoValue::Double(value)
	}
}

impl From<bool> for GeoValue {
	fn from(value: bool) -> Self {
		GeoValue::Bool(value)
	}
}

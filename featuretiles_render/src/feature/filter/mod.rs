//! Attribute filter expressions.
//!
//! ```text
//! kind = 'river' AND (width >= 10 OR name != null)
//! ```
//!
//! A comparison tests one attribute against a literal. `AND` binds tighter than `OR`;
//! keywords are case-insensitive. Attributes missing from a feature only match `= null`.

mod parser;

use anyhow::Result;
use featuretiles_geometry::{GeoProperties, GeoValue};
use std::{cmp::Ordering, fmt::Display};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
	Eq,
	Ne,
	Lt,
	Le,
	Gt,
	Ge,
}

impl Comparison {
	fn holds(self, ordering: Option<Ordering>) -> bool {
		match self {
			Comparison::Eq => ordering == Some(Ordering::Equal),
			Comparison::Ne => ordering != Some(Ordering::Equal),
			Comparison::Lt => ordering == Some(Ordering::Less),
			Comparison::Le => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
			Comparison::Gt => ordering == Some(Ordering::Greater),
			Comparison::Ge => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
		}
	}

	fn symbol(self) -> &'static str {
		match self {
			Comparison::Eq => "=",
			Comparison::Ne => "!=",
			Comparison::Lt => "<",
			Comparison::Le => "<=",
			Comparison::Gt => ">",
			Comparison::Ge => ">=",
		}
	}
}

/// A parsed filter expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
	Compare {
		attribute: String,
		comparison: Comparison,
		value: GeoValue,
	},
	And(Box<Filter>, Box<Filter>),
	Or(Box<Filter>, Box<Filter>),
}

impl Filter {
	pub fn parse(input: &str) -> Result<Filter> {
		parser::parse_filter(input)
	}

	/// Evaluates the filter against a feature's attributes.
	#[must_use]
	pub fn matches(&self, properties: &GeoProperties) -> bool {
		match self {
			Filter::And(a, b) => a.matches(properties) && b.matches(properties),
			Filter::Or(a, b) => a.matches(properties) || b.matches(properties),
			Filter::Compare {
				attribute,
				comparison,
				value,
			} => match properties.get(attribute) {
				None => *comparison == Comparison::Eq && value.is_null(),
				Some(actual) => comparison.holds(actual.compare(value)),
			},
		}
	}
}

impl Display for Filter {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Filter::And(a, b) => write!(f, "({a} AND {b})"),
			Filter::Or(a, b) => write!(f, "({a} OR {b})"),
			Filter::Compare {
				attribute,
				comparison,
				value,
			} => match value {
				GeoValue::String(s) => write!(f, "{attribute} {} '{}'", comparison.symbol(), s.replace('\'', "''")),
				other => write!(f, "{attribute} {} {other}", comparison.symbol()),
			},
		}
	}
}

use super::filter::Filter;
use anyhow::Result;
use featuretiles_core::Bounds;
use serde::{Deserialize, Serialize};

/// Selects features by area and attributes.
///
/// Both parts are optional; an empty query selects every feature.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Query {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bounds: Option<Bounds>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub expression: Option<String>,
}

impl Query {
	#[must_use]
	pub fn with_bounds(bounds: Bounds) -> Query {
		Query {
			bounds: Some(bounds),
			expression: None,
		}
	}

	#[must_use]
	pub fn with_expression(expression: &str) -> Query {
		Query {
			bounds: None,
			expression: Some(expression.to_string()),
		}
	}

	/// Grows the bounds to cover `bounds`, or adopts them if none are set.
	pub fn union_bounds(&mut self, bounds: &Bounds) {
		self.bounds = Some(match self.bounds {
			Some(current) => current.union_with(bounds),
			None => *bounds,
		});
	}

	/// Combines two queries: bounds are unioned, expressions must both hold.
	#[must_use]
	pub fn merged_with(&self, other: &Query) -> Query {
		let mut merged = self.clone();
		if let Some(bounds) = &other.bounds {
			merged.union_bounds(bounds);
		}
		merged.expression = match (&self.expression, &other.expression) {
			(Some(a), Some(b)) => Some(format!("({a}) AND ({b})")),
			(a, b) => a.clone().or_else(|| b.clone()),
		};
		merged
	}

	/// Parses the attribute expression, if any.
	pub fn filter(&self) -> Result<Option<Filter>> {
		self.expression.as_deref().map(Filter::parse).transpose()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn bounds(x0: f64, y0: f64, x1: f64, y1: f64) -> Bounds {
		Bounds::new(x0, y0, x1, y1).unwrap()
	}

	#[test]
	fn union_bounds_adopts_when_unset() {
		let mut query = Query::default();
		query.union_bounds(&bounds(0.0, 0.0, 1.0, 1.0));
		assert_eq!(query.bounds, Some(bounds(0.0, 0.0, 1.0, 1.0)));
		query.union_bounds(&bounds(2.0, -1.0, 3.0, 0.5));
		assert_eq!(query.bounds, Some(bounds(0.0, -1.0, 3.0, 1.0)));
	}

	#[test]
	fn merged_with_inherits_bounds() {
		let a = Query::with_expression("kind = 'road'");
		let b = Query::with_bounds(bounds(0.0, 0.0, 1.0, 1.0));
		let merged = a.merged_with(&b);
		assert_eq!(merged.bounds, b.bounds);
		assert_eq!(merged.expression.as_deref(), Some("kind = 'road'"));
	}

	#[test]
	fn merged_with_combines_expressions() {
		let a = Query::with_expression("a = 1");
		let b = Query::with_expression("b = 2 OR c = 3");
		assert_eq!(
			a.merged_with(&b).expression.as_deref(),
			Some("(a = 1) AND (b = 2 OR c = 3)")
		);
	}

	#[test]
	fn filter_parsing() {
		assert!(Query::default().filter().unwrap().is_none());
		assert!(Query::with_expression("a = 1").filter().unwrap().is_some());
		assert!(Query::with_expression("a = ").filter().is_err());
	}

	#[test]
	fn serde_yaml() {
		let query: Query = serde_yaml_ng::from_str("bounds: [0, 0, 10, 5]\nexpression: \"class = 'A'\"").unwrap();
		assert_eq!(query.bounds, Some(bounds(0.0, 0.0, 10.0, 5.0)));
		assert_eq!(query.expression.as_deref(), Some("class = 'A'"));
		assert_eq!(serde_yaml_ng::to_string(&Query::default()).unwrap(), "{}\n");
	}
}

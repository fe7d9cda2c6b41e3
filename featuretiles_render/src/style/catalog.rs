use crate::{Style, StyleSelector};
use serde::{Deserialize, Serialize};

/// Named styles plus the selectors that apply them.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleCatalog {
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub styles: Vec<Style>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub selectors: Vec<StyleSelector>,
	/// Name of the style used when there are no selectors.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub default_style: Option<String>,
}

impl StyleCatalog {
	#[must_use]
	pub fn selectors(&self) -> &[StyleSelector] {
		&self.selectors
	}

	#[must_use]
	pub fn get_style(&self, name: &str) -> Option<&Style> {
		self.styles.iter().find(|style| style.name == name)
	}

	/// Returns the configured default style, else the first style, else an empty one.
	#[must_use]
	pub fn default_style(&self) -> Style {
		self.default_style
			.as_deref()
			.and_then(|name| self.get_style(name))
			.or_else(|| self.styles.first())
			.cloned()
			.unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Query;
	use pretty_assertions::assert_eq;

	fn catalog() -> StyleCatalog {
		StyleCatalog {
			styles: vec![Style::named("a"), Style::named("b")],
			selectors: vec![StyleSelector::new("b", Query::default())],
			default_style: None,
		}
	}

	#[test]
	fn get_style() {
		assert_eq!(catalog().get_style("b"), Some(&Style::named("b")));
		assert_eq!(catalog().get_style("c"), None);
	}

	#[test]
	fn default_style_resolution() {
		let mut catalog = catalog();
		assert_eq!(catalog.default_style().name, "a");
		catalog.default_style = Some("b".to_string());
		assert_eq!(catalog.default_style().name, "b");
		catalog.default_style = Some("missing".to_string());
		assert_eq!(catalog.default_style().name, "a");
		assert_eq!(StyleCatalog::default().default_style(), Style::default());
	}

	#[test]
	fn yaml_round_trip() {
		let yaml = "styles:\n- name: a\n- name: b\nselectors:\n- name: b\n  query: {}\n";
		let parsed: StyleCatalog = serde_yaml_ng::from_str(yaml).unwrap();
		assert_eq!(parsed, catalog());
		let written = serde_yaml_ng::to_string(&parsed).unwrap();
		assert_eq!(serde_yaml_ng::from_str::<StyleCatalog>(&written).unwrap(), parsed);
	}
}

use crate::StyleCatalog;
use std::fmt::Display;

/// How the styles of a tile are determined. Exactly one policy applies per tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StylePolicy {
	/// Every feature is rendered on its own with the style it carries.
	Embedded,
	/// One batch per catalog selector, in catalog order.
	Selectors(usize),
	/// A single batch with the catalog's default style.
	DefaultStyle,
	/// A single batch with an empty style; there is no catalog.
	Unstyled,
}

impl StylePolicy {
	/// Chooses the policy; embedded styles win over any catalog.
	#[must_use]
	pub fn select(embedded_styles: bool, catalog: Option<&StyleCatalog>) -> StylePolicy {
		match catalog {
			_ if embedded_styles => StylePolicy::Embedded,
			Some(catalog) if !catalog.selectors().is_empty() => StylePolicy::Selectors(catalog.selectors().len()),
			Some(_) => StylePolicy::DefaultStyle,
			None => StylePolicy::Unstyled,
		}
	}
}

impl Display for StylePolicy {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			StylePolicy::Embedded => f.write_str("embedded styles"),
			StylePolicy::Selectors(count) => write!(f, "{count} style selector(s)"),
			StylePolicy::DefaultStyle => f.write_str("default style"),
			StylePolicy::Unstyled => f.write_str("unstyled"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Query, StyleSelector};
	use rstest::rstest;

	fn with_selectors(count: usize) -> StyleCatalog {
		StyleCatalog {
			selectors: (0..count)
				.map(|i| StyleSelector::new(&format!("s{i}"), Query::default()))
				.collect(),
			..StyleCatalog::default()
		}
	}

	#[rstest]
	#[case(true, Some(with_selectors(2)), StylePolicy::Embedded)]
	#[case(true, None, StylePolicy::Embedded)]
	#[case(false, Some(with_selectors(2)), StylePolicy::Selectors(2))]
	#[case(false, Some(with_selectors(0)), StylePolicy::DefaultStyle)]
	#[case(false, None, StylePolicy::Unstyled)]
	fn select(#[case] embedded: bool, #[case] catalog: Option<StyleCatalog>, #[case] expected: StylePolicy) {
		assert_eq!(StylePolicy::select(embedded, catalog.as_ref()), expected);
	}

	#[test]
	fn display() {
		assert_eq!(StylePolicy::Selectors(3).to_string(), "3 style selector(s)");
		assert_eq!(StylePolicy::Unstyled.to_string(), "unstyled");
	}
}

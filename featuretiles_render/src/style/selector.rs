use crate::Query;
use serde::{Deserialize, Serialize};

/// Pairs a style with the query picking the features it applies to.
///
/// The style is looked up by `style` if given, otherwise by the selector's own name.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StyleSelector {
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub style: Option<String>,
	#[serde(default)]
	pub query: Query,
}

impl StyleSelector {
	#[must_use]
	pub fn new(name: &str, query: Query) -> StyleSelector {
		StyleSelector {
			name: name.to_string(),
			style: None,
			query,
		}
	}

	/// Name of the catalog style this selector renders with.
	#[must_use]
	pub fn selected_style_name(&self) -> &str {
		self.style.as_deref().unwrap_or(&self.name)
	}
}

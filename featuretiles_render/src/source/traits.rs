use crate::{FeatureCursor, FeatureProfile, Query};
use anyhow::Result;
use std::{fmt::Debug, path::Path};

/// A store of features that can be queried by area and attributes.
///
/// Cursors created by one source must not share mutable state: every cursor hands
/// out its own feature values, so concurrent tile renders may query the same source.
pub trait FeatureSource: Debug + Send + Sync {
	/// Prepares the source. Relative locations are resolved against `reference_uri`,
	/// the directory of the configuration that declared the source.
	fn initialize(&mut self, reference_uri: Option<&Path>) -> Result<()>;

	/// Returns the profile, or `None` until the source is initialized or if it is empty.
	fn feature_profile(&self) -> Option<&FeatureProfile>;

	/// Returns `true` if every feature carries its own style.
	fn has_embedded_styles(&self) -> bool {
		false
	}

	/// Starts a query. Each call returns a fresh cursor over fresh feature values.
	fn create_feature_cursor(&self, query: &Query) -> Result<Box<dyn FeatureCursor>>;
}

use super::Feature;
use std::collections::VecDeque;

/// A forward-only sequence of features produced by one query.
///
/// Callers check [`has_more`](FeatureCursor::has_more) before asking for the next
/// feature. A cursor cannot be restarted; query the source again instead.
pub trait FeatureCursor: Send {
	fn has_more(&self) -> bool;

	fn next_feature(&mut self) -> Option<Feature>;
}

/// Cursor over features that are already in memory.
#[derive(Debug, Default)]
pub struct VecCursor {
	features: VecDeque<Feature>,
}

impl VecCursor {
	#[must_use]
	pub fn new(features: Vec<Feature>) -> VecCursor {
		VecCursor {
			features: features.into(),
		}
	}
}

impl FeatureCursor for VecCursor {
	fn has_more(&self) -> bool {
		!self.features.is_empty()
	}

	fn next_feature(&mut self) -> Option<Feature> {
		self.features.pop_front()
	}
}

/// Iterator adapter draining a cursor.
pub struct CursorFeatures<'a> {
	cursor: &'a mut dyn FeatureCursor,
}

impl Iterator for CursorFeatures<'_> {
	type Item = Feature;

	fn next(&mut self) -> Option<Feature> {
		while self.cursor.has_more() {
			if let Some(feature) = self.cursor.next_feature() {
				return Some(feature);
			}
		}
		None
	}
}

/// Iterates over the remaining features of `cursor`.
pub fn features(cursor: &mut dyn FeatureCursor) -> CursorFeatures<'_> {
	CursorFeatures { cursor }
}

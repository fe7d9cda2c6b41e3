//! Progress reporting for tile rendering.
//!
//! The renderer accepts an optional [`ProgressCallback`] and reports how many of a
//! tile's render batches are done. Whatever a callback does with that information
//! (display, logging, bookkeeping) is up to the caller.
//!
//! # Examples
//!
//! ```rust
//! use featuretiles_core::progress::{ProgressCallback, ProgressCounter};
//!
//! let progress = ProgressCounter::default();
//! progress.report(1, 3);
//! progress.report(2, 3);
//! assert_eq!(progress.position(), 2);
//! assert_eq!(progress.reports(), 2);
//! ```

mod progress_counter;

pub use progress_counter::ProgressCounter;

/// Receives progress updates from a running render.
pub trait ProgressCallback: Send + Sync {
	/// Called after a unit of work completes; `position` of `total` units are done.
	/// A `total` of 0 means the number of units is not known in advance.
	fn report(&self, position: u64, total: u64);
}

use super::ProgressCallback;
use std::sync::atomic::{AtomicU64, Ordering};

/// A progress callback that remembers the latest position and counts updates.
///
/// Safe to share between threads; every field is updated atomically.
#[derive(Debug, Default)]
pub struct ProgressCounter {
	position: AtomicU64,
	total: AtomicU64,
	reports: AtomicU64,
}

impl ProgressCounter {
	#[must_use]
	pub fn position(&self) -> u64 {
		self.position.load(Ordering::Relaxed)
	}

	#[must_use]
	pub fn total(&self) -> u64 {
		self.total.load(Ordering::Relaxed)
	}

	/// Number of updates received so far.
	#[must_use]
	pub fn reports(&self) -> u64 {
		self.reports.load(Ordering::Relaxed)
	}
}

impl ProgressCallback for ProgressCounter {
	fn report(&self, position: u64, total: u64) {
		log::trace!("progress {position}/{total}");
		self.position.store(position, Ordering::Relaxed);
		self.total.store(total, Ordering::Relaxed);
		self.reports.fetch_add(1, Ordering::Relaxed);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::{sync::Arc, thread};

	#[test]
	fn tracks_latest_update() {
		let progress = ProgressCounter::default();
		assert_eq!(progress.reports(), 0);
		progress.report(1, 2);
		assert_eq!((progress.position(), progress.total()), (1, 2));
		progress.report(2, 2);
		assert_eq!((progress.position(), progress.total()), (2, 2));
		assert_eq!(progress.reports(), 2);
	}

	#[test]
	fn shared_between_threads() {
		let progress = Arc::new(ProgressCounter::default());
		let handles: Vec<_> = (0..4)
			.map(|i| {
				let progress = Arc::clone(&progress);
				thread::spawn(move || progress.report(i, 4))
			})
			.collect();
		for handle in handles {
			handle.join().unwrap();
		}
		assert_eq!(progress.reports(), 4);
	}
}

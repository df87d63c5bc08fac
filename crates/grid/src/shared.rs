use std::sync::Arc;

use parking_lot::RwLock;

use crate::coord::CellIndex;
use crate::error::Result;
use crate::policy::PlaceOutcome;
use crate::registry::GridLocationRegistry;
use crate::snapshot::GridSnapshot;

#[cfg(test)]
mod tests;

/// Cloneable handle to a registry shared across threads.
///
/// The whole registry sits behind one `RwLock`, so each mutation updates the
/// forward and reverse indices under a single write guard. Readers return
/// owned values because no guard escapes a method.
#[derive(Debug, Clone)]
pub struct SharedGridRegistry {
	inner: Arc<RwLock<GridLocationRegistry>>,
}

impl SharedGridRegistry {
	/// Wraps an existing registry.
	pub fn new(registry: GridLocationRegistry) -> Self {
		Self {
			inner: Arc::new(RwLock::new(registry)),
		}
	}

	/// See [`GridLocationRegistry::try_place`].
	pub fn try_place(&self, name: &str, row: i64, column: i64) -> Result<PlaceOutcome> {
		self.inner.write().try_place(name, row, column)
	}

	/// See [`GridLocationRegistry::place`].
	pub fn place(&self, name: &str, row: i64, column: i64) -> bool {
		self.inner.write().place(name, row, column)
	}

	/// See [`GridLocationRegistry::remove_by_name`].
	pub fn remove_by_name(&self, name: &str) -> bool {
		self.inner.write().remove_by_name(name)
	}

	/// See [`GridLocationRegistry::remove_by_location`].
	pub fn remove_by_location(&self, row: i64, column: i64) -> bool {
		self.inner.write().remove_by_location(row, column)
	}

	/// See [`GridLocationRegistry::entity_at`].
	pub fn entity_at(&self, row: i64, column: i64) -> Option<String> {
		self.inner.read().entity_at(row, column).map(str::to_owned)
	}

	/// See [`GridLocationRegistry::locations_of`].
	pub fn locations_of(&self, name: &str) -> Vec<CellIndex> {
		self.inner.read().locations_of(name).to_vec()
	}

	/// See [`GridLocationRegistry::count`].
	pub fn count(&self) -> usize {
		self.inner.read().count()
	}

	/// Consistent point-in-time copy of the occupancy.
	pub fn snapshot(&self) -> GridSnapshot {
		self.inner.read().snapshot()
	}

	/// Runs `f` with shared access to the registry.
	pub fn with<R>(&self, f: impl FnOnce(&GridLocationRegistry) -> R) -> R {
		f(&self.inner.read())
	}

	/// Runs `f` with exclusive access, for compound updates that must not interleave.
	pub fn with_mut<R>(&self, f: impl FnOnce(&mut GridLocationRegistry) -> R) -> R {
		f(&mut self.inner.write())
	}
}

impl From<GridLocationRegistry> for SharedGridRegistry {
	fn from(registry: GridLocationRegistry) -> Self {
		Self::new(registry)
	}
}

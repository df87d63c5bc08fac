//! Grid occupancy registry.
//!
//! Maps entity names onto the cells of a fixed-size square grid. Every
//! operation validates its inputs before touching state, so a refused call
//! never leaves a partial update behind.

use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::config::GridConfig;
use crate::coord::{CellIndex, GridCoord, GridSize};
use crate::error::{GridError, Result};
use crate::policy::{OverwritePolicy, PlaceOutcome};
use crate::snapshot::GridSnapshot;


/// Forward and reverse occupancy indices.
///
/// Both maps MUST change together: every `(cell, name)` in `cells` has `cell`
/// in `entities[name]`, every cell listed in `entities` maps back to that
/// name, and no entry in `entities` has an empty cell list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct OccupancyState {
	/// Cell to occupant.
	cells: FxHashMap<CellIndex, String>,
	/// Occupant to its cells in placement order. Names keep first-placement order.
	entities: IndexMap<String, Vec<CellIndex>>,
}

impl OccupancyState {
	fn occupant(&self, cell: CellIndex) -> Option<&str> {
		self.cells.get(&cell).map(String::as_str)
	}

	/// Records `name` at a cell known to be empty.
	fn insert(&mut self, name: &str, cell: CellIndex) {
		debug_assert!(!self.cells.contains_key(&cell));
		self.cells.insert(cell, name.to_owned());
		match self.entities.get_mut(name) {
			Some(locations) => locations.push(cell),
			None => {
				self.entities.insert(name.to_owned(), vec![cell]);
			}
		}
	}

	/// Clears one cell, dropping the occupant's reverse entry once it holds nothing.
	fn evict_cell(&mut self, cell: CellIndex) -> Option<String> {
		let name = self.cells.remove(&cell)?;
		if let Some(locations) = self.entities.get_mut(&name) {
			locations.retain(|&c| c != cell);
			if locations.is_empty() {
				self.entities.shift_remove(&name);
			}
		}
		Some(name)
	}

	/// Clears every cell held by `name`.
	fn evict_entity(&mut self, name: &str) -> Option<Vec<CellIndex>> {
		let locations = self.entities.shift_remove(name)?;
		for cell in &locations {
			self.cells.remove(cell);
		}
		Some(locations)
	}
}

/// Occupancy bookkeeping for one `size x size` grid.
///
/// A cell holds at most one entity name; a name may hold any number of cells.
/// The `try_*` methods report why an operation was refused, while the plain
/// forms collapse refusals into `false` / `None` for callers that treat them
/// as ordinary negative answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GridSnapshot", try_from = "GridSnapshot")]
pub struct GridLocationRegistry {
	size: GridSize,
	policy: OverwritePolicy,
	state: OccupancyState,
}

impl GridLocationRegistry {
	/// Creates an empty registry for a grid of side `size` that rejects overwrites.
	pub fn new(size: usize) -> Result<Self> {
		Self::with_policy(size, OverwritePolicy::default())
	}

	/// Creates an empty registry with an explicit overwrite policy.
	pub fn with_policy(size: usize, policy: OverwritePolicy) -> Result<Self> {
		Ok(Self {
			size: GridSize::new(size)?,
			policy,
			state: OccupancyState::default(),
		})
	}

	/// Creates an empty registry from a loaded [`GridConfig`].
	pub fn from_config(config: &GridConfig) -> Result<Self> {
		Self::with_policy(config.size, config.overwrite)
	}

	/// Grid side length.
	pub fn size(&self) -> GridSize {
		self.size
	}

	/// Total number of cells.
	pub fn capacity(&self) -> usize {
		self.size.capacity()
	}

	/// Current overwrite policy.
	pub fn policy(&self) -> OverwritePolicy {
		self.policy
	}

	/// Changes the overwrite policy for subsequent placements.
	pub fn set_policy(&mut self, policy: OverwritePolicy) {
		self.policy = policy;
	}

	/// Places `name` at `(row, column)`.
	///
	/// # Errors
	///
	/// - [`GridError::EmptyName`] for an empty name
	/// - [`GridError::InvalidCoordinate`] when either component is outside `[0, size)`
	/// - [`GridError::OccupiedCell`] when another entity holds the cell and the
	///   policy is [`OverwritePolicy::Reject`]
	pub fn try_place(&mut self, name: &str, row: i64, column: i64) -> Result<PlaceOutcome> {
		if name.is_empty() {
			return Err(GridError::EmptyName);
		}
		let cell = self.size.cell_at(row, column)?;
		self.try_place_cell(name, cell)
	}

	/// Places `name` at a linear cell index.
	pub fn try_place_cell(&mut self, name: &str, cell: CellIndex) -> Result<PlaceOutcome> {
		if name.is_empty() {
			return Err(GridError::EmptyName);
		}
		let cell = self.size.check_cell(cell)?;

		let occupied = match self.state.occupant(cell) {
			None => false,
			Some(occupant) if occupant == name => return Ok(PlaceOutcome::Unchanged),
			Some(occupant) if self.policy == OverwritePolicy::Reject => {
				trace!(name, %cell, occupant, "placement rejected: cell occupied");
				return Err(GridError::OccupiedCell {
					cell,
					occupant: occupant.to_owned(),
				});
			}
			Some(_) => true,
		};

		if occupied {
			let previous = self.state.evict_cell(cell).unwrap_or_default();
			self.state.insert(name, cell);
			warn!(name, %cell, previous = %previous, "replaced cell occupant");
			return Ok(PlaceOutcome::Replaced { previous });
		}

		self.state.insert(name, cell);
		debug!(name, %cell, "placed entity");
		Ok(PlaceOutcome::Inserted)
	}

	/// Places `name` at `(row, column)`, returning whether the cell now holds it.
	pub fn place(&mut self, name: &str, row: i64, column: i64) -> bool {
		self.try_place(name, row, column).is_ok()
	}

	/// Removes every cell occupancy held by `name`, returning the freed cells.
	pub fn try_remove_by_name(&mut self, name: &str) -> Result<Vec<CellIndex>> {
		if name.is_empty() {
			return Err(GridError::EmptyName);
		}
		let freed = self
			.state
			.evict_entity(name)
			.ok_or_else(|| GridError::UnknownEntity(name.to_owned()))?;
		debug!(name, cells = freed.len(), "removed entity from grid");
		Ok(freed)
	}

	/// Removes `name` from the grid; true iff it held at least one cell.
	pub fn remove_by_name(&mut self, name: &str) -> bool {
		self.try_remove_by_name(name).is_ok()
	}

	/// Clears the occupant of `(row, column)`, returning its name.
	pub fn try_remove_by_location(&mut self, row: i64, column: i64) -> Result<String> {
		let cell = self.size.cell_at(row, column)?;
		let name = self.state.evict_cell(cell).ok_or(GridError::EmptyCell(cell))?;
		debug!(name = %name, %cell, "cleared cell");
		Ok(name)
	}

	/// Clears `(row, column)`; false for out-of-range or empty cells.
	pub fn remove_by_location(&mut self, row: i64, column: i64) -> bool {
		self.try_remove_by_location(row, column).is_ok()
	}

	/// Occupant of `(row, column)`, or `None` if empty or out of range.
	pub fn entity_at(&self, row: i64, column: i64) -> Option<&str> {
		let cell = self.size.cell_at(row, column).ok()?;
		self.state.occupant(cell)
	}

	/// Occupant of a linear cell index.
	pub fn entity_at_cell(&self, cell: CellIndex) -> Option<&str> {
		self.state.occupant(cell)
	}

	/// Cells held by `name` in placement order; empty for unknown or empty names.
	pub fn locations_of(&self, name: &str) -> &[CellIndex] {
		self.state
			.entities
			.get(name)
			.map(Vec::as_slice)
			.unwrap_or_default()
	}

	/// Number of occupied cells (not distinct entities).
	pub fn count(&self) -> usize {
		self.state.cells.len()
	}

	/// Returns true if no cell is occupied.
	pub fn is_empty(&self) -> bool {
		self.state.cells.is_empty()
	}

	/// Returns true if `name` occupies at least one cell.
	pub fn contains(&self, name: &str) -> bool {
		self.state.entities.contains_key(name)
	}

	/// Occupying names in first-placement order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.state.entities.keys().map(String::as_str)
	}

	/// Occupied cells in ascending index order.
	pub fn iter(&self) -> impl Iterator<Item = (CellIndex, &str)> {
		let mut occupied: Vec<_> = self
			.state
			.cells
			.iter()
			.map(|(&cell, name)| (cell, name.as_str()))
			.collect();
		occupied.sort_unstable_by_key(|&(cell, _)| cell);
		occupied.into_iter()
	}

	/// Converts a cell index back to `(row, column)`.
	pub fn coord_of(&self, cell: CellIndex) -> Result<GridCoord> {
		self.size.coord_of(cell)
	}

	/// Empties the grid.
	pub fn clear(&mut self) {
		self.state = OccupancyState::default();
	}

	/// Captures the occupancy as a serializable value.
	pub fn snapshot(&self) -> GridSnapshot {
		GridSnapshot::capture(
			self.size,
			self.policy,
			self.state
				.entities
				.iter()
				.map(|(name, cells)| (name.as_str(), cells.as_slice())),
		)
	}

	/// Rebuilds a registry from a snapshot, refusing anything that would break
	/// single occupancy or the bounds of the grid.
	pub fn restore(snapshot: GridSnapshot) -> Result<Self> {
		let mut registry = Self::with_policy(snapshot.size.get(), OverwritePolicy::Reject)?;
		for placement in &snapshot.placements {
			if placement.cells.is_empty() {
				return Err(GridError::Inconsistent(format!(
					"entity {:?} has no cells",
					placement.name
				)));
			}
			// Earlier entries always hold at least one cell, so a known name is a repeat.
			if registry.contains(&placement.name) {
				return Err(GridError::Inconsistent(format!(
					"entity {:?} listed twice",
					placement.name
				)));
			}
			for &cell in &placement.cells {
				match registry.try_place_cell(&placement.name, cell) {
					Ok(PlaceOutcome::Inserted) => {}
					Ok(_) => {
						return Err(GridError::Inconsistent(format!(
							"cell {cell} listed twice for {:?}",
							placement.name
						)));
					}
					Err(GridError::OccupiedCell { cell, occupant }) => {
						return Err(GridError::Inconsistent(format!(
							"cell {cell} claimed by both {occupant:?} and {:?}",
							placement.name
						)));
					}
					Err(e) => return Err(e),
				}
			}
		}
		registry.policy = snapshot.overwrite;
		Ok(registry)
	}

	/// Panics if the forward and reverse indices disagree.
	#[cfg(test)]
	pub(crate) fn assert_consistent(&self) {
		for (cell, name) in &self.state.cells {
			let locations = self
				.state
				.entities
				.get(name)
				.unwrap_or_else(|| panic!("{name:?} at {cell} missing from reverse index"));
			assert!(locations.contains(cell), "{name:?} reverse entry lacks {cell}");
		}
		let mut listed = 0;
		for (name, locations) in &self.state.entities {
			assert!(!locations.is_empty(), "{name:?} has an empty reverse entry");
			for cell in locations {
				assert_eq!(self.state.occupant(*cell), Some(name.as_str()));
				listed += 1;
			}
		}
		assert_eq!(listed, self.state.cells.len());
	}
}

/// Hashes occupied cells in ascending order, so registries that compare equal
/// hash equally regardless of map iteration order.
impl Hash for GridLocationRegistry {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.size.hash(state);
		self.policy.hash(state);
		self.count().hash(state);
		for (cell, name) in self.iter() {
			cell.hash(state);
			name.hash(state);
		}
	}
}

impl From<GridLocationRegistry> for GridSnapshot {
	fn from(registry: GridLocationRegistry) -> Self {
		registry.snapshot()
	}
}

impl TryFrom<GridSnapshot> for GridLocationRegistry {
	type Error = GridError;

	fn try_from(snapshot: GridSnapshot) -> Result<Self> {
		Self::restore(snapshot)
	}
}

//! Reflector assemblies.
//!
//! A reflector assembly is a square lattice of reflector rods. Rods are first
//! added to the catalog by name, then placed on one or more lattice cells.
//! Removing a rod from the catalog also clears every cell it occupied.

use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sfr_grid::{CellIndex, GridError, GridLocationRegistry, PlaceOutcome};
use tracing::debug;

use crate::config::AssemblyConfig;
use crate::error::{AssemblyError, Result};
use crate::rod::Rod;


const DEFAULT_NAME: &str = "SFR Reflector Assembly 1";
const DEFAULT_DESCRIPTION: &str = "SFR Reflector Assembly 1's Description";
const DEFAULT_ID: u32 = 1;
const DEFAULT_ROD_PITCH: f64 = 1.0;

/// A square lattice of reflector rods.
///
/// Equality and hashing cover the descriptive fields, the rod pitch, the
/// catalog and the grid occupancy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAssembly")]
pub struct ReflectorAssembly {
	name: String,
	description: String,
	id: u32,
	rod_pitch: f64,
	rods: IndexMap<String, Rod>,
	grid: GridLocationRegistry,
}

/// Unvalidated wire form.
#[derive(Deserialize)]
struct RawAssembly {
	name: String,
	description: String,
	id: u32,
	rod_pitch: f64,
	rods: IndexMap<String, Rod>,
	grid: GridLocationRegistry,
}

impl TryFrom<RawAssembly> for ReflectorAssembly {
	type Error = AssemblyError;

	fn try_from(raw: RawAssembly) -> Result<Self> {
		if !valid_pitch(raw.rod_pitch) {
			return Err(AssemblyError::NegativePitch(raw.rod_pitch));
		}
		for (key, rod) in &raw.rods {
			if key != rod.name() {
				return Err(GridError::Inconsistent(format!(
					"catalog key {key:?} holds rod {:?}",
					rod.name()
				))
				.into());
			}
		}
		if let Some(stray) = raw.grid.names().find(|name| !raw.rods.contains_key(*name)) {
			return Err(AssemblyError::UnknownRod(stray.to_owned()));
		}
		Ok(Self {
			name: raw.name,
			description: raw.description,
			id: raw.id,
			rod_pitch: raw.rod_pitch,
			rods: raw.rods,
			grid: raw.grid,
		})
	}
}

/// Rod pitch is zero or greater; NaN never passes.
pub(crate) fn valid_pitch(pitch: f64) -> bool {
	pitch >= 0.0
}

// Pitch is never NaN, so `==` on it is reflexive.
impl Eq for ReflectorAssembly {}

impl Hash for ReflectorAssembly {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.name.hash(state);
		self.description.hash(state);
		self.id.hash(state);
		// -0.0 == 0.0, so both must hash alike.
		let pitch = if self.rod_pitch == 0.0 { 0.0 } else { self.rod_pitch };
		pitch.to_bits().hash(state);
		// Catalog equality ignores insertion order.
		let mut rods: Vec<_> = self.rods.values().collect();
		rods.sort_unstable_by(|a, b| a.name().cmp(b.name()));
		rods.hash(state);
		self.grid.hash(state);
	}
}

impl ReflectorAssembly {
	/// Creates an empty `size x size` assembly with default name, description,
	/// id and a rod pitch of 1.0.
	pub fn new(size: usize) -> Result<Self> {
		Ok(Self::with_grid(GridLocationRegistry::new(size)?))
	}

	fn with_grid(grid: GridLocationRegistry) -> Self {
		Self {
			name: DEFAULT_NAME.to_owned(),
			description: DEFAULT_DESCRIPTION.to_owned(),
			id: DEFAULT_ID,
			rod_pitch: DEFAULT_ROD_PITCH,
			rods: IndexMap::new(),
			grid,
		}
	}

	/// Creates an empty assembly with the given name.
	pub fn with_name(name: impl Into<String>, size: usize) -> Result<Self> {
		let mut assembly = Self::new(size)?;
		assembly.name = name.into();
		Ok(assembly)
	}

	/// Creates an empty assembly from a loaded [`AssemblyConfig`].
	pub fn from_config(config: &AssemblyConfig) -> Result<Self> {
		let mut assembly = Self::with_grid(GridLocationRegistry::from_config(&config.grid)?);
		if let Some(name) = &config.name {
			assembly.name.clone_from(name);
		}
		if let Some(description) = &config.description {
			assembly.description.clone_from(description);
		}
		if let Some(id) = config.id {
			assembly.id = id;
		}
		if let Some(pitch) = config.rod_pitch {
			assembly.try_set_rod_pitch(pitch)?;
		}
		Ok(assembly)
	}

	/// Display name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Replaces the display name.
	pub fn set_name(&mut self, name: impl Into<String>) {
		self.name = name.into();
	}

	/// Free-form description.
	pub fn description(&self) -> &str {
		&self.description
	}

	/// Replaces the description.
	pub fn set_description(&mut self, description: impl Into<String>) {
		self.description = description.into();
	}

	/// Numeric id.
	pub fn id(&self) -> u32 {
		self.id
	}

	/// Replaces the numeric id.
	pub fn set_id(&mut self, id: u32) {
		self.id = id;
	}

	/// Side length of the lattice.
	pub fn size(&self) -> usize {
		self.grid.size().get()
	}

	/// Read access to the occupancy grid.
	pub fn grid(&self) -> &GridLocationRegistry {
		&self.grid
	}

	/// Distance between rod centers.
	pub fn rod_pitch(&self) -> f64 {
		self.rod_pitch
	}

	/// Sets the rod pitch; negative and NaN values are refused.
	pub fn try_set_rod_pitch(&mut self, rod_pitch: f64) -> Result<()> {
		if !valid_pitch(rod_pitch) {
			return Err(AssemblyError::NegativePitch(rod_pitch));
		}
		self.rod_pitch = rod_pitch;
		Ok(())
	}

	/// Sets the rod pitch, returning false if it was refused.
	pub fn set_rod_pitch(&mut self, rod_pitch: f64) -> bool {
		self.try_set_rod_pitch(rod_pitch).is_ok()
	}

	/// Adds a rod to the catalog. The rod is not placed anywhere yet.
	pub fn try_add_rod(&mut self, rod: Rod) -> Result<()> {
		if rod.name().is_empty() {
			return Err(AssemblyError::EmptyName);
		}
		if self.rods.contains_key(rod.name()) {
			return Err(AssemblyError::DuplicateRod(rod.name().to_owned()));
		}
		debug!(assembly = %self.name, rod = rod.name(), "added rod");
		self.rods.insert(rod.name().to_owned(), rod);
		Ok(())
	}

	/// Adds a rod to the catalog, returning false for duplicates and empty names.
	pub fn add_rod(&mut self, rod: Rod) -> bool {
		self.try_add_rod(rod).is_ok()
	}

	/// Places a catalogued rod at `(row, column)`.
	pub fn try_set_rod_location(&mut self, name: &str, row: i64, column: i64) -> Result<PlaceOutcome> {
		if name.is_empty() {
			return Err(AssemblyError::EmptyName);
		}
		if !self.rods.contains_key(name) {
			return Err(AssemblyError::UnknownRod(name.to_owned()));
		}
		self.grid
			.try_place(name, row, column)
			.map_err(AssemblyError::from)
	}

	/// Places a catalogued rod at `(row, column)`, returning whether it now sits there.
	pub fn set_rod_location(&mut self, name: &str, row: i64, column: i64) -> bool {
		self.try_set_rod_location(name, row, column).is_ok()
	}

	/// Removes a rod from the catalog and from every cell it occupied.
	pub fn try_remove_rod(&mut self, name: &str) -> Result<Rod> {
		if name.is_empty() {
			return Err(AssemblyError::EmptyName);
		}
		let rod = self
			.rods
			.shift_remove(name)
			.ok_or_else(|| AssemblyError::UnknownRod(name.to_owned()))?;
		let freed = self.grid.try_remove_by_name(name).map(|cells| cells.len()).unwrap_or(0);
		debug!(assembly = %self.name, rod = name, freed, "removed rod");
		Ok(rod)
	}

	/// Removes a rod entirely; false for empty or unknown names.
	pub fn remove_rod(&mut self, name: &str) -> bool {
		self.try_remove_rod(name).is_ok()
	}

	/// Clears one cell; the rod stays in the catalog.
	pub fn remove_rod_from_location(&mut self, row: i64, column: i64) -> bool {
		self.grid.remove_by_location(row, column)
	}

	/// Catalogued rod names in insertion order.
	pub fn rod_names(&self) -> impl Iterator<Item = &str> {
		self.rods.keys().map(String::as_str)
	}

	/// Catalogued rod with this name, placed or not.
	pub fn rod_by_name(&self, name: &str) -> Option<&Rod> {
		self.rods.get(name)
	}

	/// Rod at `(row, column)`, or `None` for empty or out-of-range cells.
	pub fn rod_by_location(&self, row: i64, column: i64) -> Option<&Rod> {
		self.grid.entity_at(row, column).and_then(|name| self.rods.get(name))
	}

	/// Cells occupied by `name` in placement order.
	pub fn rod_locations(&self, name: &str) -> &[CellIndex] {
		self.grid.locations_of(name)
	}

	/// Number of catalogued rods, placed or not.
	pub fn number_of_rods(&self) -> usize {
		self.rods.len()
	}
}

use serde::{Deserialize, Serialize};

use crate::coord::{CellIndex, GridSize};
use crate::policy::OverwritePolicy;

/// All cells held by one entity, in placement order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
	/// Entity name.
	pub name: String,
	/// Occupied cells in placement order.
	pub cells: Vec<CellIndex>,
}

/// Owned, serializable image of a [`GridLocationRegistry`](crate::GridLocationRegistry).
///
/// Restoring goes through [`GridLocationRegistry::restore`](crate::GridLocationRegistry::restore),
/// which re-validates everything, so a hand-edited snapshot cannot produce a
/// registry with broken occupancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
	/// Grid side length.
	pub size: GridSize,
	/// Overwrite policy in effect.
	#[serde(default)]
	pub overwrite: OverwritePolicy,
	/// Entities in first-placement order.
	#[serde(default)]
	pub placements: Vec<Placement>,
}

impl GridSnapshot {
	pub(crate) fn capture<'a>(
		size: GridSize,
		overwrite: OverwritePolicy,
		entities: impl IntoIterator<Item = (&'a str, &'a [CellIndex])>,
	) -> Self {
		Self {
			size,
			overwrite,
			placements: entities
				.into_iter()
				.map(|(name, cells)| Placement {
					name: name.to_owned(),
					cells: cells.to_vec(),
				})
				.collect(),
		}
	}
}

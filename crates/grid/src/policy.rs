use serde::{Deserialize, Serialize};

/// What `place` does when the target cell already holds a different entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverwritePolicy {
	/// Refuse the placement and leave the grid untouched.
	#[default]
	Reject,
	/// Evict the previous occupant from the cell (and from its reverse entry),
	/// then record the new one.
	Replace,
}

/// Result of a successful placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaceOutcome {
	/// The cell was empty; occupancy recorded.
	Inserted,
	/// The cell already held this same entity; nothing changed.
	Unchanged,
	/// The cell held another entity which was evicted under
	/// [`OverwritePolicy::Replace`].
	Replaced {
		/// Name of the evicted entity.
		previous: String,
	},
}

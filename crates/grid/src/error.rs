//! Error types for grid operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::coord::CellIndex;

/// Reasons a grid operation can be refused.
///
/// None of these are faults: the boolean and optional forms of the registry
/// API collapse them into ordinary negative results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
	/// Row or column outside `[0, size)`.
	#[error("coordinate ({row}, {column}) is outside a {size}x{size} grid")]
	InvalidCoordinate {
		/// Requested row.
		row: i64,
		/// Requested column.
		column: i64,
		/// Grid side length.
		size: usize,
	},

	/// Linear cell index outside `[0, size*size)`.
	#[error("cell {cell} is outside a grid of {capacity} cells")]
	InvalidCell {
		/// Requested cell.
		cell: CellIndex,
		/// Number of cells in the grid.
		capacity: usize,
	},

	/// Entity names must be non-empty.
	#[error("entity name is empty")]
	EmptyName,

	/// The name does not occupy any cell.
	#[error("entity {0:?} does not occupy any cell")]
	UnknownEntity(String),

	/// Placement refused because another entity holds the cell.
	#[error("cell {cell} is already occupied by {occupant:?}")]
	OccupiedCell {
		/// Target cell.
		cell: CellIndex,
		/// Current occupant.
		occupant: String,
	},

	/// The target cell is in range but holds nothing.
	#[error("cell {0} is empty")]
	EmptyCell(CellIndex),

	/// Zero side length, or `size*size` does not fit in `usize`.
	#[error("invalid grid size: {0}")]
	InvalidSize(usize),

	/// A snapshot could not be turned into a consistent registry.
	#[error("inconsistent grid state: {0}")]
	Inconsistent(String),
}

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {}: {error}", path.display())]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		#[source]
		error: std::io::Error,
	},

	/// The document parsed but describes an unusable grid.
	#[error(transparent)]
	Grid(#[from] GridError),
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

#[cfg(test)]
mod tests;

/// A linearized cell position, `row * size + column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellIndex(pub usize);

impl CellIndex {
	/// Returns the raw index.
	#[inline]
	pub fn get(self) -> usize {
		self.0
	}
}

impl fmt::Display for CellIndex {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<CellIndex> for usize {
	fn from(cell: CellIndex) -> Self {
		cell.0
	}
}

/// A validated `(row, column)` pair.
///
/// Only [`GridSize`] hands these out, so holding one implies both components
/// were checked against that grid's side length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCoord {
	/// Zero-based row.
	pub row: usize,
	/// Zero-based column.
	pub column: usize,
}

/// Side length of a square grid.
///
/// Always non-zero, and `size * size` always fits in `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct GridSize(usize);

impl GridSize {
	/// Validates a side length.
	pub fn new(size: usize) -> Result<Self> {
		match size.checked_mul(size) {
			Some(_) if size > 0 => Ok(Self(size)),
			_ => Err(GridError::InvalidSize(size)),
		}
	}

	/// Side length.
	#[inline]
	pub fn get(self) -> usize {
		self.0
	}

	/// Total number of cells, `size * size`.
	#[inline]
	pub fn capacity(self) -> usize {
		self.0 * self.0
	}

	/// Checks `row` and `column` against `[0, size)`.
	pub fn coord(self, row: i64, column: i64) -> Result<GridCoord> {
		let in_range = |v: i64| usize::try_from(v).ok().filter(|&v| v < self.0);
		match (in_range(row), in_range(column)) {
			(Some(row), Some(column)) => Ok(GridCoord { row, column }),
			_ => Err(GridError::InvalidCoordinate {
				row,
				column,
				size: self.0,
			}),
		}
	}

	/// Linearizes a coordinate previously validated by this size.
	#[inline]
	pub fn cell(self, coord: GridCoord) -> CellIndex {
		debug_assert!(coord.row < self.0 && coord.column < self.0);
		CellIndex(coord.row * self.0 + coord.column)
	}

	/// Validates and linearizes in one step.
	pub fn cell_at(self, row: i64, column: i64) -> Result<CellIndex> {
		self.coord(row, column).map(|coord| self.cell(coord))
	}

	/// Checks a raw cell index against `[0, size*size)`.
	pub fn check_cell(self, cell: CellIndex) -> Result<CellIndex> {
		if cell.0 < self.capacity() {
			Ok(cell)
		} else {
			Err(GridError::InvalidCell {
				cell,
				capacity: self.capacity(),
			})
		}
	}

	/// Inverse of [`GridSize::cell`]: `row = cell / size`, `column = cell % size`.
	pub fn coord_of(self, cell: CellIndex) -> Result<GridCoord> {
		let cell = self.check_cell(cell)?;
		Ok(GridCoord {
			row: cell.0 / self.0,
			column: cell.0 % self.0,
		})
	}
}

impl TryFrom<usize> for GridSize {
	type Error = GridError;

	fn try_from(size: usize) -> Result<Self> {
		Self::new(size)
	}
}

impl From<GridSize> for usize {
	fn from(size: GridSize) -> Self {
		size.0
	}
}

impl fmt::Display for GridSize {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{0}x{0}", self.0)
	}
}

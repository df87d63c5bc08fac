//! Error types for assembly operations.

use sfr_grid::{ConfigError, GridError};
use thiserror::Error;

/// Errors that can occur when building or editing an assembly.
#[derive(Debug, Error)]
pub enum AssemblyError {
	/// The underlying grid refused the operation.
	#[error(transparent)]
	Grid(#[from] GridError),

	/// Configuration could not be read or parsed.
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// No rod with this name is in the catalog.
	#[error("unknown rod: {0:?}")]
	UnknownRod(String),

	/// A rod with this name is already in the catalog.
	#[error("duplicate rod: {0:?}")]
	DuplicateRod(String),

	/// Rod names must be non-empty.
	#[error("rod name is empty")]
	EmptyName,

	/// Rod pitch must be zero or greater.
	#[error("invalid rod pitch: {0}")]
	NegativePitch(f64),
}

/// Result type for assembly operations.
pub type Result<T> = std::result::Result<T, AssemblyError>;

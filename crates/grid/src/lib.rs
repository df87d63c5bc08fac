//! Occupancy bookkeeping for fixed-size square grids.
//!
//! A [`GridLocationRegistry`] maps named entities (rods, pins) onto the cells
//! of a `size x size` grid. A cell holds at most one entity, while an entity
//! may occupy any number of cells. The forward (cell to name) and reverse
//! (name to cells) indices are kept inside a single owned state so they can
//! only ever change together.

/// Configuration loading for grid registries.
pub mod config;
/// Grid coordinates and linear cell indices.
pub mod coord;
/// Error types for grid operations.
pub mod error;
/// Overwrite policy for occupied cells.
pub mod policy;
/// The occupancy registry itself.
pub mod registry;
/// Lock-protected registry handle for multi-threaded owners.
pub mod shared;
/// Serializable registry snapshots.
pub mod snapshot;

pub use config::GridConfig;
pub use coord::{CellIndex, GridCoord, GridSize};
pub use error::{ConfigError, GridError, Result};
pub use policy::{OverwritePolicy, PlaceOutcome};
pub use registry::GridLocationRegistry;
pub use shared::SharedGridRegistry;
pub use snapshot::{GridSnapshot, Placement};

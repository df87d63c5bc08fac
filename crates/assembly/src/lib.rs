//! SFR assemblies built on the grid occupancy registry.
//!
//! An assembly owns a catalog of rods keyed by name and a
//! [`GridLocationRegistry`](sfr_grid::GridLocationRegistry) recording where
//! those rods sit. A rod must be in the catalog before it can be placed.

/// Assembly configuration.
pub mod config;
/// Error types for assembly operations.
pub mod error;
/// Reflector assemblies.
pub mod reflector;
/// Rod descriptors.
pub mod rod;

pub use config::AssemblyConfig;
pub use error::{AssemblyError, Result};
pub use reflector::ReflectorAssembly;
pub use rod::Rod;

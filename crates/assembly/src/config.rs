//! Assembly configuration.
//!
//! ```toml
//! name = "Reflector A"
//! rod_pitch = 0.85
//!
//! [grid]
//! size = 17
//! overwrite = "reject"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use sfr_grid::GridConfig;
use sfr_grid::config::{parse_toml, read_config};

use crate::error::{AssemblyError, Result};
use crate::reflector::valid_pitch;

#[cfg(test)]
mod tests;

/// Settings for building a [`ReflectorAssembly`](crate::ReflectorAssembly).
///
/// Omitted fields keep the assembly defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssemblyConfig {
	/// Display name.
	#[serde(default)]
	pub name: Option<String>,
	/// Free-form description.
	#[serde(default)]
	pub description: Option<String>,
	/// Numeric id.
	#[serde(default)]
	pub id: Option<u32>,
	/// Distance between rod centers.
	#[serde(default)]
	pub rod_pitch: Option<f64>,
	/// Grid layout.
	pub grid: GridConfig,
}

impl AssemblyConfig {
	/// Creates a config with only the grid side length set.
	pub fn new(size: usize) -> Self {
		Self {
			name: None,
			description: None,
			id: None,
			rod_pitch: None,
			grid: GridConfig::new(size),
		}
	}

	/// Parses and validates a TOML document.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		let config: Self = parse_toml(input)?;
		config.grid.validate()?;
		if let Some(pitch) = config.rod_pitch.filter(|&p| !valid_pitch(p)) {
			return Err(AssemblyError::NegativePitch(pitch));
		}
		Ok(config)
	}

	/// Reads and parses a TOML file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		Self::from_toml_str(&read_config(path)?)
	}
}

//! Grid configuration.
//!
//! ```toml
//! size = 17
//! overwrite = "reject"   # or "replace"
//! ```

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::coord::GridSize;
use crate::error::{ConfigError, Result};
use crate::policy::OverwritePolicy;

#[cfg(test)]
mod tests;

/// Settings for a [`GridLocationRegistry`](crate::GridLocationRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
	/// Side length of the square grid.
	pub size: usize,
	/// What placement does when a cell is already occupied.
	#[serde(default)]
	pub overwrite: OverwritePolicy,
}

impl GridConfig {
	/// Creates a config with the default (rejecting) overwrite policy.
	pub fn new(size: usize) -> Self {
		Self {
			size,
			overwrite: OverwritePolicy::default(),
		}
	}

	/// Parses and validates a TOML document.
	pub fn from_toml_str(input: &str) -> std::result::Result<Self, ConfigError> {
		let config: Self = parse_toml(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads and parses a TOML file.
	pub fn load(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
		Self::from_toml_str(&read_config(path)?)
	}

	/// Checks that `size` describes a usable grid.
	pub fn validate(&self) -> Result<GridSize> {
		GridSize::new(self.size)
	}
}

/// Reads a configuration file into memory, keeping the path for error reports.
pub fn read_config(path: impl AsRef<Path>) -> std::result::Result<String, ConfigError> {
	let path = path.as_ref();
	std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
		path: path.to_path_buf(),
		error,
	})
}

/// Deserializes a TOML document into any config shape.
pub fn parse_toml<T: DeserializeOwned>(input: &str) -> std::result::Result<T, ConfigError> {
	Ok(toml::from_str(input)?)
}

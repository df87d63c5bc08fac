use serde::{Deserialize, Serialize};

/// A rod that can be catalogued in an assembly and placed on its grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rod {
	name: String,
	#[serde(default)]
	description: String,
	#[serde(default)]
	id: u32,
}

impl Rod {
	/// Creates a rod with an empty description and id 0.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			description: String::new(),
			id: 0,
		}
	}

	/// Sets the description.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	/// Sets the id.
	pub fn with_id(mut self, id: u32) -> Self {
		self.id = id;
		self
	}

	/// Catalog key; unique within an assembly.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Free-form description.
	pub fn description(&self) -> &str {
		&self.description
	}

	/// Numeric id.
	pub fn id(&self) -> u32 {
		self.id
	}
}

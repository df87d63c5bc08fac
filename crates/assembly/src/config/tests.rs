use std::io::Write;

use sfr_grid::{ConfigError, GridError, OverwritePolicy};

use super::*;

#[test]
fn parses_full_document() {
	let config = AssemblyConfig::from_toml_str(
		r#"
name = "Reflector A"
description = "outer ring"
id = 7
rod_pitch = 0.85

[grid]
size = 17
overwrite = "replace"
"#,
	)
	.unwrap();

	assert_eq!(config.name.as_deref(), Some("Reflector A"));
	assert_eq!(config.description.as_deref(), Some("outer ring"));
	assert_eq!(config.id, Some(7));
	assert_eq!(config.rod_pitch, Some(0.85));
	assert_eq!(config.grid.size, 17);
	assert_eq!(config.grid.overwrite, OverwritePolicy::Replace);
}

#[test]
fn grid_table_alone_is_enough() {
	let config = AssemblyConfig::from_toml_str("[grid]\nsize = 3").unwrap();
	assert_eq!(config, AssemblyConfig::new(3));
}

#[test]
fn negative_pitch_is_rejected() {
	let err = AssemblyConfig::from_toml_str("rod_pitch = -1.0\n[grid]\nsize = 3").unwrap_err();
	assert!(matches!(err, AssemblyError::NegativePitch(p) if p == -1.0), "{err:?}");
}

#[test]
fn invalid_grid_size_surfaces_grid_error() {
	let err = AssemblyConfig::from_toml_str("[grid]\nsize = 0").unwrap_err();
	assert!(
		matches!(err, AssemblyError::Grid(GridError::InvalidSize(0))),
		"{err:?}"
	);
}

#[test]
fn missing_grid_table_is_a_parse_error() {
	let err = AssemblyConfig::from_toml_str("name = \"x\"").unwrap_err();
	assert!(
		matches!(err, AssemblyError::Config(ConfigError::Toml(_))),
		"{err:?}"
	);
}

#[test]
fn load_reads_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "id = 3").unwrap();
	writeln!(file, "[grid]").unwrap();
	writeln!(file, "size = 5").unwrap();

	let config = AssemblyConfig::load(file.path()).unwrap();
	assert_eq!(config.id, Some(3));
	assert_eq!(config.grid.size, 5);
}

#[test]
fn load_keeps_io_error_and_path() {
	let dir = tempfile::tempdir().unwrap();
	let missing = dir.path().join("assembly.toml");
	let err = AssemblyConfig::load(&missing).unwrap_err();
	match err {
		AssemblyError::Config(ConfigError::Io { path, error }) => {
			assert_eq!(path, missing);
			assert_eq!(error.kind(), std::io::ErrorKind::NotFound);
		}
		other => panic!("expected Io, got {other:?}"),
	}
}

use std::error::Error as _;
use std::io::Write;

use super::*;
use crate::error::GridError;

#[test]
fn parses_size_with_default_policy() {
	let config = GridConfig::from_toml_str("size = 5").unwrap();
	assert_eq!(config, GridConfig::new(5));
	assert_eq!(config.overwrite, OverwritePolicy::Reject);
}

#[test]
fn parses_replace_policy() {
	let config = GridConfig::from_toml_str("size = 3\noverwrite = \"replace\"").unwrap();
	assert_eq!(config.overwrite, OverwritePolicy::Replace);
}

#[test]
fn zero_size_fails_validation() {
	let err = GridConfig::from_toml_str("size = 0").unwrap_err();
	assert!(
		matches!(err, ConfigError::Grid(GridError::InvalidSize(0))),
		"{err:?}"
	);
}

#[test]
fn unknown_keys_are_rejected() {
	let err = GridConfig::from_toml_str("size = 3\nrods = 4").unwrap_err();
	assert!(matches!(err, ConfigError::Toml(_)), "{err:?}");
}

#[test]
fn missing_size_is_a_parse_error() {
	let err = GridConfig::from_toml_str("overwrite = \"reject\"").unwrap_err();
	assert!(matches!(err, ConfigError::Toml(_)), "{err:?}");
}

#[test]
fn parse_errors_keep_their_source() {
	let err = GridConfig::from_toml_str("size = [").unwrap_err();
	let source = err.source().expect("toml error as source");
	assert!(source.downcast_ref::<toml::de::Error>().is_some());
}

#[test]
fn load_reads_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "size = 4").unwrap();
	writeln!(file, "overwrite = \"replace\"").unwrap();

	let config = GridConfig::load(file.path()).unwrap();
	assert_eq!(config.size, 4);
	assert_eq!(config.overwrite, OverwritePolicy::Replace);
}

#[test]
fn load_reports_missing_file_with_path_and_source() {
	let dir = tempfile::tempdir().unwrap();
	let missing = dir.path().join("grid.toml");
	let err = GridConfig::load(&missing).unwrap_err();

	match &err {
		ConfigError::Io { path, error } => {
			assert_eq!(path, &missing);
			assert_eq!(error.kind(), std::io::ErrorKind::NotFound);
		}
		other => panic!("expected Io, got {other:?}"),
	}
	let source = err.source().expect("io error as source");
	assert!(source.downcast_ref::<std::io::Error>().is_some());
}

use std::fs;

use rtenum_loader::{LoadError, load_catalog};

const TOML: &str = r#"
[[enums]]
name = "Status"
members = [{ value = 1, desc = "Active" }, { value = 2, desc = "Inactive" }]
"#;

const JSON: &str = r##"{
	"enums": [
		{ "name": "Color", "members": [{ "value": "red", "desc": "Red", "hex": "#f00" }] }
	]
}"##;

#[test]
fn loads_toml_catalog() {
	let dir = tempfile::tempdir().expect("create tempdir");
	let path = dir.path().join("enums.toml");
	fs::write(&path, TOML).unwrap();

	let catalog = load_catalog(&path).unwrap();
	let status = catalog.int("Status").expect("Status should load");
	assert_eq!(status.len(), 2);
	assert_eq!(status.to_desc_map().get(&1).map(String::as_str), Some("Active"));
}

#[test]
fn loads_json_catalog() {
	let dir = tempfile::tempdir().expect("create tempdir");
	let path = dir.path().join("enums.json");
	fs::write(&path, JSON).unwrap();

	let catalog = load_catalog(&path).unwrap();
	let color = catalog.str("Color").expect("Color should load");
	assert_eq!(color.must_get("red").desc(), "Red");
}

#[test]
fn loaded_enums_stay_extendable() {
	let dir = tempfile::tempdir().expect("create tempdir");
	let path = dir.path().join("enums.toml");
	fs::write(&path, TOML).unwrap();

	let status = load_catalog(&path).unwrap().int("Status").unwrap();
	status.insert(3, "Archived").unwrap();
	assert!(status.insert(1, "Again").is_err());
	assert_eq!(status.len(), 3);
}

#[test]
fn rejects_unknown_extension() {
	let dir = tempfile::tempdir().expect("create tempdir");
	let path = dir.path().join("enums.yaml");
	fs::write(&path, "enums: []").unwrap();

	let err = load_catalog(&path).unwrap_err();
	assert!(matches!(err, LoadError::UnsupportedFormat(p) if p == path));
}

#[test]
fn reports_missing_file() {
	let dir = tempfile::tempdir().expect("create tempdir");
	let path = dir.path().join("missing.toml");

	let err = load_catalog(&path).unwrap_err();
	assert!(matches!(err, LoadError::Io { .. }));
	assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn reports_parse_errors() {
	let dir = tempfile::tempdir().expect("create tempdir");
	let path = dir.path().join("broken.toml");
	fs::write(&path, "[[enums]\nname = ").unwrap();

	assert!(matches!(load_catalog(&path).unwrap_err(), LoadError::Toml(_)));
}

//! Catalog file loading.

use std::path::Path;

use tracing::info;

use crate::schema::CatalogFile;
use crate::{Catalog, LoadError, Result};

/// Loads a catalog from `path`, picking the parser from the file extension.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
	let parse: fn(&str) -> Result<Catalog> = match path.extension().and_then(|ext| ext.to_str()) {
		Some("toml") => parse_toml,
		Some("json") => parse_json,
		_ => return Err(LoadError::UnsupportedFormat(path.to_path_buf())),
	};

	let content = std::fs::read_to_string(path).map_err(|error| LoadError::Io {
		path: path.to_path_buf(),
		error,
	})?;

	let catalog = parse(&content)?;
	info!(path = %path.display(), enums = catalog.len(), "loaded enum catalog");
	Ok(catalog)
}

/// Parses a catalog from TOML source.
pub fn parse_toml(content: &str) -> Result<Catalog> {
	let file: CatalogFile = toml::from_str(content)?;
	Catalog::from_file(file)
}

/// Parses a catalog from JSON source.
pub fn parse_json(content: &str) -> Result<Catalog> {
	let file: CatalogFile = serde_json::from_str(content)?;
	Catalog::from_file(file)
}

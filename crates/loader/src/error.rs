//! Error types for catalog loading.

use std::path::PathBuf;

use rtenum_enums::EnumError;
use thiserror::Error;

use crate::ValueKind;

/// Errors that can occur while loading an enum catalog.
#[derive(Debug, Error)]
pub enum LoadError {
	/// Error reading a catalog file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error parsing JSON syntax or shape.
	#[error("JSON parse error: {0}")]
	Json(#[from] serde_json::Error),

	/// The file extension is neither `.toml` nor `.json`.
	#[error("unsupported catalog format: {0} (expected .toml or .json)")]
	UnsupportedFormat(PathBuf),

	/// Two definitions share a name.
	#[error("duplicate enum name: {0}")]
	DuplicateEnum(String),

	/// A definition's declared `kind` disagrees with its member values.
	#[error("enum `{name}` declares {declared} values but its members are {found}")]
	KindMismatch {
		/// Name of the offending definition.
		name: String,
		/// Kind from the `kind` field.
		declared: ValueKind,
		/// Kind inferred from the member values.
		found: ValueKind,
	},

	/// A member could not be decoded as the definition's value kind.
	#[error("enum `{name}` member {index}: {source}")]
	InvalidMember {
		/// Name of the offending definition.
		name: String,
		/// Position of the member in the definition's list.
		index: usize,
		/// The underlying decode error.
		source: serde_json::Error,
	},

	/// An integer-keyed definition repeats a value.
	#[error(transparent)]
	IntMember(#[from] EnumError<i64>),

	/// A string-keyed definition repeats a value.
	#[error(transparent)]
	StrMember(#[from] EnumError<String>),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, LoadError>;

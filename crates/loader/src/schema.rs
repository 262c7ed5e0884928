//! On-disk catalog shape shared by the TOML and JSON front ends.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// Top-level catalog document.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogFile {
	/// Enum definitions, in file order.
	#[serde(default)]
	pub enums: Vec<EnumDef>,
}

/// One named enum definition.
#[derive(Debug, Deserialize)]
pub struct EnumDef {
	/// Catalog-unique name, also used as the container label.
	pub name: String,
	/// Explicit value kind. Needed only to type an empty string-keyed enum.
	#[serde(default)]
	pub kind: Option<ValueKind>,
	/// Reserved; forwarded to [`rtenum_enums::EnumOptions::strict`].
	#[serde(default)]
	pub strict: bool,
	/// Raw member objects in insertion order, typed once the value kind is known.
	#[serde(default)]
	pub members: Vec<Value>,
}

impl EnumDef {
	/// Kind implied by the first member's `value`, if it has a string or number there.
	pub(crate) fn inferred_kind(&self) -> Option<ValueKind> {
		let first = self.members.first()?.as_object()?;
		let value = first.get("value").or_else(|| {
			first
				.iter()
				.find(|(key, _)| key.eq_ignore_ascii_case("value"))
				.map(|(_, value)| value)
		})?;
		match value {
			Value::Number(_) => Some(ValueKind::Int),
			Value::String(_) => Some(ValueKind::Str),
			_ => None,
		}
	}
}

/// Key type of an enum definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
	/// `i64` values.
	Int,
	/// `String` values.
	Str,
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			ValueKind::Int => "integer",
			ValueKind::Str => "string",
		})
	}
}

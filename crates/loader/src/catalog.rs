//! Named collection of enums built from a [`CatalogFile`].

use std::sync::Arc;

use indexmap::IndexMap;
use indexmap::map::Entry;
use rtenum_enums::{Enum, EnumOptions, EnumValue, IntEnum, Member, StrEnum};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::schema::{CatalogFile, EnumDef, ValueKind};
use crate::{LoadError, Result};

/// A loaded enum of either key type.
#[derive(Debug, Clone)]
pub enum CatalogEntry {
	/// Integer-keyed enum.
	Int(Arc<IntEnum>),
	/// String-keyed enum.
	Str(Arc<StrEnum>),
}

impl CatalogEntry {
	/// Returns the key type of this entry.
	pub fn kind(&self) -> ValueKind {
		match self {
			CatalogEntry::Int(_) => ValueKind::Int,
			CatalogEntry::Str(_) => ValueKind::Str,
		}
	}

	/// Returns the number of members.
	pub fn len(&self) -> usize {
		match self {
			CatalogEntry::Int(e) => e.len(),
			CatalogEntry::Str(e) => e.len(),
		}
	}

	/// Returns true if the enum has no members.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Enums loaded from one catalog, keyed by name in file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	enums: IndexMap<String, CatalogEntry>,
}

impl Catalog {
	/// Builds every definition in `file`, rejecting duplicate names and duplicate values.
	pub fn from_file(file: CatalogFile) -> Result<Self> {
		let mut enums = IndexMap::with_capacity(file.enums.len());
		for def in file.enums {
			let name = def.name.clone();
			let entry = build_entry(def)?;
			debug!(name = %name, kind = %entry.kind(), len = entry.len(), "built catalog enum");
			match enums.entry(name) {
				Entry::Occupied(slot) => return Err(LoadError::DuplicateEnum(slot.key().clone())),
				Entry::Vacant(slot) => {
					slot.insert(entry);
				}
			}
		}
		Ok(Self { enums })
	}

	/// Returns the entry named `name`.
	pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
		self.enums.get(name)
	}

	/// Returns the integer-keyed enum named `name`, if it exists with that key type.
	pub fn int(&self, name: &str) -> Option<Arc<IntEnum>> {
		match self.enums.get(name)? {
			CatalogEntry::Int(e) => Some(Arc::clone(e)),
			CatalogEntry::Str(_) => None,
		}
	}

	/// Returns the string-keyed enum named `name`, if it exists with that key type.
	pub fn str(&self, name: &str) -> Option<Arc<StrEnum>> {
		match self.enums.get(name)? {
			CatalogEntry::Str(e) => Some(Arc::clone(e)),
			CatalogEntry::Int(_) => None,
		}
	}

	/// Returns enum names in file order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.enums.keys().map(String::as_str)
	}

	/// Returns the number of enums.
	pub fn len(&self) -> usize {
		self.enums.len()
	}

	/// Returns true if the catalog holds no enums.
	pub fn is_empty(&self) -> bool {
		self.enums.is_empty()
	}
}

fn build_entry(def: EnumDef) -> Result<CatalogEntry> {
	let found = def.inferred_kind();
	let EnumDef {
		name,
		kind,
		strict,
		members,
	} = def;

	if let (Some(declared), Some(found)) = (kind, found)
		&& declared != found
	{
		return Err(LoadError::KindMismatch {
			name,
			declared,
			found,
		});
	}

	let options = EnumOptions { strict };
	match kind.or(found).unwrap_or(ValueKind::Int) {
		ValueKind::Int => {
			let members = decode_members(&name, members)?;
			Ok(CatalogEntry::Int(Arc::new(build_enum(name, options, members)?)))
		}
		ValueKind::Str => {
			let members = decode_members(&name, members)?;
			Ok(CatalogEntry::Str(Arc::new(build_enum(name, options, members)?)))
		}
	}
}

fn decode_members<V>(name: &str, raw: Vec<Value>) -> Result<Vec<Member<V>>>
where
	Member<V>: DeserializeOwned,
{
	raw.into_iter()
		.enumerate()
		.map(|(index, value)| {
			serde_json::from_value(value).map_err(|source| LoadError::InvalidMember {
				name: name.to_owned(),
				index,
				source,
			})
		})
		.collect()
}

fn build_enum<V>(name: String, options: EnumOptions, members: Vec<Member<V>>) -> Result<Enum<V>>
where
	V: EnumValue,
	LoadError: From<rtenum_enums::EnumError<V>>,
{
	let e = Enum::with_config(options).with_label(name);
	e.try_extend(members.into_iter().map(Member::into_parts))?;
	Ok(e)
}

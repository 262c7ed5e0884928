//! Enum members and their JSON envelope.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A single enum member: a value bound to a description.
///
/// Members are immutable once built. Containers hand out clones, so a `Member` never aliases
/// container state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Member<V> {
	value: V,
	desc: String,
}

impl<V> Member<V> {
	pub(crate) fn new(value: V, desc: impl Into<String>) -> Self {
		Self {
			value,
			desc: desc.into(),
		}
	}

	/// Returns the member's value.
	pub fn value(&self) -> &V {
		&self.value
	}

	/// Returns the member's description.
	pub fn desc(&self) -> &str {
		&self.desc
	}

	/// Splits the member into its value and description.
	pub fn into_parts(self) -> (V, String) {
		(self.value, self.desc)
	}
}

impl<V: Serialize> Member<V> {
	/// Encodes the member as `{"value": ..., "desc": ...}`.
	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string(self)
	}
}

impl<V> Member<V>
where
	V: for<'de> Deserialize<'de> + Default,
{
	/// Decodes a detached member from its JSON envelope.
	///
	/// Keys match case-insensitively and unknown keys are ignored. A missing or `null` field
	/// keeps its zero value, and a repeated key takes the last value. The result is not
	/// registered with any container.
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}
}

// Only maps decode; the derived impl would also accept sequences.
impl<'de, V> Deserialize<'de> for Member<V>
where
	V: Deserialize<'de> + Default,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_map(MemberVisitor(PhantomData))
	}
}

struct MemberVisitor<V>(PhantomData<fn() -> V>);

impl<'de, V> Visitor<'de> for MemberVisitor<V>
where
	V: Deserialize<'de> + Default,
{
	type Value = Member<V>;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("an enum member object")
	}

	fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		let mut member = Member {
			value: V::default(),
			desc: String::new(),
		};

		while let Some(key) = map.next_key::<String>()? {
			if key.eq_ignore_ascii_case("value") {
				if let Some(value) = map.next_value::<Option<V>>()? {
					member.value = value;
				}
			} else if key.eq_ignore_ascii_case("desc") {
				if let Some(desc) = map.next_value::<Option<String>>()? {
					member.desc = desc;
				}
			} else {
				map.next_value::<IgnoredAny>()?;
			}
		}

		Ok(member)
	}
}

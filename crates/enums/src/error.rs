use std::fmt;

use crate::EnumValue;

/// Error type for container insertion and lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumError<V>
where
	V: EnumValue,
{
	/// Insertion was rejected because the value is already a member.
	Duplicate {
		/// Label of the rejecting container.
		label: String,
		/// The conflicting value.
		value: V,
		/// Description of the existing member holding `value`.
		desc: String,
	},
	/// No member holds the requested value.
	NotFound {
		/// Label of the searched container.
		label: String,
		/// The requested value.
		value: V,
	},
}

impl<V> EnumError<V>
where
	V: EnumValue,
{
	/// Returns the value the error refers to.
	pub fn value(&self) -> &V {
		match self {
			EnumError::Duplicate { value, .. } | EnumError::NotFound { value, .. } => value,
		}
	}
}

impl<V> fmt::Display for EnumError<V>
where
	V: EnumValue,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			EnumError::Duplicate { label, value, desc } => {
				write!(f, "`{label}`: duplicate member `{value:?}`, desc: {desc}")
			}
			EnumError::NotFound { label, value } => {
				write!(f, "`{label}`: member `{value:?}` not found")
			}
		}
	}
}

impl<V> std::error::Error for EnumError<V> where V: EnumValue {}

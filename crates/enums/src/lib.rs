//! Thread-safe, append-only enums built at runtime.
//!
//! An [`Enum`] holds a set of [`Member`]s, each a value with a description. Members are added
//! with [`Enum::insert`] (typically once at startup) and read concurrently afterwards. Values
//! are unique within a container; a second insert of the same value is rejected.
//!
//! ```
//! use rtenum_enums::IntEnum;
//!
//! let status = IntEnum::new().with_label("Status");
//! status.must_insert(1, "Active");
//! status.must_insert(2, "Inactive");
//!
//! assert_eq!(status.get(&1).unwrap().desc(), "Active");
//! assert!(status.insert(2, "Disabled").is_err());
//! ```

use std::fmt::Debug;
use std::hash::Hash;

mod container;
mod error;
mod member;
/// Construction-time options.
pub mod options;

pub use container::{DescMap, Enum, MemberMap};
pub use error::EnumError;
pub use member::Member;
pub use options::{EnumOptions, OptionFn, strict};

/// Marker trait for types usable as enum values.
pub trait EnumValue: Eq + Hash + Clone + Debug + Send + Sync + 'static {}
impl<T> EnumValue for T where T: Eq + Hash + Clone + Debug + Send + Sync + 'static {}

/// Integer-keyed enum.
pub type IntEnum = Enum<i64>;
/// String-keyed enum.
pub type StrEnum = Enum<String>;
/// Member of an [`IntEnum`].
pub type IntMember = Member<i64>;
/// Member of a [`StrEnum`].
pub type StrMember = Member<String>;

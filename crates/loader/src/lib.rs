//! Enum catalogs loaded from configuration.
//!
//! A catalog file declares named enums and their members. Each definition becomes an
//! [`rtenum_enums::Enum`] labeled with its name, keyed by `i64` or `String` depending on the type
//! of its member values.
//!
//! ```toml
//! [[enums]]
//! name = "Status"
//! members = [
//!     { value = 1, desc = "Active" },
//!     { value = 2, desc = "Inactive" },
//! ]
//!
//! [[enums]]
//! name = "Color"
//! kind = "str"      # optional; only needed for an empty string-keyed enum
//! strict = false    # reserved
//! members = [{ value = "red", desc = "Red" }]
//! ```
//!
//! The same shape is accepted as JSON. The format is chosen by file extension in
//! [`load_catalog`].

mod catalog;
mod error;
mod load;
/// On-disk catalog shape.
pub mod schema;

pub use catalog::{Catalog, CatalogEntry};
pub use error::{LoadError, Result};
pub use load::{load_catalog, parse_json, parse_toml};
pub use schema::ValueKind;

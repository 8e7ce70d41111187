//! Named integer enumerations.
//!
//! A [`Registry`] is a closed set of [`Item`]s, each a unique name paired with
//! a unique integer. Registries are built once from a mix of bare names and
//! explicitly valued entries, then queried by exact name, case-insensitive
//! name prefix, value, or inclusive range.
//!
//! ```
//! use enumkit::{Entry, Registry};
//!
//! let vw = Registry::from_entries(
//! 	"Volkswagen",
//! 	[Entry::from("JETTA"), Entry::from(("EURO_VAN", 1)), Entry::from("RABBIT")],
//! 	0,
//! )
//! .unwrap();
//!
//! assert_eq!(vw.by_name("jet", false).unwrap().value(), 0);
//! assert_eq!(*vw.by_value(2).unwrap(), "RABBIT");
//! ```
//!
//! # Modules
//!
//! - [`index`]: the registry, its builder, lookups and ranges
//! - [`config`]: declaring enumerations in TOML
//! - [`extension`]: resolving statically declared enumerations by name
//!
//! Enumerations known at compile time are declared with [`enumeration!`].

mod entry;
mod error;
mod item;
mod key;
mod macros;

pub mod config;
pub mod extension;
pub mod index;

pub use entry::Entry;
pub use error::{EnumError, Result};
pub use extension::{EnumerationDef, EnumerationReg, import_extension, import_name};
pub use index::{Registry, RegistryBuilder};
pub use item::Item;
pub use key::EnumKey;

#[doc(hidden)]
pub use inventory;
#[doc(hidden)]
pub use paste;

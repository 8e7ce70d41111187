//! The enumeration registry.
//!
//! # Mental Model
//!
//! 1. **Build Phase:** [`RegistryBuilder`] buffers entries, then registers
//!    explicitly valued entries first and auto-numbered entries second.
//! 2. **Consumption:** the finished [`Registry`] is immutable. Readers look
//!    items up by name (exact or fuzzy prefix), by value, or by inclusive
//!    range, and receive borrowed [`Item`]s.
//!
//! # Invariants
//!
//! - Name and value indices cover exactly the item table.
//!   - Enforced in: `IndexTables::insert`.
//!   - Tested by: `invariants::indices_agree_with_len`.
//! - Names and values are unique.
//!   - Enforced in: `IndexTables::insert` (first violation aborts the build).
//!   - Tested by: `tests::duplicate_name_aborts_build`, `tests::duplicate_value_aborts_build`.
//! - Iteration follows construction order: valued entries, then bare entries.
//!   - Enforced in: `build::populate`.
//!   - Tested by: `tests::iteration_follows_construction_order`.
//! - Auto values never revisit a skipped gap.
//!   - Enforced in: `build::populate` (cursor only moves forward).
//!   - Tested by: `invariants::auto_values_increase`.
//!
//! # Concurrency
//!
//! A built registry is plain immutable data (`Send + Sync`); concurrent reads
//! need no locking.

mod build;
mod lookup;
mod range;
mod types;

use std::fmt;

pub use build::RegistryBuilder;
use types::IndexTables;

use crate::{Entry, Item, Result};

/// A closed set of named integer constants.
#[derive(Clone)]
pub struct Registry {
	label: Box<str>,
	tables: IndexTables,
}

impl Registry {
	/// Starts a builder for a registry labeled `label`.
	pub fn builder(label: impl Into<Box<str>>) -> RegistryBuilder {
		RegistryBuilder::new(label)
	}

	/// Builds a registry from whitespace-separated bare names.
	pub fn from_names(label: impl Into<Box<str>>, names: &str, first_value: i64) -> Result<Self> {
		RegistryBuilder::new(label).first_value(first_value).names(names).build()
	}

	/// Builds a registry from mixed bare and valued entries.
	pub fn from_entries<I, E>(label: impl Into<Box<str>>, entries: I, first_value: i64) -> Result<Self>
	where
		I: IntoIterator<Item = E>,
		E: Into<Entry>,
	{
		let mut builder = RegistryBuilder::new(label).first_value(first_value);
		builder.extend(entries);
		builder.build()
	}

	/// Returns the registry label.
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Returns the number of items.
	pub fn len(&self) -> usize {
		self.tables.items.len()
	}

	/// Returns true if the registry holds no items.
	pub fn is_empty(&self) -> bool {
		self.tables.items.is_empty()
	}

	/// Iterates `(name, value)` pairs in construction order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
		self.tables.items.iter().map(|item| (item.name(), item.value()))
	}

	/// Iterates items in construction order.
	pub fn items(&self) -> std::slice::Iter<'_, Item> {
		self.tables.items.iter()
	}

	/// Iterates names in construction order.
	pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
		self.tables.items.iter().map(Item::name)
	}

	/// Iterates the items accepted by `predicate`, in construction order.
	pub fn select<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a Item> + 'a
	where
		P: FnMut(&&'a Item) -> bool + 'a,
	{
		self.tables.items.iter().filter(predicate)
	}
}

impl<'a> IntoIterator for &'a Registry {
	type Item = &'a Item;
	type IntoIter = std::slice::Iter<'a, Item>;

	fn into_iter(self) -> Self::IntoIter {
		self.items()
	}
}

/// Names joined by `", "` in construction order.
impl fmt::Display for Registry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, item) in self.tables.items.iter().enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}
			f.write_str(item.name())?;
		}
		Ok(())
	}
}

/// `name:value` pairs joined by `", "` in construction order.
impl fmt::Debug for Registry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, item) in self.tables.items.iter().enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{item:?}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod invariants;

use tracing::{debug, trace, warn};

use super::Registry;
use super::types::{IndexTables, Map};
use crate::{EnumError, Entry, Result};

/// Builder for constructing a [`Registry`].
///
/// Entries are buffered in the order they are pushed; nothing is validated
/// until [`RegistryBuilder::build`].
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
	label: Box<str>,
	first_value: i64,
	entries: Vec<Entry>,
}

impl RegistryBuilder {
	/// Creates a new builder with the given label for logs and diagnostics.
	pub fn new(label: impl Into<Box<str>>) -> Self {
		Self {
			label: label.into(),
			first_value: 0,
			entries: Vec::new(),
		}
	}

	/// Sets the value auto-numbering starts from. Defaults to 0.
	pub fn first_value(mut self, first_value: i64) -> Self {
		self.first_value = first_value;
		self
	}

	/// Returns the number of entries pushed so far.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if no entries have been pushed.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Adds a single entry.
	pub fn push(&mut self, entry: impl Into<Entry>) {
		self.entries.push(entry.into());
	}

	/// Adds multiple entries.
	pub fn extend<I, E>(&mut self, entries: I)
	where
		I: IntoIterator<Item = E>,
		E: Into<Entry>,
	{
		self.entries.extend(entries.into_iter().map(Into::into));
	}

	/// Adds every whitespace-separated name in `names` as a bare entry.
	pub fn names(mut self, names: &str) -> Self {
		self.entries.extend(Entry::parse_names(names));
		self
	}

	/// Builds the registry in two passes.
	///
	/// Pass one registers every explicitly valued entry in input order. Pass
	/// two walks the input again and gives each bare entry the smallest free
	/// value at or above the auto cursor, then moves the cursor past it.
	/// The first violation aborts the build and nothing is returned.
	pub fn build(self) -> Result<Registry> {
		let label = self.label;
		let mut tables = IndexTables::with_capacity(self.entries.len());

		match populate(&mut tables, &self.entries, self.first_value) {
			Ok(()) => {
				debug_assert!(tables.is_consistent(), "registry {label}: indices out of sync");
				debug!(registry = %label, items = tables.items.len(), "built enumeration");
				Ok(Registry { label, tables })
			}
			Err(error) => {
				warn!(registry = %label, %error, "rejected enumeration");
				Err(error)
			}
		}
	}
}

fn populate(tables: &mut IndexTables, entries: &[Entry], first_value: i64) -> Result<()> {
	for entry in entries {
		if let Entry::Valued(name, value) = entry {
			tables.insert(name, *value)?;
		}
	}

	let mut cursor = first_value;
	for entry in entries {
		if let Entry::Bare(name) = entry {
			if name.is_empty() {
				return Err(EnumError::InvalidName { name: name.clone() });
			}
			let value = next_auto_value(&tables.by_value, cursor).ok_or_else(|| EnumError::AutoValueExhausted { name: name.clone() })?;
			trace!(name = %name, value, "assigned auto value");
			tables.insert(name, value)?;
			cursor = value.saturating_add(1);
		}
	}

	Ok(())
}

/// Returns the smallest value at or above `cursor` that no item holds yet.
fn next_auto_value(by_value: &Map<i64, usize>, cursor: i64) -> Option<i64> {
	(cursor..=i64::MAX).find(|value| !by_value.contains_key(value))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn auto_value_skips_claimed_values() {
		let mut by_value = Map::default();
		by_value.insert(0, 0);
		by_value.insert(1, 1);
		by_value.insert(3, 2);
		assert_eq!(next_auto_value(&by_value, 0), Some(2));
		assert_eq!(next_auto_value(&by_value, 3), Some(4));
		assert_eq!(next_auto_value(&by_value, -5), Some(-5));
	}

	#[test]
	fn auto_value_exhaustion() {
		let mut by_value = Map::default();
		by_value.insert(i64::MAX, 0);
		assert_eq!(next_auto_value(&by_value, i64::MAX), None);

		let mut builder = RegistryBuilder::new("edge").first_value(i64::MAX);
		builder.extend(["A", "B"]);
		let err = builder.build().unwrap_err();
		assert_eq!(err, EnumError::AutoValueExhausted { name: "B".into() });
	}

	#[test]
	fn empty_name_reported_before_exhaustion() {
		let mut builder = RegistryBuilder::new("edge").first_value(i64::MAX);
		builder.extend(["A", ""]);
		assert_eq!(builder.build().unwrap_err(), EnumError::InvalidName { name: String::new() });
	}
}

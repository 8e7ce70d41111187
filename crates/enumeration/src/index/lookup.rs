//! Exact, fuzzy and membership lookups.
//!
//! # Invariants
//!
//! - Exact lookup is case-sensitive and always tried first.
//! - Fuzzy lookup returns the first item in construction order whose
//!   lowercase name starts with the lowercase input, not the closest one.

use super::Registry;
use crate::{EnumError, EnumKey, Item, Result};

impl Registry {
	/// Looks up an item by value.
	pub fn by_value(&self, value: i64) -> Result<&Item> {
		self.tables.get_by_value(value).ok_or_else(|| self.not_found(value.to_string()))
	}

	/// Looks up an item by name.
	///
	/// With `exact == false`, a miss on the exact name falls back to a
	/// case-insensitive prefix search (`"ap"` finds `APHID`).
	pub fn by_name(&self, name: &str, exact: bool) -> Result<&Item> {
		if let Some(item) = self.tables.get_by_name(name) {
			return Ok(item);
		}

		if !exact {
			let needle = name.to_lowercase();
			if let Some(item) = self.tables.items.iter().find(|item| item.name().to_lowercase().starts_with(&needle)) {
				return Ok(item);
			}
		}

		Err(self.not_found(name.to_string()))
	}

	/// Exact lookup by any key kind. Never falls back to fuzzy matching.
	pub fn get(&self, key: impl Into<EnumKey>) -> Result<&Item> {
		match key.into() {
			EnumKey::Name(name) => self.by_name(&name, true),
			EnumKey::Value(value) => self.by_value(value),
			EnumKey::Item(item) => self.by_value(item.value()),
		}
	}

	/// Returns true if the key names a registered item.
	///
	/// Names check the name index; values and items check the value index.
	pub fn contains(&self, key: impl Into<EnumKey>) -> bool {
		match key.into() {
			EnumKey::Name(name) => self.tables.get_by_name(&name).is_some(),
			EnumKey::Value(value) => self.tables.contains_value(value),
			EnumKey::Item(item) => self.tables.contains_value(item.value()),
		}
	}

	/// Membership test for untyped config values.
	///
	/// Fails with [`EnumError::InvalidKeyType`] for anything but strings and
	/// integers.
	pub fn contains_raw(&self, raw: &toml::Value) -> Result<bool> {
		let key = EnumKey::try_from(raw)?;
		Ok(self.contains(key))
	}

	/// Suggests the registered name closest to `name` (Levenshtein ≤ 3).
	pub fn suggest(&self, name: &str) -> Option<&str> {
		self.names()
			.min_by_key(|candidate| strsim::levenshtein(name, candidate))
			.filter(|candidate| strsim::levenshtein(name, candidate) <= 3)
	}

	fn not_found(&self, key: String) -> EnumError {
		EnumError::NotFound {
			key,
			valid: self.tables.names(),
		}
	}
}

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::{EnumError, Item, Result};

pub(super) type Map<K, V> = FxHashMap<K, V>;

/// Dense item table plus the name and value indices pointing into it.
///
/// `items` holds every item exactly once in insertion order; both maps store
/// slots into `items`, so they can never disagree about which items exist.
#[derive(Clone, Default)]
pub(crate) struct IndexTables {
	pub(crate) items: Vec<Item>,
	pub(crate) by_name: Map<Arc<str>, usize>,
	pub(crate) by_value: Map<i64, usize>,
}

impl IndexTables {
	pub(crate) fn with_capacity(capacity: usize) -> Self {
		Self {
			items: Vec::with_capacity(capacity),
			by_name: Map::with_capacity_and_hasher(capacity, Default::default()),
			by_value: Map::with_capacity_and_hasher(capacity, Default::default()),
		}
	}

	/// Validates and inserts one item, reporting the first violated rule.
	pub(crate) fn insert(&mut self, name: &str, value: i64) -> Result<()> {
		if name.is_empty() {
			return Err(EnumError::InvalidName { name: name.to_string() });
		}
		if self.by_name.contains_key(name) {
			return Err(EnumError::DuplicateName { name: name.to_string() });
		}
		if self.by_value.contains_key(&value) {
			return Err(EnumError::DuplicateValue {
				name: name.to_string(),
				value,
			});
		}

		let slot = self.items.len();
		let name: Arc<str> = Arc::from(name);
		self.items.push(Item::new(Arc::clone(&name), value));
		self.by_name.insert(name, slot);
		self.by_value.insert(value, slot);
		Ok(())
	}

	#[inline]
	pub(crate) fn contains_value(&self, value: i64) -> bool {
		self.by_value.contains_key(&value)
	}

	#[inline]
	pub(crate) fn get_by_name(&self, name: &str) -> Option<&Item> {
		self.by_name.get(name).map(|&slot| &self.items[slot])
	}

	#[inline]
	pub(crate) fn get_by_value(&self, value: i64) -> Option<&Item> {
		self.by_value.get(&value).map(|&slot| &self.items[slot])
	}

	pub(crate) fn names(&self) -> Vec<String> {
		self.items.iter().map(|item| item.name().to_string()).collect()
	}

	/// Checks that both indices cover exactly the item table.
	pub(crate) fn is_consistent(&self) -> bool {
		let len = self.items.len();
		self.by_name.len() == len
			&& self.by_value.len() == len
			&& self.items.iter().enumerate().all(|(slot, item)| {
				self.by_name.get(item.name()) == Some(&slot) && self.by_value.get(&item.value()) == Some(&slot)
			})
	}
}

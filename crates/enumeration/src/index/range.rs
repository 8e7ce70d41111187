use super::Registry;
use crate::{EnumError, EnumKey, Item, Result};

impl Registry {
	/// Returns the items with values in `[begin, end]`, ascending.
	///
	/// Name bounds resolve through exact name lookup. Every integer in the
	/// span must belong to an item; the first hole is reported as
	/// [`EnumError::RangeGap`]. An inverted span is empty.
	pub fn range(&self, begin: impl Into<EnumKey>, end: impl Into<EnumKey>) -> Result<Vec<&Item>> {
		let begin = self.resolve_bound(begin.into())?;
		let end = self.resolve_bound(end.into())?;

		(begin..=end)
			.map(|value| {
				self.tables
					.get_by_value(value)
					.ok_or(EnumError::RangeGap { value, begin, end })
			})
			.collect()
	}

	fn resolve_bound(&self, key: EnumKey) -> Result<i64> {
		match key {
			EnumKey::Name(name) => self.by_name(&name, true).map(Item::value),
			EnumKey::Value(value) => Ok(value),
			EnumKey::Item(item) => Ok(item.value()),
		}
	}
}

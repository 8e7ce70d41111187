//! The name/value pair handed out by every registry lookup.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An enumeration constant: a name paired with an integer.
///
/// An `Item` stands in for either half of the pair. Equality and ordering
/// against other items and integers use the value; equality against strings
/// uses the name (case-sensitive). Hashing delegates to the value, so an
/// `Item`-keyed map can be probed with a bare `i64`.
#[derive(Clone)]
pub struct Item {
	name: Arc<str>,
	value: i64,
}

impl Item {
	pub(crate) fn new(name: Arc<str>, value: i64) -> Self {
		Self { name, value }
	}

	/// Returns the name.
	#[inline]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the value.
	#[inline]
	pub fn value(&self) -> i64 {
		self.value
	}

	/// Alias for [`Item::name`].
	#[inline]
	pub fn as_str(&self) -> &str {
		&self.name
	}

	/// Alias for [`Item::value`].
	#[inline]
	pub fn as_int(&self) -> i64 {
		self.value
	}

	/// Compares against an untyped config value.
	///
	/// Strings compare by name, integers by value. Every other TOML type is
	/// incomparable and yields `None`.
	pub fn partial_cmp_raw(&self, raw: &toml::Value) -> Option<Ordering> {
		match raw {
			toml::Value::String(s) => Some(self.name().cmp(s.as_str())),
			toml::Value::Integer(v) => Some(self.value.cmp(v)),
			_ => None,
		}
	}
}

impl PartialEq for Item {
	fn eq(&self, other: &Self) -> bool {
		self.value == other.value
	}
}

impl Eq for Item {}

impl Hash for Item {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.value.hash(state);
	}
}

impl Borrow<i64> for Item {
	fn borrow(&self) -> &i64 {
		&self.value
	}
}

impl PartialOrd for Item {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Item {
	fn cmp(&self, other: &Self) -> Ordering {
		self.value.cmp(&other.value)
	}
}

impl PartialEq<i64> for Item {
	fn eq(&self, other: &i64) -> bool {
		self.value == *other
	}
}

impl PartialEq<Item> for i64 {
	fn eq(&self, other: &Item) -> bool {
		*self == other.value
	}
}

impl PartialOrd<i64> for Item {
	fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
		Some(self.value.cmp(other))
	}
}

impl PartialOrd<Item> for i64 {
	fn partial_cmp(&self, other: &Item) -> Option<Ordering> {
		Some(self.cmp(&other.value))
	}
}

impl PartialEq<str> for Item {
	fn eq(&self, other: &str) -> bool {
		&*self.name == other
	}
}

impl PartialEq<&str> for Item {
	fn eq(&self, other: &&str) -> bool {
		&*self.name == *other
	}
}

impl PartialEq<String> for Item {
	fn eq(&self, other: &String) -> bool {
		*self.name == **other
	}
}

impl PartialEq<Item> for &str {
	fn eq(&self, other: &Item) -> bool {
		*self == &*other.name
	}
}

impl PartialEq<Item> for String {
	fn eq(&self, other: &Item) -> bool {
		**self == *other.name
	}
}

impl From<&Item> for i64 {
	fn from(item: &Item) -> Self {
		item.value
	}
}

impl AsRef<str> for Item {
	fn as_ref(&self) -> &str {
		&self.name
	}
}

impl fmt::Display for Item {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)
	}
}

impl fmt::Debug for Item {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.name, self.value)
	}
}

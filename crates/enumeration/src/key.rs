use crate::{EnumError, Item};

/// A lookup key: a name, a value, or an item already taken from a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumKey {
	/// Matches an item by exact name.
	Name(String),
	/// Matches an item by value.
	Value(i64),
	/// Matches an item by the value it carries.
	Item(Item),
}

impl From<&str> for EnumKey {
	fn from(name: &str) -> Self {
		EnumKey::Name(name.to_string())
	}
}

impl From<String> for EnumKey {
	fn from(name: String) -> Self {
		EnumKey::Name(name)
	}
}

impl From<i64> for EnumKey {
	fn from(value: i64) -> Self {
		EnumKey::Value(value)
	}
}

impl From<i32> for EnumKey {
	fn from(value: i32) -> Self {
		EnumKey::Value(i64::from(value))
	}
}

impl From<Item> for EnumKey {
	fn from(item: Item) -> Self {
		EnumKey::Item(item)
	}
}

impl From<&Item> for EnumKey {
	fn from(item: &Item) -> Self {
		EnumKey::Item(item.clone())
	}
}

impl TryFrom<&toml::Value> for EnumKey {
	type Error = EnumError;

	/// Strings become names and integers become values; any other TOML type
	/// is rejected with [`EnumError::InvalidKeyType`].
	fn try_from(raw: &toml::Value) -> Result<Self, Self::Error> {
		match raw {
			toml::Value::String(name) => Ok(EnumKey::Name(name.clone())),
			toml::Value::Integer(value) => Ok(EnumKey::Value(*value)),
			other => Err(EnumError::InvalidKeyType {
				key: other.to_string(),
				kind: other.type_str(),
			}),
		}
	}
}

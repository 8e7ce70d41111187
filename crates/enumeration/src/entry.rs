//! Construction input: bare names and explicitly valued pairs.

use crate::{EnumError, Result};

/// One element of the construction input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
	/// A name that receives the next auto value.
	Bare(String),
	/// A name with an explicit value.
	Valued(String, i64),
}

impl Entry {
	/// Returns the entry's name.
	pub fn name(&self) -> &str {
		match self {
			Entry::Bare(name) | Entry::Valued(name, _) => name,
		}
	}

	/// Returns the explicit value, if any.
	pub fn explicit_value(&self) -> Option<i64> {
		match self {
			Entry::Bare(_) => None,
			Entry::Valued(_, value) => Some(*value),
		}
	}

	/// Splits a whitespace-delimited string into bare entries.
	pub fn parse_names(names: &str) -> Vec<Entry> {
		names.split_whitespace().map(Entry::from).collect()
	}

	/// Normalizes an untyped config value.
	///
	/// Accepts a string (bare name), a two-element array `[name, value]`, or a
	/// table `{ name = .., value = .. }` whose `value` is optional.
	pub fn from_toml(raw: &toml::Value) -> Result<Entry> {
		match raw {
			toml::Value::String(name) => Ok(Entry::Bare(name.clone())),
			toml::Value::Array(pair) => match pair.as_slice() {
				[name, value] => valued(name, Some(value)),
				_ => Err(EnumError::InvalidName { name: raw.to_string() }),
			},
			toml::Value::Table(table) => match table.get("name") {
				Some(name) => valued(name, table.get("value")),
				None => Err(EnumError::InvalidName { name: raw.to_string() }),
			},
			other => Err(EnumError::InvalidName { name: other.to_string() }),
		}
	}

	/// Normalizes a config list, validating explicit pairs before bare names.
	///
	/// Errors surface in the same order construction would report them: a bad
	/// value on a later pair wins over a malformed bare entry before it.
	pub fn from_toml_list(raw: &[toml::Value]) -> Result<Vec<Entry>> {
		let mut slots: Vec<Option<Entry>> = vec![None; raw.len()];
		for (slot, value) in slots.iter_mut().zip(raw) {
			if is_explicit(value) {
				*slot = Some(Entry::from_toml(value)?);
			}
		}

		raw.iter()
			.zip(slots)
			.map(|(value, slot)| match slot {
				Some(entry) => Ok(entry),
				None => Entry::from_toml(value),
			})
			.collect()
	}
}

fn is_explicit(raw: &toml::Value) -> bool {
	match raw {
		toml::Value::Array(pair) => pair.len() == 2,
		toml::Value::Table(table) => table.contains_key("value"),
		_ => false,
	}
}

fn valued(name: &toml::Value, value: Option<&toml::Value>) -> Result<Entry> {
	let Some(name) = name.as_str() else {
		return Err(EnumError::InvalidName { name: name.to_string() });
	};

	match value {
		None => Ok(Entry::Bare(name.to_string())),
		Some(toml::Value::Integer(value)) => Ok(Entry::Valued(name.to_string(), *value)),
		Some(other) => Err(EnumError::InvalidValue {
			name: name.to_string(),
			value: other.to_string(),
		}),
	}
}

impl From<&str> for Entry {
	fn from(name: &str) -> Self {
		Entry::Bare(name.to_string())
	}
}

impl From<String> for Entry {
	fn from(name: String) -> Self {
		Entry::Bare(name)
	}
}

impl From<(&str, i64)> for Entry {
	fn from((name, value): (&str, i64)) -> Self {
		Entry::Valued(name.to_string(), value)
	}
}

impl From<(&str, i32)> for Entry {
	fn from((name, value): (&str, i32)) -> Self {
		Entry::Valued(name.to_string(), i64::from(value))
	}
}

impl From<(String, i64)> for Entry {
	fn from((name, value): (String, i64)) -> Self {
		Entry::Valued(name, value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(src: &str) -> toml::Value {
		let doc: toml::Table = toml::from_str(&format!("v = {src}")).unwrap();
		doc["v"].clone()
	}

	#[test]
	fn parse_names_splits_on_any_whitespace() {
		let entries = Entry::parse_names("  ANT\tAPHID\n BEE ");
		assert_eq!(entries, vec![Entry::from("ANT"), Entry::from("APHID"), Entry::from("BEE")]);
		assert!(Entry::parse_names("   ").is_empty());
	}

	#[test]
	fn from_toml_shapes() {
		assert_eq!(Entry::from_toml(&parse(r#""ANT""#)).unwrap(), Entry::Bare("ANT".into()));
		assert_eq!(Entry::from_toml(&parse(r#"["THING", 400]"#)).unwrap(), Entry::Valued("THING".into(), 400));
		assert_eq!(
			Entry::from_toml(&parse(r#"{ name = "CABRIO", value = 700 }"#)).unwrap(),
			Entry::Valued("CABRIO".into(), 700)
		);
		assert_eq!(Entry::from_toml(&parse(r#"{ name = "GOLF" }"#)).unwrap(), Entry::Bare("GOLF".into()));
	}

	#[test]
	fn from_toml_rejects_non_integer_values() {
		let err = Entry::from_toml(&parse(r#"["THING", 4.5]"#)).unwrap_err();
		assert!(matches!(err, EnumError::InvalidValue { ref name, .. } if name == "THING"));

		let err = Entry::from_toml(&parse(r#"{ name = "THING", value = "400" }"#)).unwrap_err();
		assert!(matches!(err, EnumError::InvalidValue { .. }));
	}

	#[test]
	fn from_toml_rejects_non_string_names() {
		assert!(matches!(Entry::from_toml(&parse("[1, 2]")).unwrap_err(), EnumError::InvalidName { .. }));
		assert!(matches!(Entry::from_toml(&parse("42")).unwrap_err(), EnumError::InvalidName { .. }));
		assert!(matches!(Entry::from_toml(&parse(r#"["A", 1, 2]"#)).unwrap_err(), EnumError::InvalidName { .. }));
		assert!(matches!(Entry::from_toml(&parse("{ value = 1 }")).unwrap_err(), EnumError::InvalidName { .. }));
	}

	#[test]
	fn list_checks_explicit_pairs_first() {
		let raw = parse(r#"[42, ["A", 1.5]]"#);
		let err = Entry::from_toml_list(raw.as_array().unwrap()).unwrap_err();
		assert!(matches!(err, EnumError::InvalidValue { ref name, .. } if name == "A"));

		let raw = parse(r#"[42, ["A", 1]]"#);
		let err = Entry::from_toml_list(raw.as_array().unwrap()).unwrap_err();
		assert_eq!(err, EnumError::InvalidName { name: "42".into() });
	}

	#[test]
	fn list_keeps_input_order() {
		let raw = parse(r#"["JETTA", ["THING", 400], { name = "GOLF" }]"#);
		assert_eq!(
			Entry::from_toml_list(raw.as_array().unwrap()).unwrap(),
			vec![Entry::from("JETTA"), Entry::from(("THING", 400)), Entry::from("GOLF")]
		);
	}
}

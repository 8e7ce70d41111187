use enumkit_util::{ProseOptions, seq_to_string};

/// Errors produced while building or querying a [`crate::Registry`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnumError {
	/// Entry name is empty or not a string.
	#[error("the enumeration name, {name:?}, is not a non-empty string")]
	InvalidName { name: String },

	/// Entry value is not an integer.
	#[error("the enumeration value, {value}, for name, {name:?}, is not an integer")]
	InvalidValue { name: String, value: String },

	#[error("the enumeration name, {name:?}, is not unique")]
	DuplicateName { name: String },

	#[error("the enumeration value, {value}, for name, {name:?}, is not unique")]
	DuplicateValue { name: String, value: i64 },

	/// Auto-numbering ran past `i64::MAX`.
	#[error("no auto value left for name {name:?}")]
	AutoValueExhausted { name: String },

	/// Lookup by name or value found nothing.
	#[error("cannot match {key:?} with one of {}", one_of(.valid))]
	NotFound { key: String, valid: Vec<String> },

	#[error("invalid key {key}, of type {kind}, used for lookup")]
	InvalidKeyType { key: String, kind: &'static str },

	/// A value inside a requested range has no item.
	#[error("no item with value {value} inside range [{begin}, {end}]")]
	RangeGap { value: i64, begin: i64, end: i64 },
}

fn one_of(valid: &[String]) -> String {
	if valid.is_empty() {
		return "(no names registered)".to_string();
	}
	seq_to_string(valid, &ProseOptions::default().conjunction("or"))
}

/// Result alias for enumeration operations.
pub type Result<T> = std::result::Result<T, EnumError>;

//! Declaring enumerations in TOML.
//!
//! ```toml
//! [[enumeration]]
//! name = "Insect"
//! first_value = 100
//! entries = "ANT APHID BEE"
//!
//! [[enumeration]]
//! name = "Volkswagen"
//! entries = ["JETTA", ["THING", 400], { name = "CABRIO", value = 700 }]
//! ```
//!
//! Raw entries are kept as [`toml::Value`] until they are normalized by
//! [`Entry::from_toml`], so a float value or a numeric name is reported with
//! the enumeration error taxonomy instead of a generic parse error.

use std::path::{Path, PathBuf};

use enumkit_util::contains_whitespace;
use rustc_hash::FxHashSet;
use serde::Deserialize;

use crate::{EnumError, Entry, Registry};

/// A TOML document holding any number of enumerations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnumerationsConfig {
	#[serde(default, rename = "enumeration")]
	pub enumerations: Vec<EnumerationConfig>,
}

/// One `[[enumeration]]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct EnumerationConfig {
	/// Registry label.
	pub name: String,
	/// Auto-numbering start.
	#[serde(default)]
	pub first_value: i64,
	pub entries: EntriesConfig,
}

/// Entries given either as one whitespace-separated string or as a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EntriesConfig {
	Names(String),
	List(Vec<toml::Value>),
}

impl EnumerationConfig {
	/// Normalizes the raw entries, stopping at the first malformed one.
	pub fn entries(&self) -> crate::Result<Vec<Entry>> {
		let entries = match &self.entries {
			EntriesConfig::Names(names) => Entry::parse_names(names),
			EntriesConfig::List(raw) => Entry::from_toml_list(raw)?,
		};

		for entry in &entries {
			if contains_whitespace(entry.name()) {
				tracing::warn!(enumeration = %self.name, name = entry.name(), "entry name contains whitespace");
			}
		}

		Ok(entries)
	}

	/// Builds the registry this table declares.
	pub fn build(&self) -> crate::Result<Registry> {
		Registry::from_entries(self.name.as_str(), self.entries()?, self.first_value)
	}
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read {}: {source}", .path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse enumeration config: {0}")]
	Parse(#[from] toml::de::Error),

	/// An enumeration name appears more than once in one document.
	#[error("enumeration {0:?} is declared more than once")]
	DuplicateEnumeration(String),

	/// One enumeration failed to build.
	#[error("enumeration {name:?}: {source}")]
	Enumeration {
		name: String,
		#[source]
		source: EnumError,
	},
}

/// Result type for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Outcome of loading a document.
///
/// A malformed enumeration does not prevent the others from loading.
#[derive(Debug, Default)]
pub struct ConfigLoadReport {
	/// Successfully built registries, in declaration order.
	pub registries: Vec<Registry>,
	/// Per-enumeration failures, in declaration order.
	pub errors: Vec<ConfigError>,
}

impl ConfigLoadReport {
	/// Returns the registry labeled `name`.
	pub fn get(&self, name: &str) -> Option<&Registry> {
		self.registries.iter().find(|reg| reg.label() == name)
	}
}

/// Parses `content` and builds every declared enumeration.
///
/// Only a TOML syntax or shape error fails the whole load.
pub fn load_from_str(content: &str) -> Result<ConfigLoadReport> {
	let config: EnumerationsConfig = toml::from_str(content)?;
	let mut report = ConfigLoadReport::default();
	let mut seen = FxHashSet::default();

	for decl in &config.enumerations {
		if !seen.insert(decl.name.as_str()) {
			report.errors.push(ConfigError::DuplicateEnumeration(decl.name.clone()));
			continue;
		}

		match decl.build() {
			Ok(registry) => report.registries.push(registry),
			Err(source) => report.errors.push(ConfigError::Enumeration {
				name: decl.name.clone(),
				source,
			}),
		}
	}

	tracing::debug!(loaded = report.registries.len(), failed = report.errors.len(), "loaded enumeration config");
	Ok(report)
}

/// Reads and loads the document at `path`.
pub fn load_from_path(path: &Path) -> Result<ConfigLoadReport> {
	let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
		path: path.to_path_buf(),
		source,
	})?;
	load_from_str(&content)
}

//! Identifier normalization for extension lookup.
//!
//! Extension names arrive from user-facing config (`"insect-kinds"`,
//! `"vw/models"`). They map onto a lowercase module path and an
//! UpperCamelCase type name, the same convention `enumeration!` declarations
//! follow (`mod insect_kinds { enumeration! { pub InsectKinds { .. } } }`).

use heck::ToUpperCamelCase;

/// Keeps ASCII alphanumerics and `_`; every other char becomes `replacement`.
pub fn make_identifier(raw: &str, replacement: &str) -> String {
	let mut out = String::with_capacity(raw.len());
	for c in raw.chars() {
		if c == '_' || c.is_ascii_alphanumeric() {
			out.push(c);
		} else {
			out.push_str(replacement);
		}
	}
	out
}

/// Module path and type name derived from an extension name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionNames {
	/// Lowercase module path, prefixed when a prefix was supplied.
	pub module: String,
	/// UpperCamelCase type name.
	pub name: String,
}

/// Derives the conventional module path and type name for `extension`.
///
/// `/`, `-` and `+` are folded to `_` first. An empty prefix counts as none.
pub fn extension_names(extension: &str, module_prefix: Option<&str>) -> ExtensionNames {
	let normalized = extension.replace(['/', '-', '+'], "_");
	let lower = normalized.to_lowercase();

	let module = match module_prefix {
		Some(prefix) if !prefix.is_empty() => format!("{prefix}::{lower}"),
		_ => lower,
	};

	ExtensionNames {
		module,
		name: normalized.to_upper_camel_case(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn make_identifier_replaces_invalid_chars() {
		assert_eq!(make_identifier("foo-bar baz", ""), "foobarbaz");
		assert_eq!(make_identifier("foo-bar baz", "_"), "foo_bar_baz");
		assert_eq!(make_identifier("A_1.b", "x"), "A_1xb");
	}

	#[test]
	fn extension_names_without_prefix() {
		let names = extension_names("insect-kinds", None);
		assert_eq!(names.module, "insect_kinds");
		assert_eq!(names.name, "InsectKinds");
	}

	#[test]
	fn extension_names_with_prefix() {
		let names = extension_names("VW/Models+Extra", Some("cars"));
		assert_eq!(names.module, "cars::vw_models_extra");
		assert_eq!(names.name, "VwModelsExtra");
	}

	#[test]
	fn empty_prefix_is_ignored() {
		assert_eq!(extension_names("moth", Some("")).module, "moth");
	}
}

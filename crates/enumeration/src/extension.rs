//! Resolving statically declared enumerations by name.
//!
//! Every [`enumeration!`](crate::enumeration) declaration submits an
//! [`EnumerationDef`] to a link-time inventory. Lookups follow the naming
//! convention from [`enumkit_util::extension_names`]: the extension
//! `"insect-kinds"` under prefix `"zoo"` resolves to type `InsectKinds`
//! declared in module `zoo::insect_kinds`.

use enumkit_util::extension_names;
use tracing::info;

use crate::Registry;

/// Static description of a declared enumeration.
#[derive(Debug)]
pub struct EnumerationDef {
	/// `module_path!()` of the declaration site.
	pub module: &'static str,
	/// Type name given to the declaration.
	pub name: &'static str,
	/// Returns the lazily built registry.
	pub registry: fn() -> &'static Registry,
}

/// Inventory wrapper for enumeration definitions.
pub struct EnumerationReg(pub &'static EnumerationDef);
inventory::collect!(EnumerationReg);

/// Iterates every declared enumeration linked into the binary.
pub fn registered() -> impl Iterator<Item = &'static EnumerationDef> {
	inventory::iter::<EnumerationReg>.into_iter().map(|reg| reg.0)
}

/// Finds the enumeration named `name` declared in `module`.
pub fn import_name(module: &str, name: &str) -> Option<&'static EnumerationDef> {
	info!(module, name, "trying to import enumeration");

	let found = registered().find(|def| def.module == module && def.name == name);
	match found {
		Some(_) => info!(module, name, "importing enumeration"),
		None => info!(module, name, "failed to import enumeration"),
	}
	found
}

/// Resolves an extension name to its registry.
pub fn import_extension(extension: &str, module_prefix: Option<&str>) -> Option<&'static Registry> {
	let names = extension_names(extension, module_prefix);
	import_name(&names.module, &names.name).map(|def| (def.registry)())
}

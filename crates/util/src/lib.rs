//! Small helpers shared by the enumkit crates.
//!
//! - [`prose`]: renders sequences as English lists (`"a, b, and c"`).
//! - [`ident`]: normalizes extension names into module and type names.
//! - [`helpers`]: predicates and map utilities.

pub mod helpers;
pub mod ident;
pub mod prose;

pub use helpers::{contains_any, contains_whitespace, curry, invert_map, values_sorted_by_key};
pub use ident::{ExtensionNames, extension_names, make_identifier};
pub use prose::{ProseOptions, seq_to_string, seq_to_string_or};

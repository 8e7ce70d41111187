//! Sequence-to-prose rendering.
//!
//! Lists of one or two elements read naturally (`"a"`, `"a and b"`); longer
//! lists use a serial separator before the conjunction (`"a, b, and c"`).

use std::fmt::Display;

/// Formatting knobs for [`seq_to_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProseOptions<'a> {
	/// Word placed before the final element.
	pub conjunction: &'a str,
	/// Placed directly after every element but the last.
	pub separator: &'a str,
	/// Inserted between separators, the conjunction and the next element.
	pub whitespace: &'a str,
}

impl Default for ProseOptions<'_> {
	fn default() -> Self {
		Self {
			conjunction: "and",
			separator: ",",
			whitespace: " ",
		}
	}
}

impl<'a> ProseOptions<'a> {
	/// Sets the conjunction (`"and"`, `"or"`, ...).
	pub fn conjunction(mut self, conjunction: &'a str) -> Self {
		self.conjunction = conjunction;
		self
	}

	/// Sets the separator.
	pub fn separator(mut self, separator: &'a str) -> Self {
		self.separator = separator;
		self
	}

	/// Sets the whitespace.
	pub fn whitespace(mut self, whitespace: &'a str) -> Self {
		self.whitespace = whitespace;
		self
	}
}

/// Renders `seq` as an English list.
pub fn seq_to_string<T: Display>(seq: &[T], options: &ProseOptions<'_>) -> String {
	let ProseOptions {
		conjunction,
		separator,
		whitespace,
	} = *options;

	match seq {
		[] => String::new(),
		[only] => only.to_string(),
		[first, second] => format!("{first}{whitespace}{conjunction}{whitespace}{second}"),
		[init @ .., last] => {
			let joiner = format!("{separator}{whitespace}");
			let mut out = init
				.iter()
				.map(ToString::to_string)
				.collect::<Vec<_>>()
				.join(&joiner);
			out.push_str(&joiner);
			out.push_str(conjunction);
			out.push_str(whitespace);
			out.push_str(&last.to_string());
			out
		}
	}
}

/// Like [`seq_to_string`], rendering `default` when `seq` is empty.
pub fn seq_to_string_or<T: Display>(seq: &[T], default: &[T], options: &ProseOptions<'_>) -> String {
	if seq.is_empty() {
		seq_to_string(default, options)
	} else {
		seq_to_string(seq, options)
	}
}

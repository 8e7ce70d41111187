//! Property checks over randomly generated entry lists.

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use super::Registry;
use crate::Entry;

/// Distinct uppercase names, each paired with an optional explicit value.
fn entries() -> impl Strategy<Value = Vec<Entry>> {
	prop::collection::hash_set("[A-Z][A-Z_]{0,7}", 0..24)
		.prop_flat_map(|names| {
			let names: Vec<String> = names.into_iter().collect();
			let len = names.len();
			(Just(names), prop::collection::vec(prop::option::of(-50_i64..50), len))
		})
		.prop_map(|(names, values)| {
			let mut seen = FxHashSet::default();
			names
				.into_iter()
				.zip(values)
				.map(|(name, value)| match value {
					Some(v) if seen.insert(v) => Entry::Valued(name, v),
					_ => Entry::Bare(name),
				})
				.collect()
		})
}

proptest! {
	#[test]
	fn indices_agree_with_len(entries in entries(), first in -20_i64..20) {
		let reg = Registry::from_entries("prop", entries.clone(), first).unwrap();
		prop_assert_eq!(reg.len(), entries.len());
		prop_assert!(reg.tables.is_consistent());

		let names: FxHashSet<&str> = reg.names().collect();
		let values: FxHashSet<i64> = reg.items().map(|item| item.value()).collect();
		prop_assert_eq!(names.len(), reg.len());
		prop_assert_eq!(values.len(), reg.len());
	}

	#[test]
	fn name_value_round_trip(entries in entries(), first in -20_i64..20) {
		let reg = Registry::from_entries("prop", entries, first).unwrap();
		for item in &reg {
			let v = item.value();
			prop_assert_eq!(reg.by_name(reg.by_value(v).unwrap().as_str(), true).unwrap().as_int(), v);

			let n = item.name();
			prop_assert_eq!(reg.by_value(reg.by_name(n, true).unwrap().as_int()).unwrap().as_str(), n);
		}
	}

	#[test]
	fn auto_values_increase(entries in entries(), first in -20_i64..20) {
		let reg = Registry::from_entries("prop", entries.clone(), first).unwrap();
		let explicit: FxHashSet<i64> = entries.iter().filter_map(Entry::explicit_value).collect();

		let mut last: Option<i64> = None;
		for entry in entries.iter().filter(|e| e.explicit_value().is_none()) {
			let value = reg.by_name(entry.name(), true).unwrap().value();
			prop_assert!(value >= first);
			prop_assert!(!explicit.contains(&value));
			if let Some(prev) = last {
				prop_assert!(value > prev);
			}
			last = Some(value);
		}
	}

	#[test]
	fn explicit_values_are_kept(entries in entries(), first in -20_i64..20) {
		let reg = Registry::from_entries("prop", entries.clone(), first).unwrap();
		for entry in &entries {
			if let Entry::Valued(name, value) = entry {
				prop_assert_eq!(reg.by_name(name, true).unwrap().value(), *value);
			}
		}
	}
}

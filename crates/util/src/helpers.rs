//! Generic predicates and map utilities.

use std::hash::Hash;

/// Binds the first argument of a two-argument function.
pub fn curry<A, B, R, F>(f: F, a: A) -> impl Fn(B) -> R
where
	F: Fn(A, B) -> R,
	A: Clone,
{
	move |b| f(a.clone(), b)
}

/// Returns true if any element of `seq` is in `set`.
pub fn contains_any<T, I>(seq: I, set: &[T]) -> bool
where
	I: IntoIterator<Item = T>,
	T: PartialEq,
{
	seq.into_iter().any(|c| set.contains(&c))
}

/// Returns true if `s` contains a space, tab, carriage return or newline.
pub fn contains_whitespace(s: &str) -> bool {
	contains_any(s.chars(), &[' ', '\t', '\r', '\n'])
}

/// Swaps keys and values. Later pairs win when values collide.
pub fn invert_map<K, V, I, M>(pairs: I) -> M
where
	I: IntoIterator<Item = (K, V)>,
	V: Eq + Hash,
	M: FromIterator<(V, K)>,
{
	pairs.into_iter().map(|(k, v)| (v, k)).collect()
}

/// Collects the values of `pairs` ordered by their keys.
pub fn values_sorted_by_key<K: Ord, V, I>(pairs: I) -> Vec<V>
where
	I: IntoIterator<Item = (K, V)>,
{
	let mut pairs: Vec<(K, V)> = pairs.into_iter().collect();
	pairs.sort_by(|a, b| a.0.cmp(&b.0));
	pairs.into_iter().map(|(_, v)| v).collect()
}

//! Bulk constructors.
//!
//! Every factory registers through [`KeyedRegistry::add`], so duplicate keys keep
//! the first value seen and later ones are dropped.

use std::hash::Hash;

use super::KeyedRegistry;

impl<K: Hash + Eq, V> KeyedRegistry<K, V> {
	/// Builds a registry from values, deriving each key with `key_of`.
	pub fn from_values<I, F>(values: I, mut key_of: F) -> Self
	where
		I: IntoIterator<Item = V>,
		F: FnMut(&V) -> K,
	{
		let values = values.into_iter();
		let mut registry = Self::with_capacity(values.size_hint().0);
		let mut dropped = 0usize;

		for value in values {
			if !registry.add(key_of(&value), value) {
				dropped += 1;
			}
		}

		tracing::debug!(kept = registry.len(), dropped, "registry built from values");
		registry
	}

	/// Builds a registry from foreign pairs, mapping each through `convert`.
	pub fn from_pairs_with<I, OK, OV, F>(pairs: I, convert: F) -> Self
	where
		I: IntoIterator<Item = (OK, OV)>,
		F: FnMut((OK, OV)) -> (K, V),
	{
		let pairs = pairs.into_iter().map(convert);
		let mut registry = Self::with_capacity(pairs.size_hint().0);
		let dropped = registry.add_many(pairs).filter(|added| !added).count();

		tracing::debug!(kept = registry.len(), dropped, "registry built from pairs");
		registry
	}

	/// Builds a registry from typed pairs.
	pub fn from_pairs<I>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Self::from_pairs_with(pairs, |pair| pair)
	}
}

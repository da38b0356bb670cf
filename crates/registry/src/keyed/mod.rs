//! Unique-keyed registry container.
//!
//! # Role
//!
//! [`KeyedRegistry`] is the container extension code registers into. It wraps an
//! [`IndexMap`] so that keys, values and pairs enumerate in registration order, and it
//! guards that map with a first-wins [`KeyedRegistry::add`].
//!
//! # Construction
//!
//! | Path | Entry point |
//! |------|-------------|
//! | Empty | [`KeyedRegistry::new`], [`Default`] |
//! | Existing mapping | [`KeyedRegistry::from_map`], `From<EntryMap>` |
//! | Values + key derivation | [`KeyedRegistry::from_values`] |
//! | Foreign pairs + conversion | [`KeyedRegistry::from_pairs_with`] |
//! | Typed pairs | [`KeyedRegistry::from_pairs`], [`FromIterator`] |
//!
//! # Invariants
//!
//! - Must never overwrite through `add`.
//!   - Enforced in: [`KeyedRegistry::add`] (vacant-entry insertion only).
//!   - Tested by: `tests::add_duplicate_keeps_original`, `tests::prop_add_never_overwrites`
//!   - Failure symptom: a later plugin silently replaces an earlier registration.
//!
//! - Must enumerate in first-insertion order.
//!   - Enforced in: backing [`IndexMap`]; [`KeyedRegistry::set`] replaces in place.
//!   - Tested by: `tests::keys_follow_insertion_order`, `tests::set_keeps_position`
//!   - Failure symptom: listings reorder between runs.
//!
//! - The shared empty sentinel is never mutated.
//!   - Enforced in: [`KeyedRegistry::empty`] only hands out `&'static Self`.
//!   - Tested by: `tests::sentinel_is_shared_per_type_pair`
//!
//! [`KeyedRegistry::as_map_mut`] is the one way around the first invariant.

mod batch;
mod factory;
mod sentinel;


use std::fmt;
use std::hash::Hash;
use std::ops::Index;

pub use batch::Registrations;
use indexmap::map::{Entry, IntoIter, Iter, Keys, Values};
use indexmap::{Equivalent, IndexMap};
use rustc_hash::FxBuildHasher;

use crate::RegistryError;

/// Backing map of a [`KeyedRegistry`].
pub type EntryMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Insertion-ordered container mapping unique keys to registered values.
///
/// Registration through [`add`](Self::add) is first-wins; replacement through
/// [`set`](Self::set) is last-wins. There is no removal.
pub struct KeyedRegistry<K, V> {
	entries: EntryMap<K, V>,
}

impl<K, V> KeyedRegistry<K, V> {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self {
			entries: IndexMap::with_hasher(FxBuildHasher),
		}
	}

	/// Creates an empty registry with room for `capacity` entries.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			entries: IndexMap::with_capacity_and_hasher(capacity, FxBuildHasher),
		}
	}

	/// Wraps an existing mapping, keeping its order.
	pub fn from_map(entries: EntryMap<K, V>) -> Self {
		Self { entries }
	}

	/// Returns the number of registered entries.
	#[inline]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if nothing is registered.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Registered keys in insertion order.
	pub fn keys(&self) -> Keys<'_, K, V> {
		self.entries.keys()
	}

	/// Registered values in insertion order.
	pub fn values(&self) -> Values<'_, K, V> {
		self.entries.values()
	}

	/// Key/value pairs in insertion order.
	pub fn pairs(&self) -> Iter<'_, K, V> {
		self.entries.iter()
	}

	/// Same as [`pairs`](Self::pairs).
	pub fn iter(&self) -> Iter<'_, K, V> {
		self.entries.iter()
	}

	/// Borrows the backing map.
	pub fn as_map(&self) -> &EntryMap<K, V> {
		&self.entries
	}

	/// Mutably borrows the backing map.
	///
	/// This is an escape hatch for callers that need direct map algorithms
	/// (sorting, retain, removal). Writes made here skip the first-wins check
	/// of [`add`](Self::add), so a caller can overwrite or drop registrations
	/// that other code relied on.
	pub fn as_map_mut(&mut self) -> &mut EntryMap<K, V> {
		&mut self.entries
	}

	/// Consumes the registry, returning the backing map.
	pub fn into_map(self) -> EntryMap<K, V> {
		self.entries
	}
}

impl<K: Hash + Eq, V> KeyedRegistry<K, V> {
	/// Registers `value` under `key` unless the key is taken.
	///
	/// Returns `true` if the pair was inserted and `false` if `key` was already
	/// registered, in which case the stored value is left untouched.
	pub fn add(&mut self, key: K, value: V) -> bool {
		match self.entries.entry(key) {
			Entry::Occupied(slot) => {
				tracing::trace!(index = slot.index(), "add rejected: key already registered");
				false
			}
			Entry::Vacant(slot) => {
				slot.insert(value);
				true
			}
		}
	}

	/// Registers each pair in order, lazily.
	///
	/// The returned iterator yields one `bool` per pair with the same meaning as
	/// [`add`](Self::add). A pair is inserted when its result is pulled, so a key
	/// repeated inside the batch yields `true` and then `false`.
	pub fn add_many<I>(&mut self, pairs: I) -> Registrations<'_, K, V, I::IntoIter>
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Registrations::new(self, pairs.into_iter())
	}

	/// Writes `value` under `key`, replacing any existing value.
	///
	/// A replaced key keeps its position in iteration order. Returns the
	/// previous value.
	pub fn set(&mut self, key: K, value: V) -> Option<V> {
		self.entries.insert(key, value)
	}

	/// Returns the value registered under `key`.
	pub fn get<Q>(&self, key: &Q) -> Result<&V, RegistryError>
	where
		Q: ?Sized + Hash + Equivalent<K> + fmt::Debug,
	{
		self.entries
			.get(key)
			.ok_or_else(|| RegistryError::key_not_found(&key))
	}

	/// Returns true if `key` is registered.
	pub fn contains_key<Q>(&self, key: &Q) -> bool
	where
		Q: ?Sized + Hash + Equivalent<K>,
	{
		self.entries.contains_key(key)
	}
}

impl<K, V> Default for KeyedRegistry<K, V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<K: Clone, V: Clone> Clone for KeyedRegistry<K, V> {
	fn clone(&self) -> Self {
		Self {
			entries: self.entries.clone(),
		}
	}
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for KeyedRegistry<K, V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.entries.iter()).finish()
	}
}

/// Registries are equal when they hold the same pairs, regardless of order.
impl<K: Hash + Eq, V: PartialEq> PartialEq for KeyedRegistry<K, V> {
	fn eq(&self, other: &Self) -> bool {
		self.entries == other.entries
	}
}

impl<K: Hash + Eq, V: Eq> Eq for KeyedRegistry<K, V> {}

/// Panics with [`RegistryError::KeyNotFound`] when the key is absent; use
/// [`KeyedRegistry::get`] to handle that case.
impl<K, V, Q> Index<&Q> for KeyedRegistry<K, V>
where
	K: Hash + Eq,
	Q: ?Sized + Hash + Equivalent<K> + fmt::Debug,
{
	type Output = V;

	fn index(&self, key: &Q) -> &V {
		match self.get(key) {
			Ok(value) => value,
			Err(err) => panic!("{err}"),
		}
	}
}

impl<K, V> From<EntryMap<K, V>> for KeyedRegistry<K, V> {
	fn from(entries: EntryMap<K, V>) -> Self {
		Self::from_map(entries)
	}
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for KeyedRegistry<K, V> {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
		Self::from_pairs(pairs)
	}
}

/// First-wins, like [`KeyedRegistry::add`].
impl<K: Hash + Eq, V> Extend<(K, V)> for KeyedRegistry<K, V> {
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, pairs: I) {
		self.add_many(pairs).for_each(drop);
	}
}

impl<'a, K, V> IntoIterator for &'a KeyedRegistry<K, V> {
	type Item = (&'a K, &'a V);
	type IntoIter = Iter<'a, K, V>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

impl<K, V> IntoIterator for KeyedRegistry<K, V> {
	type Item = (K, V);
	type IntoIter = IntoIter<K, V>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

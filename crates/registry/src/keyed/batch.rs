use std::hash::Hash;
use std::iter::FusedIterator;

use super::KeyedRegistry;

/// Lazy bulk registration returned by [`KeyedRegistry::add_many`].
///
/// Each call to `next` inserts one pair and yields whether it was new.
#[must_use = "pairs are only registered as the iterator is consumed"]
pub struct Registrations<'a, K, V, I> {
	registry: &'a mut KeyedRegistry<K, V>,
	pairs: I,
}

impl<'a, K, V, I> Registrations<'a, K, V, I> {
	pub(super) fn new(registry: &'a mut KeyedRegistry<K, V>, pairs: I) -> Self {
		Self { registry, pairs }
	}
}

impl<K, V, I> Iterator for Registrations<'_, K, V, I>
where
	K: Hash + Eq,
	I: Iterator<Item = (K, V)>,
{
	type Item = bool;

	fn next(&mut self) -> Option<bool> {
		let (key, value) = self.pairs.next()?;
		Some(self.registry.add(key, value))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.pairs.size_hint()
	}
}

impl<K, V, I> ExactSizeIterator for Registrations<'_, K, V, I>
where
	K: Hash + Eq,
	I: ExactSizeIterator<Item = (K, V)>,
{
}

impl<K, V, I> FusedIterator for Registrations<'_, K, V, I>
where
	K: Hash + Eq,
	I: FusedIterator<Item = (K, V)>,
{
}

//! Shared empty registries.
//!
//! Rust has no generic statics, so sentinels live in one process-wide table keyed by
//! the [`TypeId`] of the registry type. Each sentinel is allocated on first request and
//! leaked; it is only ever reachable through a shared `'static` borrow.

use std::any::{Any, TypeId};
use std::sync::LazyLock;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::KeyedRegistry;

type SentinelTable = FxHashMap<TypeId, &'static (dyn Any + Send + Sync)>;

static SENTINELS: LazyLock<RwLock<SentinelTable>> = LazyLock::new(Default::default);

impl<K, V> KeyedRegistry<K, V>
where
	K: Send + Sync + 'static,
	V: Send + Sync + 'static,
{
	/// Returns the shared empty registry for this key/value pair.
	///
	/// Every call for the same `K` and `V` returns the same instance. Use it as a
	/// "no registry" default; the shared borrow keeps it from being mutated.
	pub fn empty() -> &'static Self {
		let id = TypeId::of::<Self>();

		let found = SENTINELS.read().get(&id).copied();
		let sentinel = match found {
			Some(sentinel) => sentinel,
			None => *SENTINELS.write().entry(id).or_insert_with(|| {
				let leaked: &'static Self = Box::leak(Box::new(Self::new()));
				leaked as &'static (dyn Any + Send + Sync)
			}),
		};

		sentinel
			.downcast_ref::<Self>()
			.expect("sentinel table is keyed by TypeId")
	}

	/// Returns true if `self` is the shared empty registry.
	pub fn is_sentinel(&self) -> bool {
		std::ptr::eq(self, Self::empty())
	}
}

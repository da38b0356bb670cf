//! Registry containers for extension APIs.
//!
//! A [`KeyedRegistry`] maps unique keys to registered values (commands,
//! handlers, assets) and keeps them in registration order.
//!
//! # Duplicate policy
//!
//! | Path | Policy |
//! |------|--------|
//! | [`KeyedRegistry::add`], [`KeyedRegistry::add_many`], the `from_*` factories | First wins. The existing entry is kept and the caller sees `false`. |
//! | [`KeyedRegistry::set`] | Last wins. The value is always written. |
//!
//! Neither path treats a duplicate as an error; batch registration keeps going
//! and reports conflicts per pair.

pub mod error;
pub mod keyed;

pub use error::RegistryError;
pub use indexmap::Equivalent;
pub use keyed::{EntryMap, KeyedRegistry, Registrations};

//! Interactive harness for modkit registries.
//!
//! Reads one command per line, dispatches it through a [`CommandTable`], and
//! prints the result. The commands operate on a scratch
//! `KeyedRegistry<String, String>` so registration behavior can be tried by hand.

pub mod commands;
pub mod config;
pub mod session;

pub use commands::{CommandDef, CommandError, CommandOutcome, CommandTable};
pub use config::{ConfigError, ReplConfig};
pub use session::{Session, run};

#[cfg(test)]
mod tests;

//! Command definitions and the table that dispatches them.
//!
//! The table is a [`KeyedRegistry`] from command name or alias to its definition.
//! Names are registered first, then aliases; an alias that collides with a name
//! already in the table is logged and skipped.

mod builtins;

use modkit_primitives::{FileUrlError, InvalidVersionFormat};
use modkit_registry::{KeyedRegistry, RegistryError};

pub use builtins::BUILTINS;

use crate::session::Session;

/// Function signature for command handlers.
pub type CommandHandler = fn(&mut Session, &[&str]) -> Result<CommandOutcome, CommandError>;

/// A command the harness can dispatch.
#[derive(Debug)]
pub struct CommandDef {
	/// Primary name.
	pub name: &'static str,
	/// Alternative names.
	pub aliases: &'static [&'static str],
	/// Argument synopsis, shown by `help` and usage errors.
	pub usage: &'static str,
	pub description: &'static str,
	pub handler: CommandHandler,
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
	/// Nothing to print.
	Continue,
	/// Print this text and keep going.
	Print(String),
	/// Leave the loop.
	Quit,
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
	#[error("unknown command: {0} (try `help`)")]
	UnknownCommand(String),

	#[error("usage: {0}")]
	Usage(&'static str),

	#[error(transparent)]
	Registry(#[from] RegistryError),

	#[error(transparent)]
	Version(#[from] InvalidVersionFormat),

	#[error("invalid URL: {0}")]
	Url(#[from] url::ParseError),

	#[error(transparent)]
	File(#[from] FileUrlError),

	#[error("read failed: {0}")]
	Io(#[from] std::io::Error),
}

/// Name and alias lookup for command definitions.
pub struct CommandTable {
	by_name: KeyedRegistry<&'static str, &'static CommandDef>,
}

impl CommandTable {
	/// Builds a table holding the builtin commands.
	pub fn builtin() -> Self {
		Self::with_commands(BUILTINS)
	}

	/// Builds a table from `defs`. Earlier definitions win name and alias conflicts.
	pub fn with_commands(defs: impl IntoIterator<Item = &'static CommandDef>) -> Self {
		let defs: Vec<&'static CommandDef> = defs.into_iter().collect();
		let mut by_name = KeyedRegistry::from_values(defs.iter().copied(), |def| def.name);

		let aliases: Vec<(&'static str, &'static CommandDef)> = defs
			.iter()
			.flat_map(|def| def.aliases.iter().map(move |alias| (*alias, *def)))
			.collect();
		let owners: Vec<(&'static str, &'static str)> =
			aliases.iter().map(|(alias, def)| (*alias, def.name)).collect();

		for ((alias, owner), added) in owners.into_iter().zip(by_name.add_many(aliases)) {
			if !added {
				tracing::warn!(alias, owner, "alias already taken; skipped");
			}
		}

		Self { by_name }
	}

	/// Resolves a command name or alias.
	pub fn lookup(&self, name: &str) -> Result<&'static CommandDef, CommandError> {
		self.by_name
			.get(name)
			.copied()
			.map_err(|_| CommandError::UnknownCommand(name.to_string()))
	}

	/// Registers an extra command under its name and aliases.
	///
	/// Returns false if the name is taken; aliases that are taken are skipped.
	pub fn register(&mut self, def: &'static CommandDef) -> bool {
		if !self.by_name.add(def.name, def) {
			return false;
		}
		self.by_name
			.extend(def.aliases.iter().map(|alias| (*alias, def)));
		true
	}

	/// Primary definitions in registration order, without alias duplicates.
	pub fn commands(&self) -> impl Iterator<Item = &'static CommandDef> + '_ {
		self.by_name
			.pairs()
			.filter(|(key, def)| **key == def.name)
			.map(|(_, def)| *def)
	}
}

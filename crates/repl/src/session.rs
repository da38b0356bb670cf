use std::io::{self, BufRead, Write};

use modkit_registry::KeyedRegistry;

use crate::commands::{CommandError, CommandOutcome, CommandTable};
use crate::config::ReplConfig;

/// State shared by commands across one harness run.
pub struct Session {
	commands: CommandTable,
	store: KeyedRegistry<String, String>,
	prompt: String,
}

impl Session {
	/// Creates a session with the builtin commands, seeded from `config`.
	pub fn new(config: ReplConfig) -> Self {
		Self::with_commands(CommandTable::builtin(), config)
	}

	pub fn with_commands(commands: CommandTable, config: ReplConfig) -> Self {
		Self {
			commands,
			store: KeyedRegistry::from(config.entries),
			prompt: config.prompt,
		}
	}

	pub fn commands(&self) -> &CommandTable {
		&self.commands
	}

	/// The scratch registry commands operate on.
	pub fn store(&self) -> &KeyedRegistry<String, String> {
		&self.store
	}

	pub fn store_mut(&mut self) -> &mut KeyedRegistry<String, String> {
		&mut self.store
	}

	pub fn prompt(&self) -> &str {
		&self.prompt
	}

	/// Runs one input line. Blank lines do nothing.
	pub fn dispatch(&mut self, line: &str) -> Result<CommandOutcome, CommandError> {
		let mut words = line.split_whitespace();
		let Some(name) = words.next() else {
			return Ok(CommandOutcome::Continue);
		};
		let args: Vec<&str> = words.collect();

		let def = self.commands.lookup(name)?;
		tracing::debug!(command = def.name, args = args.len(), "dispatch");
		(def.handler)(self, &args)
	}
}

/// Reads commands from `input` until `quit` or end of input.
///
/// Command errors are written to `output` and do not stop the loop.
pub fn run(session: &mut Session, mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
	let mut line = String::new();
	loop {
		write!(output, "{}", session.prompt())?;
		output.flush()?;

		line.clear();
		if input.read_line(&mut line)? == 0 {
			writeln!(output)?;
			break;
		}

		match session.dispatch(&line) {
			Ok(CommandOutcome::Continue) => {}
			Ok(CommandOutcome::Print(text)) => writeln!(output, "{text}")?,
			Ok(CommandOutcome::Quit) => break,
			Err(err) => {
				tracing::debug!(%err, "command failed");
				writeln!(output, "error: {err}")?;
			}
		}
	}
	Ok(())
}

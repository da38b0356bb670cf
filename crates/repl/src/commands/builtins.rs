use std::cmp::Ordering;
use std::io::{BufRead, BufReader};

use modkit_primitives::{Version, open_file_url};
use url::Url;

use super::{CommandDef, CommandError, CommandOutcome};
use crate::session::Session;

pub static BUILTINS: &[CommandDef] = &[
	CommandDef {
		name: "help",
		aliases: &["?"],
		usage: "help",
		description: "List commands",
		handler: cmd_help,
	},
	CommandDef {
		name: "add",
		aliases: &["register"],
		usage: "add <key> <value...>",
		description: "Register a value unless the key is taken",
		handler: cmd_add,
	},
	CommandDef {
		name: "set",
		aliases: &[],
		usage: "set <key> <value...>",
		description: "Write a value, replacing any existing one",
		handler: cmd_set,
	},
	CommandDef {
		name: "get",
		aliases: &[],
		usage: "get <key>",
		description: "Show the value registered under a key",
		handler: cmd_get,
	},
	CommandDef {
		name: "keys",
		aliases: &[],
		usage: "keys",
		description: "List keys in registration order",
		handler: cmd_keys,
	},
	CommandDef {
		name: "values",
		aliases: &[],
		usage: "values",
		description: "List values in registration order",
		handler: cmd_values,
	},
	CommandDef {
		name: "list",
		aliases: &["ls"],
		usage: "list",
		description: "List key = value pairs",
		handler: cmd_list,
	},
	CommandDef {
		name: "count",
		aliases: &[],
		usage: "count",
		description: "Show the number of entries",
		handler: cmd_count,
	},
	CommandDef {
		name: "batch",
		aliases: &[],
		usage: "batch <key=value>...",
		description: "Register several pairs, reporting each one",
		handler: cmd_batch,
	},
	CommandDef {
		name: "import",
		aliases: &[],
		usage: "import <file-url>",
		description: "Register key=value lines from a local file",
		handler: cmd_import,
	},
	CommandDef {
		name: "version",
		aliases: &["ver"],
		usage: "version <version> [<other>]",
		description: "Normalize a version, or compare two",
		handler: cmd_version,
	},
	CommandDef {
		name: "quit",
		aliases: &["exit", "q"],
		usage: "quit",
		description: "Leave the harness",
		handler: cmd_quit,
	},
];

fn cmd_help(session: &mut Session, _args: &[&str]) -> Result<CommandOutcome, CommandError> {
	let width = session
		.commands()
		.commands()
		.map(|def| def.usage.len())
		.max()
		.unwrap_or(0);

	let lines: Vec<String> = session
		.commands()
		.commands()
		.map(|def| {
			let line = format!("{:<width$}  {}", def.usage, def.description);
			if def.aliases.is_empty() {
				line
			} else {
				format!("{line} (aliases: {})", def.aliases.join(", "))
			}
		})
		.collect();
	Ok(CommandOutcome::Print(lines.join("\n")))
}

fn key_and_value<'a>(
	args: &[&'a str],
	usage: &'static str,
) -> Result<(&'a str, String), CommandError> {
	match args {
		[key, value @ ..] if !value.is_empty() => Ok((*key, value.join(" "))),
		_ => Err(CommandError::Usage(usage)),
	}
}

fn cmd_add(session: &mut Session, args: &[&str]) -> Result<CommandOutcome, CommandError> {
	let (key, value) = key_and_value(args, "add <key> <value...>")?;
	let message = if session.store_mut().add(key.to_string(), value) {
		format!("added {key}")
	} else {
		format!("{key} is already registered (use `set` to replace it)")
	};
	Ok(CommandOutcome::Print(message))
}

fn cmd_set(session: &mut Session, args: &[&str]) -> Result<CommandOutcome, CommandError> {
	let (key, value) = key_and_value(args, "set <key> <value...>")?;
	let message = match session.store_mut().set(key.to_string(), value) {
		Some(previous) => format!("replaced {key} (was {previous})"),
		None => format!("set {key}"),
	};
	Ok(CommandOutcome::Print(message))
}

fn cmd_get(session: &mut Session, args: &[&str]) -> Result<CommandOutcome, CommandError> {
	let [key] = args else {
		return Err(CommandError::Usage("get <key>"));
	};
	Ok(CommandOutcome::Print(session.store().get(*key)?.clone()))
}

fn listing<I: IntoIterator<Item = String>>(lines: I) -> CommandOutcome {
	let text = lines.into_iter().collect::<Vec<_>>().join("\n");
	if text.is_empty() {
		CommandOutcome::Print("(empty)".to_string())
	} else {
		CommandOutcome::Print(text)
	}
}

fn cmd_keys(session: &mut Session, _args: &[&str]) -> Result<CommandOutcome, CommandError> {
	Ok(listing(session.store().keys().cloned()))
}

fn cmd_values(session: &mut Session, _args: &[&str]) -> Result<CommandOutcome, CommandError> {
	Ok(listing(session.store().values().cloned()))
}

fn cmd_list(session: &mut Session, _args: &[&str]) -> Result<CommandOutcome, CommandError> {
	Ok(listing(
		session
			.store()
			.pairs()
			.map(|(key, value)| format!("{key} = {value}")),
	))
}

fn cmd_count(session: &mut Session, _args: &[&str]) -> Result<CommandOutcome, CommandError> {
	Ok(CommandOutcome::Print(session.store().len().to_string()))
}

fn cmd_batch(session: &mut Session, args: &[&str]) -> Result<CommandOutcome, CommandError> {
	const USAGE: &str = "batch <key=value>...";
	if args.is_empty() {
		return Err(CommandError::Usage(USAGE));
	}

	let pairs = args
		.iter()
		.map(|arg| {
			arg.split_once('=')
				.map(|(key, value)| (key.to_string(), value.to_string()))
				.ok_or(CommandError::Usage(USAGE))
		})
		.collect::<Result<Vec<_>, _>>()?;
	let keys: Vec<String> = pairs.iter().map(|(key, _)| key.clone()).collect();

	let lines = keys
		.into_iter()
		.zip(session.store_mut().add_many(pairs))
		.map(|(key, added)| {
			if added {
				format!("{key}: added")
			} else {
				format!("{key}: already registered")
			}
		})
		.collect::<Vec<_>>();
	Ok(CommandOutcome::Print(lines.join("\n")))
}

fn cmd_import(session: &mut Session, args: &[&str]) -> Result<CommandOutcome, CommandError> {
	let [raw] = args else {
		return Err(CommandError::Usage("import <file-url>"));
	};
	let url = Url::parse(raw)?;
	let reader = BufReader::new(open_file_url(&url)?);

	let mut pairs = Vec::new();
	for line in reader.lines() {
		let line = line?;
		let line = line.trim();
		if line.is_empty() || line.starts_with('#') {
			continue;
		}
		match line.split_once('=') {
			Some((key, value)) => pairs.push((key.trim().to_string(), value.trim().to_string())),
			None => tracing::warn!(line, "import: skipping line without '='"),
		}
	}

	let total = pairs.len();
	let added = session
		.store_mut()
		.add_many(pairs)
		.filter(|added| *added)
		.count();
	tracing::info!(%url, added, total, "imported entries");
	Ok(CommandOutcome::Print(format!("imported {added} of {total} entries")))
}

fn cmd_version(_session: &mut Session, args: &[&str]) -> Result<CommandOutcome, CommandError> {
	match args {
		[raw] => {
			let version: Version = raw.parse()?;
			let kind = if version.is_prerelease() {
				"pre-release"
			} else {
				"release"
			};
			Ok(CommandOutcome::Print(format!("{version} ({kind})")))
		}
		[left, right] => {
			let left: Version = left.parse()?;
			let right: Version = right.parse()?;
			let message = match left.cmp_precedence(&right) {
				Ordering::Less => format!("{left} < {right}"),
				Ordering::Greater => format!("{left} > {right}"),
				Ordering::Equal if left == right => format!("{left} == {right}"),
				Ordering::Equal => format!("{left} and {right} have equal precedence"),
			};
			Ok(CommandOutcome::Print(message))
		}
		_ => Err(CommandError::Usage("version <version> [<other>]")),
	}
}

fn cmd_quit(_session: &mut Session, _args: &[&str]) -> Result<CommandOutcome, CommandError> {
	Ok(CommandOutcome::Quit)
}

use std::io::Cursor;

use pretty_assertions::assert_eq;

use crate::commands::{BUILTINS, CommandDef, CommandError, CommandOutcome, CommandTable};
use crate::config::ReplConfig;
use crate::session::{Session, run};

fn session() -> Session {
	Session::new(ReplConfig::default())
}

fn transcript(session: &mut Session, input: &str) -> String {
	let mut output = Vec::new();
	run(session, Cursor::new(input), &mut output).unwrap();
	String::from_utf8(output).unwrap()
}

fn printed(session: &mut Session, line: &str) -> String {
	match session.dispatch(line) {
		Ok(CommandOutcome::Print(text)) => text,
		other => panic!("expected printed output for {line:?}, got {other:?}"),
	}
}

#[test]
fn test_add_get_transcript() {
	let mut session = session();
	let output = transcript(
		&mut session,
		"add greeting hello world\nadd greeting bye\nget greeting\nget missing\nquit\nget greeting\n",
	);

	assert_eq!(
		output,
		"> added greeting\n\
		 > greeting is already registered (use `set` to replace it)\n\
		 > hello world\n\
		 > error: key not found: \"missing\"\n\
		 > "
	);
}

#[test]
fn test_eof_ends_loop() {
	let mut session = session();
	assert_eq!(transcript(&mut session, "count\n"), "> 0\n> \n");
}

#[test]
fn test_blank_line_is_ignored() {
	let mut session = session();
	assert_eq!(session.dispatch("   \n").unwrap(), CommandOutcome::Continue);
}

#[test]
fn test_unknown_command() {
	let mut session = session();
	let err = session.dispatch("frobnicate now").unwrap_err();
	assert!(matches!(err, CommandError::UnknownCommand(ref name) if name == "frobnicate"));
	assert_eq!(err.to_string(), "unknown command: frobnicate (try `help`)");
}

#[test]
fn test_set_overrides_add() {
	let mut session = session();
	printed(&mut session, "add theme dark");
	assert_eq!(printed(&mut session, "set theme light"), "replaced theme (was dark)");
	assert_eq!(printed(&mut session, "set font mono"), "set font");
	assert_eq!(printed(&mut session, "get theme"), "light");
	assert_eq!(printed(&mut session, "keys"), "theme\nfont");
}

#[test]
fn test_listings_follow_registration_order() {
	let mut session = session();
	assert_eq!(printed(&mut session, "list"), "(empty)");

	printed(&mut session, "add b 2");
	printed(&mut session, "add a 1");
	assert_eq!(printed(&mut session, "keys"), "b\na");
	assert_eq!(printed(&mut session, "values"), "2\n1");
	assert_eq!(printed(&mut session, "ls"), "b = 2\na = 1");
	assert_eq!(printed(&mut session, "count"), "2");
}

#[test]
fn test_batch_reports_each_pair() {
	let mut session = session();
	printed(&mut session, "add x 0");
	assert_eq!(
		printed(&mut session, "batch y=1 x=2 y=3 z=4"),
		"y: added\nx: already registered\ny: already registered\nz: added"
	);
	assert_eq!(printed(&mut session, "get y"), "1");
	assert_eq!(printed(&mut session, "get x"), "0");
}

#[test]
fn test_batch_rejects_malformed_pair() {
	let mut session = session();
	let err = session.dispatch("batch a=1 b").unwrap_err();
	assert!(matches!(err, CommandError::Usage(_)));
	assert!(session.store().is_empty(), "nothing registered on parse failure");
}

#[test]
fn test_usage_errors() {
	let mut session = session();
	for line in ["add key", "set", "get", "get a b", "version", "import"] {
		assert!(
			matches!(session.dispatch(line), Err(CommandError::Usage(_))),
			"{line:?} should be a usage error"
		);
	}
}

#[test]
fn test_version_command() {
	let mut session = session();
	assert_eq!(printed(&mut session, "version 1.2.3"), "1.2.3 (release)");
	assert_eq!(printed(&mut session, "ver 1-2-3-rc1"), "1.2.3-rc1 (pre-release)");
	assert_eq!(printed(&mut session, "version 1.2.3 1.3.0"), "1.2.3 < 1.3.0");
	assert_eq!(printed(&mut session, "version 2.0.0-x 1.9.9"), "2.0.0-x > 1.9.9");
	assert_eq!(printed(&mut session, "version 1.0.0 1.0.0"), "1.0.0 == 1.0.0");
	assert_eq!(
		printed(&mut session, "version 1.0.0-a 1.0.0-b"),
		"1.0.0-a and 1.0.0-b have equal precedence"
	);

	let err = session.dispatch("version abc").unwrap_err();
	assert!(matches!(err, CommandError::Version(_)));
}

#[test]
fn test_import_from_file_url() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("entries.txt");
	std::fs::write(&path, "# plugin entries\nalpha = 1\n\nbeta=2\nnot a pair\nalpha = 3\n").unwrap();
	let url = url::Url::from_file_path(&path).unwrap();

	let mut session = session();
	assert_eq!(
		printed(&mut session, &format!("import {url}")),
		"imported 2 of 3 entries"
	);
	assert_eq!(printed(&mut session, "get alpha"), "1");
	assert_eq!(printed(&mut session, "get beta"), "2");

	let err = session.dispatch("import not-a-url").unwrap_err();
	assert!(matches!(err, CommandError::Url(_)));
}

#[test]
fn test_config_entries_seed_store() {
	let config = ReplConfig::parse("prompt = \"$ \"\n[entries]\nz = \"26\"\na = \"1\"\n").unwrap();
	let mut session = Session::new(config);

	assert_eq!(session.prompt(), "$ ");
	assert_eq!(printed(&mut session, "keys"), "z\na");
	assert_eq!(transcript(&mut session, "get z\nexit\n"), "$ 26\n$ ");
}

#[test]
fn test_help_lists_primary_commands_once() {
	let mut session = session();
	let help = printed(&mut session, "?");
	assert_eq!(help.lines().count(), BUILTINS.len());
	assert!(help.contains("aliases: exit, q"));
}

#[test]
fn test_help_line_layout() {
	let mut session = session();
	let help = printed(&mut session, "help");
	let width = BUILTINS.iter().map(|def| def.usage.len()).max().unwrap();

	let first = help.lines().next().unwrap();
	assert_eq!(first, format!("{:<width$}  List commands (aliases: ?)", "help"));
	assert!(help.lines().any(|line| line.starts_with("set ") && !line.contains("aliases")));
	assert!(!help.ends_with('\n'));
}

#[test]
fn test_aliases_resolve_to_their_command() {
	let table = CommandTable::builtin();
	assert_eq!(table.lookup("q").unwrap().name, "quit");
	assert_eq!(table.lookup("register").unwrap().name, "add");
	assert_eq!(table.commands().count(), BUILTINS.len());
}

fn cmd_shadow(_session: &mut Session, _args: &[&str]) -> Result<CommandOutcome, CommandError> {
	Ok(CommandOutcome::Print("shadow".to_string()))
}

static SHADOW: CommandDef = CommandDef {
	name: "shadow",
	aliases: &["q", "sh"],
	usage: "shadow",
	description: "Test command whose alias collides with quit",
	handler: cmd_shadow,
};

static DUPLICATE_GET: CommandDef = CommandDef {
	name: "get",
	aliases: &[],
	usage: "get",
	description: "Collides with the builtin get",
	handler: cmd_shadow,
};

/// Registered commands never displace existing names or aliases.
#[test]
fn test_register_is_first_wins() {
	let mut table = CommandTable::builtin();
	assert!(table.register(&SHADOW));
	assert!(!table.register(&DUPLICATE_GET));

	assert_eq!(table.lookup("q").unwrap().name, "quit");
	assert_eq!(table.lookup("sh").unwrap().name, "shadow");
	assert_eq!(table.lookup("get").unwrap().description, "Show the value registered under a key");

	let mut session = Session::with_commands(table, ReplConfig::default());
	assert_eq!(printed(&mut session, "sh"), "shadow");
}

#[test]
fn test_alias_conflicts_skipped_at_build() {
	let table = CommandTable::with_commands(BUILTINS.iter().chain([&SHADOW]));
	assert_eq!(table.lookup("q").unwrap().name, "quit");
	assert_eq!(table.lookup("sh").unwrap().name, "shadow");
}

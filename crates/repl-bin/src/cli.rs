use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "modkit")]
#[command(about = "Interactive harness for modkit registries")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// TOML file with a prompt and entries to preload
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Prompt shown before each command (overrides the config file)
	#[arg(long, short = 'p')]
	pub prompt: Option<String>,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}

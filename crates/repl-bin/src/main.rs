mod cli;

use std::io;

use clap::Parser;
use cli::Cli;
use modkit_primitives::Coalesce;
use modkit_repl::{ReplConfig, Session, run};
use tracing::info;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let subscriber = tracing_subscriber::fmt()
		.with_max_level(if cli.verbose {
			tracing::Level::DEBUG
		} else {
			tracing::Level::INFO
		})
		.with_writer(io::stderr)
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	let mut config = match &cli.config {
		Some(path) => ReplConfig::load(path)?,
		None => ReplConfig::default(),
	};
	config.prompt = cli.prompt.unwrap_or_default().coalesce(config.prompt);

	let mut session = Session::new(config);
	info!(entries = session.store().len(), "starting harness");

	run(&mut session, io::stdin().lock(), io::stdout().lock())?;
	Ok(())
}

mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Run a batch conversion described by a config file
	Run(tools::run::Subcommand),

	/// Convert a single tile data file, optionally with its metatiles
	Extract(tools::extract::Subcommand),

	/// Render a JSON document back to PNG
	Render(tools::render::Subcommand),

	/// Write a JSON document back to binary tile data or metatile records
	Pack(tools::pack::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Run(arguments) => tools::run::run(arguments),
		Commands::Extract(arguments) => tools::extract::run(arguments),
		Commands::Render(arguments) => tools::render::run(arguments),
		Commands::Pack(arguments) => tools::pack::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["tileset"]).unwrap_err().to_string();
		assert!(err.contains("\nUsage: tileset [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["tileset", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("tileset "));
	}

	#[test]
	fn subcommands() {
		for (name, about) in [
			("run", "Run a batch conversion"),
			("extract", "Convert a single tile data file"),
			("render", "Render a JSON document back to PNG"),
			("pack", "Write a JSON document back to binary"),
		] {
			let err = run_command(vec!["tileset", name]).unwrap_err().to_string();
			assert!(err.starts_with(about), "{name}: {err}");
		}
	}
}

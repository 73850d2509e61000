use anyhow::{Result, bail};
use std::path::PathBuf;
use tileset::{batch::Processor, config::Config};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// batch configuration (*.yml, *.yaml or *.json)
	#[arg()]
	config: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	eprintln!("run {:?}", arguments.config);

	let config = Config::from_path(&arguments.config)?;
	let summary = Processor::new(config)?.run()?;
	eprintln!("{summary}");

	if summary.failed > 0 {
		bail!("{} of {} conversions failed", summary.failed, summary.failed + summary.succeeded);
	}
	Ok(())
}

use anyhow::Result;
use std::path::PathBuf;
use tileset::{batch::Processor, config::Config};
use tileset_image::save_png;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// JSON document with metatile or tile data
	#[arg()]
	json_file: PathBuf,

	/// PNG file to write
	#[arg()]
	png_file: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	eprintln!("render {:?} to {:?}", arguments.json_file, arguments.png_file);

	let mut processor = Processor::new(Config::default())?;
	let (image, _) = processor.render_file(&arguments.json_file)?;
	save_png(&image, &arguments.png_file)
}

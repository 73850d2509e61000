use anyhow::Result;
use std::path::PathBuf;
use tileset::{
	batch::{Job, Processor},
	config::{Config, ManualEntry, OutputConfig, OutputType},
};
use tileset_core::constants::{DEFAULT_CACHE_SIZE_KIB, DEFAULT_OUT_DIR};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// tile data file (*.chr)
	#[arg()]
	tile_file: PathBuf,

	/// metatile file (*.mtiles) indexing the tile data; without it a plain tile sheet is written
	#[arg(long, short, value_name = "FILE")]
	metatiles: Option<PathBuf>,

	/// output directory
	#[arg(long, short, value_name = "PREFIX", default_value = DEFAULT_OUT_DIR)]
	output: PathBuf,

	/// tile cache size in KiB, 0 for unbounded
	#[arg(long, value_name = "KIB", default_value_t = DEFAULT_CACHE_SIZE_KIB)]
	cache_size: u64,

	/// write only the PNG image
	#[arg(long, conflicts_with = "json_only", display_order = 1)]
	png_only: bool,

	/// write only the JSON document
	#[arg(long, display_order = 1)]
	json_only: bool,
}

impl Subcommand {
	fn output_type(&self) -> OutputType {
		match (self.png_only, self.json_only) {
			(true, _) => OutputType::PngOnly,
			(_, true) => OutputType::JsonOnly,
			_ => OutputType::Both,
		}
	}
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	eprintln!("extract {:?}", arguments.tile_file);

	let entry = ManualEntry {
		tile_data: arguments.tile_file.clone(),
		metatile_data: arguments.metatiles.clone(),
		name: None,
	};
	let config = Config {
		manual: vec![entry.clone()],
		output: OutputConfig {
			directory: arguments.output.clone(),
			output_type: arguments.output_type(),
			..OutputConfig::default()
		},
		cache_size: arguments.cache_size,
		..Config::default()
	};

	let written = Processor::new(config)?.process(&Job::from(&entry))?;
	for path in written {
		log::info!("wrote {path:?}");
	}
	Ok(())
}

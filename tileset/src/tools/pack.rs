use anyhow::{Context, Result};
use std::{fs, path::PathBuf};
use tileset_core::{
	codec::{encode_metatiles, encode_tiles},
	json::{JsonDocument, read_document},
};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// JSON document with tile data or metatile data
	#[arg()]
	json_file: PathBuf,

	/// binary file to write: tile data (*.chr) for tile documents, metatile records (*.mtiles) for metatile documents
	#[arg()]
	output_file: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	eprintln!("pack {:?} to {:?}", arguments.json_file, arguments.output_file);

	let (data, description) = match read_document(&arguments.json_file)? {
		JsonDocument::Tiles(tiles) => (encode_tiles(&tiles), format!("{} tiles", tiles.len())),
		JsonDocument::Metatiles(set) => (
			encode_metatiles(&set.metatiles),
			format!("{} metatiles", set.metatiles.len()),
		),
	};

	fs::write(&arguments.output_file, data).with_context(|| format!("failed to write {:?}", arguments.output_file))?;
	log::info!("packed {description}");
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use std::fs;
	use tempfile::TempDir;
	use tileset_core::codec::{decode_metatiles, decode_tiles};
	use tileset_core::types::Metatile;

	#[test]
	fn pack_tile_sheet() {
		let dir = TempDir::new().unwrap();
		let chr = dir.path().join("sheet.chr");
		run_command(vec!["tileset", "pack", "-q", "../testdata/json/sheet.json", chr.to_str().unwrap()]).unwrap();

		let data = fs::read(&chr).unwrap();
		assert_eq!(data.len(), 32);
		let tiles = decode_tiles(&data);
		assert_eq!(tiles.tiles, vec![[0; 64], [1; 64]]);
	}

	#[test]
	fn pack_metatiles() {
		let dir = TempDir::new().unwrap();
		let mtiles = dir.path().join("blocks.mtiles");
		run_command(vec!["tileset", "pack", "-q", "../testdata/json/blocks.json", mtiles.to_str().unwrap()]).unwrap();

		let data = fs::read(&mtiles).unwrap();
		assert_eq!(data, vec![0, 1, 2, 3, 0x10, 0xff, 3, 3]);
		assert_eq!(
			decode_metatiles(&data, &mtiles).unwrap(),
			vec![Metatile::new(0, 1, 2, 3), Metatile::new(0x10, 0xff, 3, 3)]
		);
	}

	#[test]
	fn missing_json_fails() {
		let dir = TempDir::new().unwrap();
		let out = dir.path().join("x.chr");
		assert!(run_command(vec!["tileset", "pack", "../testdata/json/missing.json", out.to_str().unwrap()]).is_err());
		assert!(!out.exists());
	}
}

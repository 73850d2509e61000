//! Runs the conversions a [`Config`] describes.
//!
//! Every tile data file becomes a JSON document and/or a PNG: metatile sets when a metatile
//! file is paired with it, plain tile sheets otherwise. JSON files listed in `convert_to_png`
//! are rendered back to PNG. A failing file is logged and skipped.

mod jobs;
mod paths;

pub use jobs::{Job, collect_jobs, collect_json_files, find_files};
pub use paths::relative_path;

use crate::config::Config;
use anyhow::{Context, Result};
use std::{
	fmt, fs,
	path::{Path, PathBuf},
};
use tileset_core::{
	cache::BoundedTileCache,
	codec::read_metatile_file,
	constants::{EXTENSION_JSON, EXTENSION_PNG, OUT_TILES_PER_ROW},
	extract::{ExtractOptions, extract_metatiles},
	json::{self, JsonDocument},
	types::{Metatiles, Tiles},
};
use tileset_image::{CompositorOptions, IndexedImage, MetatileCompositor, render_tiles, save_png};

/// Counts of one batch run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
	pub succeeded: usize,
	pub failed: usize,
	pub written: Vec<PathBuf>,
}

impl fmt::Display for Summary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} converted, {} failed, {} files written",
			self.succeeded,
			self.failed,
			self.written.len()
		)
	}
}

pub struct Processor {
	config: Config,
	options: ExtractOptions,
	cache: BoundedTileCache,
}

impl Processor {
	pub fn new(config: Config) -> Result<Self> {
		let options = config.extract_options()?;
		let cache = BoundedTileCache::from_kib(config.cache_size);
		Ok(Self { config, options, cache })
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn cache(&self) -> &BoundedTileCache {
		&self.cache
	}

	/// Converts every job and JSON file, logging and counting failures.
	pub fn run(&mut self) -> Result<Summary> {
		let mut summary = Summary::default();

		for job in collect_jobs(&self.config)? {
			match self.process(&job) {
				Ok(written) => {
					summary.succeeded += 1;
					summary.written.extend(written);
				}
				Err(err) => {
					log::error!("failed to convert {:?}: {err:#}", job.tile_data);
					summary.failed += 1;
				}
			}
		}

		for file in collect_json_files(&self.config)? {
			match self.render_json(&file) {
				Ok(written) => {
					summary.succeeded += 1;
					summary.written.push(written);
				}
				Err(err) => {
					log::error!("failed to render {file:?}: {err:#}");
					summary.failed += 1;
				}
			}
		}

		log::info!("{summary}");
		log::debug!("{:?}", self.cache);
		Ok(summary)
	}

	/// Converts one tile data file and returns the paths written.
	pub fn process(&mut self, job: &Job) -> Result<Vec<PathBuf>> {
		log::debug!("converting {job:?}");
		let tile_count = self.cache.tiles(&job.tile_data)?.len();

		match &job.metatile_data {
			Some(metatile_data) => {
				let records = read_metatile_file(metatile_data)?;
				let set = extract_metatiles(records, &job.tile_data, tile_count, &self.options)?;
				self.write_metatiles(&set, job)
			}
			None => {
				let mut tiles = self.cache.tiles(&job.tile_data)?.clone();
				tiles.palette.clone_from(&self.options.palette);
				self.write_tiles(&tiles, job)
			}
		}
	}

	fn write_metatiles(&mut self, set: &Metatiles, job: &Job) -> Result<Vec<PathBuf>> {
		let output_type = self.config.output.output_type;
		let mut written = Vec::new();

		if output_type.writes_json() {
			let dir = self.output_dir(false, true, &job.relative_dir)?;
			let mut portable = set.clone();
			portable.map_files(|file| relative_path(file, &dir));
			let path = output_file(&dir, &job.name, EXTENSION_JSON);
			write_text(&path, &json::metatiles_to_string(&portable))?;
			written.push(path);
		}

		if output_type.writes_png() {
			let image = self.compose(set)?;
			let path = output_file(&self.output_dir(false, false, &job.relative_dir)?, &job.name, EXTENSION_PNG);
			save_png(&image, &path)?;
			written.push(path);
		}

		Ok(written)
	}

	fn write_tiles(&mut self, tiles: &Tiles, job: &Job) -> Result<Vec<PathBuf>> {
		let output_type = self.config.output.output_type;
		let mut written = Vec::new();

		if output_type.writes_json() {
			let path = output_file(&self.output_dir(true, true, &job.relative_dir)?, &job.name, EXTENSION_JSON);
			write_text(&path, &json::tiles_to_string(tiles))?;
			written.push(path);
		}

		if output_type.writes_png() {
			let image = render_tiles(tiles, &tiles.palette)?;
			let path = output_file(&self.output_dir(true, false, &job.relative_dir)?, &job.name, EXTENSION_PNG);
			save_png(&image, &path)?;
			written.push(path);
		}

		Ok(written)
	}

	/// Renders a JSON file of either form to PNG in the configured output directory.
	pub fn render_json(&mut self, file: &Path) -> Result<PathBuf> {
		let name = jobs::file_stem(file);
		let (image, tile_sheet) = self.render_file(file)?;
		let path = output_file(&self.output_dir(tile_sheet, false, Path::new(""))?, &name, EXTENSION_PNG);
		save_png(&image, &path)?;
		Ok(path)
	}

	/// Renders a JSON file of either form, returning the image and whether it is a tile sheet.
	/// Relative tile file paths in metatile sets are resolved against the directory of the file.
	pub fn render_file(&mut self, file: &Path) -> Result<(IndexedImage, bool)> {
		match json::read_document(file)? {
			JsonDocument::Metatiles(mut set) => {
				if let Some(base) = file.parent() {
					set.rebase(base);
				}
				Ok((self.compose(&set)?, false))
			}
			JsonDocument::Tiles(tiles) => Ok((render_tiles(&tiles, &tiles.palette)?, true)),
		}
	}

	fn compose(&mut self, set: &Metatiles) -> Result<IndexedImage> {
		let options = CompositorOptions {
			tiles_per_row: OUT_TILES_PER_ROW,
			air_tile: self.options.air_tile,
		};
		Ok(MetatileCompositor::new(&mut self.cache, options).compose(set)?)
	}

	fn output_dir(&self, tile_sheet: bool, json: bool, relative_dir: &Path) -> Result<PathBuf> {
		let dir = self.config.output.directory_for(tile_sheet, json).join(relative_dir);
		fs::create_dir_all(&dir).with_context(|| format!("failed to create {dir:?}"))?;
		Ok(dir)
	}
}

fn output_file(dir: &Path, name: &str, extension: &str) -> PathBuf {
	dir.join(format!("{name}.{extension}"))
}

fn write_text(path: &Path, text: &str) -> Result<()> {
	fs::write(path, text).with_context(|| format!("failed to write {path:?}"))?;
	log::debug!("wrote {path:?}");
	Ok(())
}

use super::{ManualEntry, OutputConfig};
use anyhow::{Context, Result, bail, ensure};
use serde::Deserialize;
use std::{
	collections::BTreeMap,
	fs::File,
	io::{BufReader, Read},
	path::{Path, PathBuf},
};
use tileset_core::{
	constants::{AIR_TILE_ID, DEFAULT_CACHE_SIZE_KIB, DEFAULT_PALETTE, PALETTE_SIZE},
	extract::ExtractOptions,
	types::{Color, TileRef},
};

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Directory scanned recursively for tile data files
	#[serde(default)]
	pub auto: Option<PathBuf>,

	/// Never pair tile files found by `auto` with metatile files
	#[serde(default)]
	pub ignore_metatiles: bool,

	/// Explicit tile/metatile file pairs
	#[serde(default)]
	pub manual: Vec<ManualEntry>,

	/// JSON files (or directories of them) to render back to PNG
	#[serde(default)]
	pub convert_to_png: Vec<PathBuf>,

	#[serde(default)]
	pub output: OutputConfig,

	/// Bound of the tile cache in KiB, `0` for no bound
	#[serde(default = "default_cache_size")]
	pub cache_size: u64,

	/// Four colours as `rrggbb`
	#[serde(default)]
	pub palette: Option<Vec<String>>,

	/// A single `range: file[:offset]` reference added to every metatile set
	#[serde(default)]
	pub empty_tile: Option<BTreeMap<String, String>>,

	/// Hex index drawn as the blank air tile
	#[serde(default)]
	pub air_tile: Option<String>,
}

fn default_cache_size() -> u64 {
	DEFAULT_CACHE_SIZE_KIB
}

impl Default for Config {
	fn default() -> Self {
		Self {
			auto: None,
			ignore_metatiles: false,
			manual: Vec::new(),
			convert_to_png: Vec::new(),
			output: OutputConfig::default(),
			cache_size: default_cache_size(),
			palette: None,
			empty_tile: None,
			air_tile: None,
		}
	}
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	/// Reads a config file and resolves relative paths against its directory.
	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("failed to open config {path:?}"))?;
		let mut config =
			Config::from_reader(BufReader::new(file)).with_context(|| format!("failed to parse config {path:?}"))?;

		if let Some(base) = path.parent() {
			config.resolve_paths(base);
		}
		config.validate()?;
		Ok(config)
	}

	pub fn resolve_paths(&mut self, base: &Path) {
		if let Some(auto) = &mut self.auto {
			*auto = base.join(&*auto);
		}
		for entry in &mut self.manual {
			entry.resolve_paths(base);
		}
		for path in &mut self.convert_to_png {
			*path = base.join(&*path);
		}
		self.output.resolve_paths(base);
		if let Some(empty_tile) = &mut self.empty_tile {
			for reference in empty_tile.values_mut() {
				*reference = base.join(&*reference).to_string_lossy().into_owned();
			}
		}
	}

	/// Checks that there is something to do and that the derived options parse.
	pub fn validate(&self) -> Result<()> {
		ensure!(
			self.auto.is_some() || !self.manual.is_empty() || !self.convert_to_png.is_empty(),
			"config has nothing to do: set at least one of auto, manual or convert_to_png"
		);
		self.extract_options()?;
		Ok(())
	}

	pub fn palette(&self) -> Result<Vec<Color>> {
		let Some(colors) = &self.palette else {
			return Ok(DEFAULT_PALETTE.to_vec());
		};
		ensure!(
			colors.len() == PALETTE_SIZE,
			"palette must contain exactly {PALETTE_SIZE} colors, got {}",
			colors.len()
		);
		colors
			.iter()
			.map(|color| color.parse::<Color>().map_err(anyhow::Error::msg))
			.collect()
	}

	pub fn empty_tile(&self) -> Result<Option<TileRef>> {
		let Some(entries) = &self.empty_tile else {
			return Ok(None);
		};
		let mut entries = entries.iter();
		let (Some((range, reference)), None) = (entries.next(), entries.next()) else {
			bail!("empty_tile must hold exactly one range");
		};
		let tile_ref = TileRef::parse(range, reference).context("invalid empty_tile")?;
		Ok(Some(tile_ref))
	}

	pub fn air_tile(&self) -> Result<u8> {
		match &self.air_tile {
			None => Ok(AIR_TILE_ID),
			Some(text) => u8::from_str_radix(text, 16).with_context(|| format!("invalid air_tile {text:?}")),
		}
	}

	pub fn extract_options(&self) -> Result<ExtractOptions> {
		Ok(ExtractOptions {
			palette: self.palette()?,
			empty_tile: self.empty_tile()?,
			air_tile: Some(self.air_tile()?),
		})
	}

	pub fn cache_size_bytes(&self) -> u64 {
		self.cache_size.saturating_mul(1024)
	}
}

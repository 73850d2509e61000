use serde::Deserialize;
use std::path::{Path, PathBuf};

/// A tile data file, optionally paired with the metatile file that indexes it.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ManualEntry {
	pub tile_data: PathBuf,
	#[serde(default)]
	pub metatile_data: Option<PathBuf>,
	/// Base name of the outputs; defaults to the stem of the metatile file, or of the tile file.
	#[serde(default)]
	pub name: Option<String>,
}

impl ManualEntry {
	pub fn output_name(&self) -> String {
		if let Some(name) = &self.name {
			return name.clone();
		}
		let source = self.metatile_data.as_ref().unwrap_or(&self.tile_data);
		source
			.file_stem()
			.map_or_else(|| "output".to_string(), |stem| stem.to_string_lossy().into_owned())
	}

	pub fn resolve_paths(&mut self, base: &Path) {
		self.tile_data = base.join(&self.tile_data);
		if let Some(metatile_data) = &mut self.metatile_data {
			*metatile_data = base.join(&*metatile_data);
		}
	}
}

impl From<(&str, Option<&str>)> for ManualEntry {
	fn from((tile_data, metatile_data): (&str, Option<&str>)) -> Self {
		Self {
			tile_data: PathBuf::from(tile_data),
			metatile_data: metatile_data.map(PathBuf::from),
			name: None,
		}
	}
}

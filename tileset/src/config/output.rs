use serde::Deserialize;
use std::path::{Path, PathBuf};
use tileset_core::constants::DEFAULT_OUT_DIR;

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputType {
	#[default]
	Both,
	PngOnly,
	JsonOnly,
}

impl OutputType {
	pub fn writes_png(self) -> bool {
		self != OutputType::JsonOnly
	}

	pub fn writes_json(self) -> bool {
		self != OutputType::PngOnly
	}
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
	/// Root of all outputs
	#[serde(default = "default_directory")]
	pub directory: PathBuf,

	#[serde(default, rename = "type")]
	pub output_type: OutputType,

	/// Subdirectory for PNG files
	#[serde(default)]
	pub img_directory: Option<PathBuf>,

	/// Subdirectory for JSON files
	#[serde(default)]
	pub json_directory: Option<PathBuf>,

	/// Subdirectory for plain tile sheets, placed above the image/json subdirectories
	#[serde(default)]
	pub tile_directory: Option<PathBuf>,
}

fn default_directory() -> PathBuf {
	PathBuf::from(DEFAULT_OUT_DIR)
}

impl Default for OutputConfig {
	fn default() -> Self {
		Self {
			directory: default_directory(),
			output_type: OutputType::default(),
			img_directory: None,
			json_directory: None,
			tile_directory: None,
		}
	}
}

impl OutputConfig {
	/// `directory[/tile_directory][/json_directory | /img_directory]`
	pub fn directory_for(&self, tile_sheet: bool, json: bool) -> PathBuf {
		let mut path = self.directory.clone();
		if let (true, Some(tile_directory)) = (tile_sheet, &self.tile_directory) {
			path.push(tile_directory);
		}
		let sub = if json { &self.json_directory } else { &self.img_directory };
		if let Some(sub) = sub {
			path.push(sub);
		}
		path
	}

	pub fn resolve_paths(&mut self, base: &Path) {
		self.directory = base.join(&self.directory);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(false, false, "out/img")]
	#[case(false, true, "out/json")]
	#[case(true, false, "out/tiles/img")]
	#[case(true, true, "out/tiles/json")]
	fn directories(#[case] tile_sheet: bool, #[case] json: bool, #[case] expected: &str) {
		let output = OutputConfig {
			directory: PathBuf::from("out"),
			img_directory: Some(PathBuf::from("img")),
			json_directory: Some(PathBuf::from("json")),
			tile_directory: Some(PathBuf::from("tiles")),
			..OutputConfig::default()
		};
		assert_eq!(output.directory_for(tile_sheet, json), PathBuf::from(expected));
	}

	#[test]
	fn defaults() {
		let output = OutputConfig::default();
		assert_eq!(output.directory_for(true, true), PathBuf::from("extracted"));
		assert!(output.output_type.writes_png() && output.output_type.writes_json());
		assert!(!OutputType::PngOnly.writes_json());
		assert!(!OutputType::JsonOnly.writes_png());
	}
}

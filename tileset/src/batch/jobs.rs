use crate::config::{Config, ManualEntry};
use anyhow::{Context, Result};
use std::{
	fs,
	path::{Path, PathBuf},
};
use tileset_core::constants::{EXTENSION_JSON, EXTENSION_METATILE_DATA, EXTENSION_TILE_DATA};

/// One tile data file to convert, with its optional metatile file.
#[derive(Clone, Debug, PartialEq)]
pub struct Job {
	pub tile_data: PathBuf,
	pub metatile_data: Option<PathBuf>,
	/// Base name of the written files
	pub name: String,
	/// Subdirectory below the output directories, mirroring the scanned tree
	pub relative_dir: PathBuf,
}

impl From<&ManualEntry> for Job {
	fn from(entry: &ManualEntry) -> Self {
		Self {
			tile_data: entry.tile_data.clone(),
			metatile_data: entry.metatile_data.clone(),
			name: entry.output_name(),
			relative_dir: PathBuf::new(),
		}
	}
}

/// All jobs of a config: the `auto` scan first, then the manual entries.
pub fn collect_jobs(config: &Config) -> Result<Vec<Job>> {
	let mut jobs = Vec::new();
	if let Some(root) = &config.auto {
		for tile_data in find_files(root, EXTENSION_TILE_DATA)? {
			let metatile_data = Some(tile_data.with_extension(EXTENSION_METATILE_DATA))
				.filter(|path| !config.ignore_metatiles && path.is_file());
			let relative_dir = tile_data
				.parent()
				.and_then(|dir| dir.strip_prefix(root).ok())
				.map(Path::to_path_buf)
				.unwrap_or_default();
			let name = file_stem(&tile_data);
			jobs.push(Job {
				tile_data,
				metatile_data,
				name,
				relative_dir,
			});
		}
		log::info!("found {} tile data files in {root:?}", jobs.len());
	}
	jobs.extend(config.manual.iter().map(Job::from));
	Ok(jobs)
}

/// The JSON files to render: listed files as they are, directories scanned recursively.
pub fn collect_json_files(config: &Config) -> Result<Vec<PathBuf>> {
	let mut files = Vec::new();
	for path in &config.convert_to_png {
		if path.is_dir() {
			files.extend(find_files(path, EXTENSION_JSON)?);
		} else {
			files.push(path.clone());
		}
	}
	Ok(files)
}

/// Files below `dir` with the given extension, sorted by path.
pub fn find_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
	let mut found = Vec::new();
	let mut pending = vec![dir.to_path_buf()];
	while let Some(dir) = pending.pop() {
		let entries = fs::read_dir(&dir).with_context(|| format!("failed to read directory {dir:?}"))?;
		for entry in entries {
			let path = entry?.path();
			if path.is_dir() {
				pending.push(path);
			} else if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case(extension)) {
				found.push(path);
			}
		}
	}
	found.sort();
	Ok(found)
}

pub fn file_stem(path: &Path) -> String {
	path
		.file_stem()
		.map_or_else(|| "output".to_string(), |stem| stem.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use tempfile::TempDir;

	fn touch(dir: &Path, name: &str) {
		let path = dir.join(name);
		fs::create_dir_all(path.parent().unwrap()).unwrap();
		fs::write(path, [0u8; 16]).unwrap();
	}

	#[test]
	fn auto_scan_pairs_metatiles() {
		let dir = TempDir::new().unwrap();
		let root = dir.path();
		touch(root, "b.chr");
		touch(root, "b.mtiles");
		touch(root, "world/a.CHR");
		touch(root, "world/notes.txt");
		touch(root, "world/deep/c.chr");

		let config = Config {
			auto: Some(root.to_path_buf()),
			manual: vec![ManualEntry::from(("x.chr", Some("y.mtiles")))],
			..Config::default()
		};
		let jobs = collect_jobs(&config).unwrap();

		assert_eq!(
			jobs,
			vec![
				Job {
					tile_data: root.join("b.chr"),
					metatile_data: Some(root.join("b.mtiles")),
					name: "b".to_string(),
					relative_dir: PathBuf::new(),
				},
				Job {
					tile_data: root.join("world/a.CHR"),
					metatile_data: None,
					name: "a".to_string(),
					relative_dir: PathBuf::from("world"),
				},
				Job {
					tile_data: root.join("world/deep/c.chr"),
					metatile_data: None,
					name: "c".to_string(),
					relative_dir: PathBuf::from("world/deep"),
				},
				Job {
					tile_data: PathBuf::from("x.chr"),
					metatile_data: Some(PathBuf::from("y.mtiles")),
					name: "y".to_string(),
					relative_dir: PathBuf::new(),
				},
			]
		);
	}

	#[test]
	fn ignore_metatiles() {
		let dir = TempDir::new().unwrap();
		touch(dir.path(), "b.chr");
		touch(dir.path(), "b.mtiles");
		let config = Config {
			auto: Some(dir.path().to_path_buf()),
			ignore_metatiles: true,
			..Config::default()
		};
		let jobs = collect_jobs(&config).unwrap();
		assert_eq!(jobs.len(), 1);
		assert_eq!(jobs[0].metatile_data, None);
	}

	#[test]
	fn json_files() {
		let dir = TempDir::new().unwrap();
		touch(dir.path(), "json/a.json");
		touch(dir.path(), "json/sub/b.json");
		touch(dir.path(), "json/c.png");
		let config = Config {
			convert_to_png: vec![dir.path().join("json"), dir.path().join("single.json")],
			..Config::default()
		};
		assert_eq!(
			collect_json_files(&config).unwrap(),
			vec![
				dir.path().join("json/a.json"),
				dir.path().join("json/sub/b.json"),
				dir.path().join("single.json")
			]
		);
	}

	#[test]
	fn missing_auto_directory() {
		let config = Config {
			auto: Some(PathBuf::from("/definitely/not/here")),
			..Config::default()
		};
		assert!(collect_jobs(&config).is_err());
	}
}

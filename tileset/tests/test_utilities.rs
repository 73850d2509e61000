#![allow(unused)]

use assert_cmd::{Command, cargo};
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

#[cfg(windows)]
pub const BINARY_NAME: &str = "tileset.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "tileset";

/// Helper to get a testdata file path.
pub fn get_testdata(filename: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR"))
		.parent()
		.unwrap()
		.join("testdata")
		.join(filename)
}

/// Helper to get a temp output file path.
pub fn get_temp_output(filename: &str) -> (TempDir, PathBuf) {
	let dir = tempdir().expect("failed to create temp dir");
	let path = dir.path().join(filename);
	(dir, path)
}

/// Helper to create a Command for the tileset binary.
pub fn tileset_cmd() -> Command {
	Command::new(cargo::cargo_bin!())
}

pub fn path_str(path: &Path) -> &str {
	path.to_str().unwrap()
}

use std::path::{Component, Path, PathBuf};
use tileset_core::normalize_path;

/// Expresses `target` relative to the directory `base`, walking up with `..` where needed.
/// Falls back to the absolute target when the two share no root.
pub fn relative_path(target: &Path, base: &Path) -> PathBuf {
	let (Ok(target), Ok(base)) = (std::path::absolute(target), std::path::absolute(base)) else {
		return target.to_path_buf();
	};
	let target = normalize_path(&target);
	let base = normalize_path(&base);
	let target: Vec<Component<'_>> = target.components().collect();
	let base: Vec<Component<'_>> = base.components().collect();

	let common = target
		.iter()
		.zip(base.iter())
		.take_while(|(a, b)| a == b)
		.count();
	if common == 0 {
		return target.iter().collect();
	}

	let mut relative = PathBuf::new();
	for _ in common..base.len() {
		relative.push("..");
	}
	for part in &target[common..] {
		relative.push(part);
	}
	relative
}

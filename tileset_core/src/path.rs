use std::path::{Component, Path, PathBuf};

/// Drops `.` and resolves `..` against a preceding directory name, without touching the file system.
///
/// Leading `..` of relative paths are kept, `..` directly below the root is dropped.
pub fn normalize_path(path: &Path) -> PathBuf {
	let mut components: Vec<Component<'_>> = Vec::new();
	for component in path.components() {
		match component {
			Component::CurDir => {}
			Component::ParentDir => match components.last() {
				Some(Component::Normal(_)) => {
					components.pop();
				}
				Some(Component::RootDir | Component::Prefix(_)) => {}
				_ => components.push(component),
			},
			other => components.push(other),
		}
	}

	if components.is_empty() {
		PathBuf::from(".")
	} else {
		components.iter().collect()
	}
}

//! Subject discovery under the source tree.
//!
//! Every listing is sorted and treats a missing directory as empty.

use std::{fs, io, path::Path};

/// Suffix of overworld mask sheets
pub const MASK_SUFFIX: &str = "_mask";

fn read_dir_optional(dir: &Path) -> io::Result<Option<fs::ReadDir>> {
	match fs::read_dir(dir) {
		Ok(entries) => Ok(Some(entries)),
		Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
		Err(e) => Err(e),
	}
}

/// Lists file stems in `dir` with the given extension.
pub fn file_stems(dir: &Path, extension: &str) -> io::Result<Vec<String>> {
	let Some(entries) = read_dir_optional(dir)? else {
		return Ok(Vec::new());
	};

	let mut stems = Vec::new();
	for entry in entries {
		let path = entry?.path();
		if !path.is_file() || path.extension().is_none_or(|ext| ext != extension) {
			continue;
		}
		if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
			stems.push(stem.to_owned());
		}
	}
	stems.sort();
	Ok(stems)
}

/// Lists subfolders, skipping hidden entries and `.asm` names.
pub fn folders(dir: &Path) -> io::Result<Vec<String>> {
	let Some(entries) = read_dir_optional(dir)? else {
		return Ok(Vec::new());
	};

	let mut folders = Vec::new();
	for entry in entries {
		let path = entry?.path();
		if !path.is_dir() {
			continue;
		}
		if let Some(name) = path.file_name().and_then(|s| s.to_str())
			&& !name.starts_with('.')
			&& !name.ends_with(".asm")
		{
			folders.push(name.to_owned());
		}
	}
	folders.sort();
	Ok(folders)
}

/// Lists PNG sprites, excluding mask sheets.
pub fn sprite_names(dir: &Path) -> io::Result<Vec<String>> {
	let mut names = file_stems(dir, "png")?;
	names.retain(|name| !name.ends_with(MASK_SUFFIX));
	Ok(names)
}

/// Lists the palette stems of a trainer: `<name>` and `<name>_<variant>`.
pub fn trainer_palettes(dir: &Path, trainer: &str) -> io::Result<Vec<String>> {
	let prefix = format!("{trainer}_");
	let mut palettes = file_stems(dir, "pal")?;
	palettes.retain(|stem| stem == trainer || stem.starts_with(&prefix));
	Ok(palettes)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn touch(dir: &Path, name: &str) {
		fs::write(dir.join(name), b"").unwrap();
	}

	#[test]
	fn test_missing_dir_is_empty() {
		let dir = tempfile::tempdir().unwrap();
		let missing = dir.path().join("gfx");
		assert!(file_stems(&missing, "png").unwrap().is_empty());
		assert!(folders(&missing).unwrap().is_empty());
	}

	#[test]
	fn test_folders() {
		let dir = tempfile::tempdir().unwrap();
		for name in ["zubat", "abra", ".git", "anims.asm"] {
			fs::create_dir(dir.path().join(name)).unwrap();
		}
		touch(dir.path(), "readme.txt");
		assert_eq!(folders(dir.path()).unwrap(), vec!["abra", "zubat"]);
	}

	#[test]
	fn test_sprite_names_skip_masks() {
		let dir = tempfile::tempdir().unwrap();
		for name in ["pikachu.png", "pikachu_mask.png", "egg.png", "egg.pal"] {
			touch(dir.path(), name);
		}
		assert_eq!(sprite_names(dir.path()).unwrap(), vec!["egg", "pikachu"]);
	}

	#[test]
	fn test_trainer_palettes() {
		let dir = tempfile::tempdir().unwrap();
		for name in ["kimono_girl_2.pal", "kimono_girl.pal", "kimono_girl_1.pal", "kimono.pal", "red.pal"] {
			touch(dir.path(), name);
		}
		assert_eq!(
			trainer_palettes(dir.path(), "kimono_girl").unwrap(),
			vec!["kimono_girl", "kimono_girl_1", "kimono_girl_2"]
		);
		assert!(trainer_palettes(dir.path(), "blue").unwrap().is_empty());
	}
}

//! Source and output directory layouts.

use std::{
	fmt,
	path::{Path, PathBuf},
};

/// Kind of sprite processed by the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubjectKind {
	/// Battle sprites, one folder per species form
	Pokemon,
	/// Trainer portraits
	Trainer,
	/// Bag item icons
	Item,
	/// Overworld sprites with masks
	Mini,
	/// Party icons
	Icon,
}

impl SubjectKind {
	/// Every kind, in processing order
	pub const ALL: [Self; 5] = [Self::Pokemon, Self::Trainer, Self::Item, Self::Mini, Self::Icon];

	/// Directory name under both `gfx/` and `sprites/`.
	pub const fn dir_name(self) -> &'static str {
		match self {
			Self::Pokemon => "pokemon",
			Self::Trainer => "trainers",
			Self::Item => "items",
			Self::Mini => "minis",
			Self::Icon => "icons",
		}
	}
}

impl fmt::Display for SubjectKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Pokemon => write!(f, "pokemon"),
			Self::Trainer => write!(f, "trainer"),
			Self::Item => write!(f, "item"),
			Self::Mini => write!(f, "mini sprite"),
			Self::Icon => write!(f, "icon"),
		}
	}
}

/// Disassembly tree holding the source assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomLayout {
	root: PathBuf,
}

impl RomLayout {
	/// Creates a layout rooted at `root`.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
		}
	}

	/// Root directory.
	pub fn root(&self) -> &Path {
		&self.root
	}

	/// `gfx/<kind>/`
	pub fn gfx(&self, kind: SubjectKind) -> PathBuf {
		self.root.join("gfx").join(kind.dir_name())
	}

	/// `data/pokemon/overworld_icon_pals.asm`
	pub fn icon_palette_map(&self) -> PathBuf {
		self.root.join("data").join("pokemon").join("overworld_icon_pals.asm")
	}
}

/// Published tree receiving the sprites and the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
	root: PathBuf,
}

impl OutputLayout {
	/// Manifest file name
	pub const MANIFEST: &'static str = "sprite_manifest.json";

	/// Creates a layout rooted at `root`.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
		}
	}

	/// Root directory.
	pub fn root(&self) -> &Path {
		&self.root
	}

	/// `sprites/<kind>/`
	pub fn sprites(&self, kind: SubjectKind) -> PathBuf {
		self.root.join("sprites").join(kind.dir_name())
	}

	/// `sprite_manifest.json`
	pub fn manifest(&self) -> PathBuf {
		self.root.join(Self::MANIFEST)
	}

	/// URL of a published file relative to the root, always `/`-separated.
	pub fn url(kind: SubjectKind, parts: &[&str]) -> String {
		let mut url = format!("sprites/{}", kind.dir_name());
		for part in parts {
			url.push('/');
			url.push_str(part);
		}
		url
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_paths() {
		let rom = RomLayout::new("rom");
		assert_eq!(rom.gfx(SubjectKind::Mini), Path::new("rom/gfx/minis"));
		assert_eq!(rom.icon_palette_map(), Path::new("rom/data/pokemon/overworld_icon_pals.asm"));

		let out = OutputLayout::new("public");
		assert_eq!(out.sprites(SubjectKind::Trainer), Path::new("public/sprites/trainers"));
		assert_eq!(out.manifest(), Path::new("public/sprite_manifest.json"));
	}

	#[test]
	fn test_url() {
		assert_eq!(
			OutputLayout::url(SubjectKind::Pokemon, &["abra", "normal_front.png"]),
			"sprites/pokemon/abra/normal_front.png"
		);
		assert_eq!(OutputLayout::url(SubjectKind::Item, &["pokeball.png"]), "sprites/items/pokeball.png");
	}
}

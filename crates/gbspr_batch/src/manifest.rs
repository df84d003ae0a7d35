//! `sprite_manifest.json` builder.
//!
//! The manifest is rebuilt from whatever the output tree contains, so a run
//! that only processes one category still lists sprites from earlier runs.

use std::{
	collections::{BTreeMap, BTreeSet},
	fs::File,
	io::{BufWriter, Write},
	path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{BatchError, OutputLayout, SubjectKind, discovery};

/// Suffix of animated sprite file stems
const ANIMATED_SUFFIX: &str = "_animated";

/// Location and size of a published sprite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteInfo {
	/// Path relative to the output root
	pub url: String,
	/// Width in pixels
	pub width: u32,
	/// Height in pixels
	pub height: u32,
}

impl SpriteInfo {
	/// Reads the dimensions of `path`, falling back to a square of `fallback` pixels.
	pub fn probe(path: &Path, url: String, fallback: u32) -> Self {
		let (width, height) = image::image_dimensions(path).unwrap_or_else(|e| {
			log::warn!("Could not read dimensions for {}: {e}", path.display());
			(fallback, fallback)
		});
		Self {
			url,
			width,
			height,
		}
	}
}

/// Battle sprites of one pokemon folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonEntry {
	/// `normal_front_animated.gif`
	pub normal_animated: Option<SpriteInfo>,
	/// `normal_front.png`
	pub normal_front: Option<SpriteInfo>,
	/// `shiny_front_animated.gif`
	pub shiny_animated: Option<SpriteInfo>,
	/// `shiny_front.png`
	pub shiny_front: Option<SpriteInfo>,
}

/// Item icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEntry {
	/// Static PNG
	pub icon: SpriteInfo,
}

/// Overworld sprite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiniEntry {
	/// Static PNG
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub overworld: Option<SpriteInfo>,
	/// Animated GIF
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub overworld_animated: Option<SpriteInfo>,
}

/// Party icon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconEntry {
	/// Animated GIF
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub animated: Option<SpriteInfo>,
	/// Static PNG
	#[serde(default, rename = "static", skip_serializing_if = "Option::is_none")]
	pub still: Option<SpriteInfo>,
}

/// Every published sprite, keyed by output name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteManifest {
	/// Party icons
	pub icons: BTreeMap<String, IconEntry>,
	/// Item icons
	pub items: BTreeMap<String, ItemEntry>,
	/// Overworld sprites
	pub minis: BTreeMap<String, MiniEntry>,
	/// Battle sprites
	pub pokemon: BTreeMap<String, PokemonEntry>,
	/// Trainer sprites, keyed by trainer then file stem
	pub trainers: BTreeMap<String, BTreeMap<String, SpriteInfo>>,
}

impl SpriteManifest {
	/// Fallback size of battle and trainer sprites
	pub const LARGE_FALLBACK: u32 = 64;
	/// Fallback size of item sprites
	pub const ITEM_FALLBACK: u32 = 32;
	/// Fallback size of overworld sprites and icons
	pub const SMALL_FALLBACK: u32 = 16;

	/// Scans the output tree.
	///
	/// # Errors
	///
	/// Returns an error if a sprite directory exists but cannot be listed.
	pub fn scan(output: &OutputLayout) -> Result<Self, BatchError> {
		Ok(Self {
			icons: scan_animated(output, SubjectKind::Icon, |still, animated| IconEntry {
				animated,
				still,
			})?,
			items: scan_items(output)?,
			minis: scan_animated(output, SubjectKind::Mini, |overworld, overworld_animated| MiniEntry {
				overworld,
				overworld_animated,
			})?,
			pokemon: scan_pokemon(output)?,
			trainers: scan_trainers(output)?,
		})
	}

	/// Writes the manifest as pretty-printed JSON.
	pub fn save(&self, path: impl AsRef<Path>) -> Result<(), BatchError> {
		let path = path.as_ref();
		if let Some(parent) = path.parent()
			&& !parent.as_os_str().is_empty()
		{
			std::fs::create_dir_all(parent)?;
		}
		let mut writer = BufWriter::new(File::create(path)?);
		serde_json::to_writer_pretty(&mut writer, self)?;
		writer.flush()?;
		Ok(())
	}

	/// Scans the output tree and writes the manifest to its default location.
	pub fn rebuild(output: &OutputLayout) -> Result<Self, BatchError> {
		let manifest = Self::scan(output)?;
		manifest.save(output.manifest())?;
		log::info!("Created sprite manifest: {}", output.manifest().display());
		log::info!(
			"Pokemon: {}, trainers: {}, items: {}, minis: {}, icons: {}",
			manifest.pokemon.len(),
			manifest.trainers.len(),
			manifest.items.len(),
			manifest.minis.len(),
			manifest.icons.len()
		);
		Ok(manifest)
	}
}

fn scan_pokemon(output: &OutputLayout) -> Result<BTreeMap<String, PokemonEntry>, BatchError> {
	let root = output.sprites(SubjectKind::Pokemon);
	let mut pokemon = BTreeMap::new();

	for folder in discovery::folders(&root)? {
		let dir = root.join(&folder);
		let mut entry = PokemonEntry::default();
		for (file, slot) in [
			("normal_front.png", &mut entry.normal_front),
			("shiny_front.png", &mut entry.shiny_front),
			("normal_front_animated.gif", &mut entry.normal_animated),
			("shiny_front_animated.gif", &mut entry.shiny_animated),
		] {
			let path = dir.join(file);
			if path.is_file() {
				let url = OutputLayout::url(SubjectKind::Pokemon, &[&folder, file]);
				*slot = Some(SpriteInfo::probe(&path, url, SpriteManifest::LARGE_FALLBACK));
			}
		}

		if entry.normal_front.is_some() {
			pokemon.insert(folder, entry);
		}
	}
	Ok(pokemon)
}

fn scan_trainers(output: &OutputLayout) -> Result<BTreeMap<String, BTreeMap<String, SpriteInfo>>, BatchError> {
	let root = output.sprites(SubjectKind::Trainer);
	let mut trainers = BTreeMap::new();

	for folder in discovery::folders(&root)? {
		let dir = root.join(&folder);
		let sprites: BTreeMap<String, SpriteInfo> = discovery::file_stems(&dir, "png")?
			.into_iter()
			.map(|stem| {
				let file = format!("{stem}.png");
				let url = OutputLayout::url(SubjectKind::Trainer, &[&folder, &file]);
				let info = SpriteInfo::probe(&dir.join(&file), url, SpriteManifest::LARGE_FALLBACK);
				(stem, info)
			})
			.collect();

		if !sprites.is_empty() {
			trainers.insert(folder, sprites);
		}
	}
	Ok(trainers)
}

fn scan_items(output: &OutputLayout) -> Result<BTreeMap<String, ItemEntry>, BatchError> {
	let root = output.sprites(SubjectKind::Item);
	Ok(discovery::file_stems(&root, "png")?
		.into_iter()
		.map(|stem| {
			let file = format!("{stem}.png");
			let url = OutputLayout::url(SubjectKind::Item, &[&file]);
			let icon = SpriteInfo::probe(&root.join(&file), url, SpriteManifest::ITEM_FALLBACK);
			(
				stem,
				ItemEntry {
					icon,
				},
			)
		})
		.collect())
}

/// Collects `<name>.png` / `<name>_animated.gif` pairs of a flat sprite directory.
fn scan_animated<T>(
	output: &OutputLayout,
	kind: SubjectKind,
	make: impl Fn(Option<SpriteInfo>, Option<SpriteInfo>) -> T,
) -> Result<BTreeMap<String, T>, BatchError> {
	let root = output.sprites(kind);
	let mut names: Vec<String> = discovery::file_stems(&root, "png")?;
	names.extend(discovery::file_stems(&root, "gif")?);
	let names: BTreeSet<String> =
		names.into_iter().map(|stem| stem.replace(ANIMATED_SUFFIX, "")).collect();

	let probe = |file: String| {
		let path = root.join(&file);
		path.is_file().then(|| {
			let url = OutputLayout::url(kind, &[&file]);
			SpriteInfo::probe(&path, url, SpriteManifest::SMALL_FALLBACK)
		})
	};

	Ok(names
		.into_iter()
		.filter_map(|name| {
			let still = probe(format!("{name}.png"));
			let animated = probe(format!("{name}{ANIMATED_SUFFIX}.gif"));
			(still.is_some() || animated.is_some()).then(|| (name, make(still, animated)))
		})
		.collect())
}

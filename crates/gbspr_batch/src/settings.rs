//! Batch configuration.
//!
//! Settings come from an optional TOML file, overridden by `GBSPR_*`
//! environment variables, overridden in turn by the command line.
//!
//! ```toml
//! rom_path = "polishedcrystal"
//! output_path = "public"
//! item_palette = "category"
//! parallel = true
//!
//! [output_redirects]
//! pikachu_surf = "pikachu"
//!
//! [palette_redirects]
//! pikachu_surf = "pikachu"
//! ```

use std::{collections::BTreeMap, path::Path, path::PathBuf};

use config::{Config, Environment, File, FileFormat};
use gbspr_types::names::{FORM_SUFFIXES, NameRules, OUTPUT_REDIRECTS};
use serde::{Deserialize, Serialize};

use crate::{BatchError, OutputLayout, RomLayout};

/// Prefix of environment variable overrides (`GBSPR_ROM_PATH`, ...)
pub const ENV_PREFIX: &str = "GBSPR";

/// Palette applied to item sprites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemPaletteMode {
	/// One gray palette for every item
	#[default]
	Monochrome,
	/// Palette chosen from the item's category
	Category,
}

/// Batch settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
	/// Root of the disassembly (`gfx/`, `data/`)
	pub rom_path: PathBuf,
	/// Root of the published tree (`sprites/`, manifest)
	pub output_path: PathBuf,
	/// Item palette selection
	pub item_palette: ItemPaletteMode,
	/// Process subjects on the rayon thread pool
	pub parallel: bool,
	/// Form suffixes kept in pokemon folder names
	pub form_suffixes: Vec<String>,
	/// Pokemon source folders published under another name, added to the built-in table
	pub output_redirects: BTreeMap<String, String>,
	/// Pokemon folders whose palettes live in another folder
	pub palette_redirects: BTreeMap<String, String>,
}

impl Default for BatchConfig {
	fn default() -> Self {
		Self {
			rom_path: PathBuf::from("polishedcrystal"),
			output_path: PathBuf::from("public"),
			item_palette: ItemPaletteMode::default(),
			parallel: true,
			form_suffixes: FORM_SUFFIXES.iter().map(|s| (*s).to_owned()).collect(),
			output_redirects: BTreeMap::new(),
			palette_redirects: BTreeMap::new(),
		}
	}
}

impl BatchConfig {
	/// Loads settings from an optional TOML file and the environment.
	///
	/// # Errors
	///
	/// Returns an error if the file is missing or malformed, or a value has
	/// the wrong type.
	pub fn load(file: Option<&Path>) -> Result<Self, BatchError> {
		let mut builder = Config::builder();
		if let Some(path) = file {
			builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
		}
		builder = builder.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.try_parsing(true)
				.list_separator(",")
				.with_list_parse_key("form_suffixes"),
		);

		let config: Self = builder.build()?.try_deserialize()?;
		log::debug!("Loaded configuration: {config:?}");
		Ok(config)
	}

	/// Compiles the naming tables.
	pub fn name_rules(&self) -> NameRules {
		let builtin = OUTPUT_REDIRECTS.iter().map(|&(from, to)| (from.to_owned(), to.to_owned()));
		NameRules::new(&self.form_suffixes, builtin, [])
			.with_output_redirects(self.output_redirects.clone())
			.with_palette_redirects(self.palette_redirects.clone())
	}

	/// Source tree layout.
	pub fn rom(&self) -> RomLayout {
		RomLayout::new(&self.rom_path)
	}

	/// Output tree layout.
	pub fn output(&self) -> OutputLayout {
		OutputLayout::new(&self.output_path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn test_default() {
		let config = BatchConfig::default();
		assert_eq!(config.rom_path, PathBuf::from("polishedcrystal"));
		assert_eq!(config.item_palette, ItemPaletteMode::Monochrome);
		assert!(config.parallel);
		assert_eq!(config.name_rules().output_name("pikachu_pika"), "pikachu_red");
	}

	#[test]
	fn test_load_file() {
		let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
		writeln!(file, "rom_path = \"rom\"").unwrap();
		writeln!(file, "item_palette = \"category\"").unwrap();
		writeln!(file, "parallel = false").unwrap();
		writeln!(file, "[palette_redirects]").unwrap();
		writeln!(file, "pikachu_surf = \"pikachu\"").unwrap();

		let config = BatchConfig::load(Some(file.path())).unwrap();
		assert_eq!(config.rom_path, PathBuf::from("rom"));
		assert_eq!(config.output_path, PathBuf::from("public"));
		assert_eq!(config.item_palette, ItemPaletteMode::Category);
		assert!(!config.parallel);
		assert_eq!(config.name_rules().palette_dir("pikachu_surf"), "pikachu");
	}

	#[test]
	fn test_load_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		assert!(BatchConfig::load(Some(&dir.path().join("gbspr.toml"))).is_err());
	}

	#[test]
	fn test_config_redirects_extend_builtin() {
		let config = BatchConfig {
			output_redirects: BTreeMap::from([("arbok_kanto".to_owned(), "arbok".to_owned())]),
			..BatchConfig::default()
		};
		let rules = config.name_rules();
		assert_eq!(rules.output_name("arbok_kanto"), "arbok");
		assert_eq!(rules.output_name("unown"), "unown_z");
	}
}

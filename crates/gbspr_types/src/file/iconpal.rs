//! `overworld_icon_pals.asm` support.
//!
//! Each relevant line assigns two named icon colors to a species, with the
//! species name in a trailing comment:
//!
//! ```text
//! 	iconpal RED, AZURE ; PIKACHU
//! ```

use std::{collections::HashMap, path::Path, sync::LazyLock};

use regex::Regex;

use crate::{
	catalog::{IconColor, IconColors},
	file::{FileType, SprFileError, error::read_optional},
};

static ICONPAL_LINE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^iconpal\s+(\w+),\s*(\w+)\s*;\s*(\w+)").expect("valid iconpal pattern")
});

/// Suffixes stripped from an icon name when the exact name is not in the table
pub const ICON_FORM_SUFFIXES: &[&str] = &[
	"_alolan",
	"_galarian",
	"_hisuian",
	"_paldean",
	"_paldean_fire",
	"_paldean_water",
	"_armored",
	"_bloodmoon",
	"_two_segment",
	"_three_segment",
	"_spiky",
];

/// Species name (lowercase) to icon colors table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconPaletteMap {
	entries: HashMap<String, IconColors>,
}

impl IconPaletteMap {
	/// Colors used when no rule matches
	pub const DEFAULT_COLORS: IconColors = IconColors::new(IconColor::Gray, IconColor::Gray);

	/// Colors used for `unown*` icons when the table has no `unown` entry
	pub const UNOWN_COLORS: IconColors = IconColors::new(IconColor::Black, IconColor::Blue);

	/// Opens an icon palette table.
	///
	/// A missing file logs a warning and yields an empty table.
	///
	/// # Errors
	///
	/// Returns an error if the file exists but cannot be read.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, SprFileError> {
		let path = path.as_ref();
		match read_optional(FileType::IconPalettes, path)? {
			Some(text) => Ok(Self::parse(&text)),
			None => {
				log::warn!("Icon palette map not found at {}", path.display());
				Ok(Self::default())
			}
		}
	}

	/// Parses table text; later lines override earlier ones for the same name.
	pub fn parse(text: &str) -> Self {
		let entries = text
			.lines()
			.map(str::trim)
			.filter_map(|line| {
				let caps = ICONPAL_LINE.captures(line)?;
				let primary = IconColor::from_name(caps.get(1)?.as_str());
				let secondary = IconColor::from_name(caps.get(2)?.as_str());
				let name = caps.get(3)?.as_str().to_lowercase();
				Some((name, IconColors::new(primary, secondary)))
			})
			.collect();
		Self {
			entries,
		}
	}

	/// Number of species in the table.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if the table is empty.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Exact lookup by lowercase name.
	pub fn get(&self, name: &str) -> Option<IconColors> {
		self.entries.get(name).copied()
	}

	/// Resolves the colors of an icon.
	///
	/// Tries the exact name, then the name with the first matching
	/// [`ICON_FORM_SUFFIXES`] entry removed, then the `unown` rules, and
	/// finally [`Self::DEFAULT_COLORS`].
	pub fn colors_for(&self, icon_name: &str) -> IconColors {
		let normalized = icon_name.to_lowercase();
		if let Some(colors) = self.get(&normalized) {
			return colors;
		}

		for suffix in ICON_FORM_SUFFIXES {
			if normalized.ends_with(suffix) {
				let base = normalized.replace(suffix, "");
				if let Some(colors) = self.get(&base) {
					return colors;
				}
			}
		}

		if normalized.starts_with("unown") {
			return self.get("unown").unwrap_or(Self::UNOWN_COLORS);
		}

		Self::DEFAULT_COLORS
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const TABLE: &str = "\
; overworld icon palettes
	iconpal RED, AZURE ; PIKACHU
	iconpal GREEN, TEAL ; BULBASAUR
	iconpal PURPLE, PINK ; VULPIX
	iconpal CRIMSON, BLUE ; MYSTERY
";

	#[test]
	fn test_parse_table() {
		let map = IconPaletteMap::parse(TABLE);
		assert_eq!(map.len(), 4);
		assert_eq!(map.get("pikachu"), Some(IconColors::new(IconColor::Red, IconColor::Azure)));
	}

	#[test]
	fn test_unknown_color_name_is_gray() {
		let map = IconPaletteMap::parse(TABLE);
		assert_eq!(map.get("mystery").map(|c| c.primary), Some(IconColor::Gray));

		// color names are matched exactly
		let map = IconPaletteMap::parse("iconpal red, Azure ; PIKACHU\n");
		assert_eq!(map.get("pikachu"), Some(IconColors::new(IconColor::Gray, IconColor::Gray)));
	}

	#[test]
	fn test_colors_for_strips_form_suffix() {
		let map = IconPaletteMap::parse(TABLE);
		assert_eq!(map.colors_for("vulpix_alolan").primary, IconColor::Purple);
		assert_eq!(map.colors_for("Bulbasaur").primary, IconColor::Green);
	}

	#[test]
	fn test_colors_for_unown() {
		let map = IconPaletteMap::parse(TABLE);
		assert_eq!(map.colors_for("unown_a"), IconPaletteMap::UNOWN_COLORS);

		let map = IconPaletteMap::parse("iconpal YELLOW, BROWN ; UNOWN\n");
		assert_eq!(map.colors_for("unown_q").primary, IconColor::Yellow);
	}

	#[test]
	fn test_colors_for_default() {
		let map = IconPaletteMap::default();
		assert_eq!(map.colors_for("missingno"), IconPaletteMap::DEFAULT_COLORS);
	}

	#[test]
	fn test_open_missing_file_is_empty() {
		let dir = tempfile::tempdir().unwrap();
		let map = IconPaletteMap::open(dir.path().join("overworld_icon_pals.asm")).unwrap();
		assert!(map.is_empty());
	}
}

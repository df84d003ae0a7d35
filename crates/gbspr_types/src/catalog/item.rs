//! Item categories and their color schemes.

use std::fmt;

use crate::file::{Color, Palette};

/// Gray palette applied to every item unless category coloring is requested
pub const MONOCHROME: Palette = Palette::new([
	Color::gray(240),
	Color::gray(160),
	Color::gray(100),
	Color::gray(60),
]);

/// Item category, derived from the item's file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
	/// Capture balls
	PokeBall,
	/// Potions and status cures
	Medicine,
	/// Berries
	Berry,
	/// Evolution stones
	Stone,
	/// Technical and hidden machines
	Tm,
	/// Battle-only stat items
	Battle,
	/// Key items
	Key,
	/// Held battle equipment
	Held,
	/// Items sold for money
	Valuable,
	/// Anything else
	General,
}

/// Keyword rules checked in order after the dedicated `ball`/`berry`/`stone`/`tm` rules.
const MEDICINE_WORDS: &[&str] = &[
	"potion",
	"heal",
	"antidote",
	"awakening",
	"burn_heal",
	"paralyze_heal",
	"ice_heal",
	"full_heal",
	"revive",
	"ether",
	"elixir",
];
const BATTLE_WORDS: &[&str] = &["x_", "guard_spec", "dire_hit"];
const KEY_WORDS: &[&str] =
	&["key", "card", "pass", "ticket", "map", "bell", "wing", "egg", "scope", "rod", "coin_case"];
const HELD_WORDS: &[&str] =
	&["band", "belt", "lens", "claw", "orb", "herb", "powder", "coat", "vest", "specs", "scarf"];
const VALUABLE_WORDS: &[&str] = &["nugget", "pearl", "mushroom", "star", "fossil", "scale"];

impl ItemCategory {
	/// Classifies an item by name.
	///
	/// Rules are checked in a fixed priority order, so `"ball"` wins over
	/// every later keyword and `"berry"` over `"stone"`.
	///
	/// # Examples
	///
	/// ```
	/// use gbspr_types::catalog::ItemCategory;
	///
	/// assert_eq!(ItemCategory::classify("ultra_ball"), ItemCategory::PokeBall);
	/// assert_eq!(ItemCategory::classify("tm_case"), ItemCategory::Tm);
	/// assert_eq!(ItemCategory::classify("bicycle"), ItemCategory::General);
	/// ```
	pub fn classify(item_name: &str) -> Self {
		let name = item_name.to_lowercase();
		let any = |words: &[&str]| words.iter().any(|w| name.contains(w));

		if name.contains("ball") {
			Self::PokeBall
		} else if any(MEDICINE_WORDS) {
			Self::Medicine
		} else if name.contains("berry") {
			Self::Berry
		} else if name.contains("stone") {
			Self::Stone
		} else if name.starts_with("tm") || name.starts_with("hm") {
			Self::Tm
		} else if any(BATTLE_WORDS) {
			Self::Battle
		} else if any(KEY_WORDS) {
			Self::Key
		} else if any(HELD_WORDS) {
			Self::Held
		} else if any(VALUABLE_WORDS) {
			Self::Valuable
		} else {
			Self::General
		}
	}

	/// Color scheme of the category.
	pub const fn palette(self) -> Palette {
		let colors = match self {
			Self::PokeBall => [(255, 255, 255), (255, 60, 60), (200, 30, 30), (120, 20, 20)],
			Self::Medicine => [(240, 255, 240), (100, 200, 100), (60, 150, 60), (30, 100, 30)],
			Self::Berry => [(255, 240, 255), (200, 100, 200), (150, 60, 150), (100, 30, 100)],
			Self::Stone => [(255, 255, 240), (200, 200, 100), (150, 150, 60), (100, 100, 30)],
			Self::Tm => [(240, 240, 255), (100, 100, 200), (60, 60, 150), (30, 30, 100)],
			Self::Battle => [(255, 240, 240), (200, 150, 100), (150, 100, 60), (100, 60, 30)],
			Self::Key => [(240, 255, 255), (100, 200, 200), (60, 150, 150), (30, 100, 100)],
			Self::Held => [(255, 255, 240), (180, 180, 120), (120, 120, 80), (80, 80, 40)],
			Self::Valuable => [(255, 240, 255), (200, 150, 200), (150, 100, 150), (100, 50, 100)],
			Self::General => return MONOCHROME,
		};
		palette_from_rgb(colors)
	}

	/// Lowercase category name.
	pub const fn name(self) -> &'static str {
		match self {
			Self::PokeBall => "pokeball",
			Self::Medicine => "medicine",
			Self::Berry => "berry",
			Self::Stone => "stone",
			Self::Tm => "tm",
			Self::Battle => "battle",
			Self::Key => "key",
			Self::Held => "held",
			Self::Valuable => "valuable",
			Self::General => "general",
		}
	}
}

impl fmt::Display for ItemCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

pub(crate) const fn palette_from_rgb(colors: [(u8, u8, u8); Palette::SIZE]) -> Palette {
	let mut out = [Color::BLACK; Palette::SIZE];
	let mut i = 0;
	while i < Palette::SIZE {
		let (r, g, b) = colors[i];
		out[i] = Color::new(r, g, b);
		i += 1;
	}
	Palette::new(out)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_classify_priority() {
		// "ball" beats the key-item "egg" keyword
		assert_eq!(ItemCategory::classify("egg_ball"), ItemCategory::PokeBall);
		assert_eq!(ItemCategory::classify("super_potion"), ItemCategory::Medicine);
		assert_eq!(ItemCategory::classify("oran_berry"), ItemCategory::Berry);
		assert_eq!(ItemCategory::classify("fire_stone"), ItemCategory::Stone);
		assert_eq!(ItemCategory::classify("HM_case"), ItemCategory::Tm);
		assert_eq!(ItemCategory::classify("x_attack"), ItemCategory::Battle);
		assert_eq!(ItemCategory::classify("silver_wing"), ItemCategory::Key);
		assert_eq!(ItemCategory::classify("choice_band"), ItemCategory::Held);
		assert_eq!(ItemCategory::classify("big_nugget"), ItemCategory::Valuable);
		assert_eq!(ItemCategory::classify("bicycle"), ItemCategory::General);
	}

	#[test]
	fn test_medicine_before_berry() {
		// "heal" matches before "berry" is considered
		assert_eq!(ItemCategory::classify("heal_berry"), ItemCategory::Medicine);
	}

	#[test]
	fn test_general_is_monochrome() {
		assert_eq!(ItemCategory::General.palette(), MONOCHROME);
		assert_eq!(ItemCategory::PokeBall.palette()[1], Color::new(255, 60, 60));
	}
}

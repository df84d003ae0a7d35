//! Fallback palettes for overworld sprites without a palette file.

use super::item::palette_from_rgb;
use crate::file::Palette;

/// Cream palette for the egg sprite
pub const EGG: Palette =
	palette_from_rgb([(255, 255, 240), (240, 200, 160), (200, 150, 100), (150, 100, 60)]);

/// Neutral palette when no type keyword matches
pub const NEUTRAL: Palette =
	palette_from_rgb([(240, 240, 240), (180, 180, 180), (120, 120, 120), (80, 80, 80)]);

/// Species keywords and the palette they select, checked in order.
const TYPE_RULES: &[(&[&str], Palette)] = &[
	(
		&["pikachu", "raichu", "electabuzz", "elekid", "magnezone", "electrode", "zapdos"],
		palette_from_rgb([(255, 255, 200), (255, 220, 0), (200, 150, 0), (100, 80, 0)]),
	),
	(
		&["charizard", "charmander", "charmeleon", "arcanine", "growlithe", "moltres"],
		palette_from_rgb([(255, 240, 200), (255, 100, 50), (200, 60, 30), (120, 40, 20)]),
	),
	(
		&["blastoise", "squirtle", "wartortle", "gyarados", "lapras", "articuno"],
		palette_from_rgb([(240, 240, 255), (100, 150, 255), (60, 100, 200), (30, 60, 150)]),
	),
	(
		&["venusaur", "bulbasaur", "ivysaur", "oddish", "bellsprout"],
		palette_from_rgb([(240, 255, 240), (100, 200, 100), (60, 150, 60), (30, 100, 30)]),
	),
	(
		&["gengar", "gastly", "haunter", "misdreavus", "murkrow"],
		palette_from_rgb([(200, 180, 220), (120, 80, 160), (80, 50, 120), (50, 30, 80)]),
	),
	(
		&["machamp", "machoke", "machop", "hitmon"],
		palette_from_rgb([(255, 220, 180), (200, 140, 100), (150, 100, 70), (100, 70, 50)]),
	),
	(
		&["alakazam", "abra", "kadabra", "mewtwo", "mew"],
		palette_from_rgb([(255, 240, 255), (200, 150, 200), (150, 100, 150), (100, 60, 100)]),
	),
];

/// Picks a palette from keywords found in a sprite name.
///
/// # Examples
///
/// ```
/// use gbspr_types::catalog::species::{NEUTRAL, type_palette};
///
/// assert_ne!(type_palette("pikachu_surf"), NEUTRAL);
/// assert_eq!(type_palette("snorlax"), NEUTRAL);
/// ```
pub fn type_palette(name: &str) -> Palette {
	let name = name.to_lowercase();
	TYPE_RULES
		.iter()
		.find(|(words, _)| words.iter().any(|w| name.contains(w)))
		.map_or(NEUTRAL, |&(_, palette)| palette)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::file::Color;

	#[test]
	fn test_type_palette_keywords() {
		assert_eq!(type_palette("zapdos")[1], Color::new(255, 220, 0));
		assert_eq!(type_palette("Growlithe")[1], Color::new(255, 100, 50));
		assert_eq!(type_palette("hitmonlee")[1], Color::new(200, 140, 100));
	}

	#[test]
	fn test_type_palette_rule_order() {
		// "mew" would also match mewtwo, both map to the psychic palette
		assert_eq!(type_palette("mewtwo"), type_palette("mew"));
		// electric keywords come before psychic ones
		assert_eq!(type_palette("pikachu_abra"), type_palette("raichu"));
	}

	#[test]
	fn test_type_palette_default() {
		assert_eq!(type_palette("ditto"), NEUTRAL);
	}
}

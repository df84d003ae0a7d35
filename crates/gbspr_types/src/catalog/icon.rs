//! Named icon palettes.
//!
//! Every icon palette shares the same light, skin and outline shades and
//! differs only in its third (main) color.

use std::fmt;

use crate::file::Palette;

/// Light shade shared by every icon palette (5-bit channels)
const ICON_LIGHT: (u32, u32, u32) = (27, 31, 27);

/// Skin/base shade shared by every icon palette (5-bit channels)
const ICON_SKIN: (u32, u32, u32) = (31, 19, 10);

/// Outline shade shared by every icon palette (5-bit channels)
const ICON_OUTLINE: (u32, u32, u32) = (0, 0, 0);

/// Named icon color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconColor {
	/// `RED`
	Red,
	/// `BLUE`
	Blue,
	/// `GREEN`
	Green,
	/// `BROWN`
	Brown,
	/// `PURPLE`
	Purple,
	/// `GRAY`
	Gray,
	/// `PINK`
	Pink,
	/// `TEAL`
	Teal,
	/// `AZURE`
	Azure,
	/// `ORANGE`
	Orange,
	/// `YELLOW`
	Yellow,
	/// `WHITE`
	White,
	/// `BLACK`
	Black,
}

impl IconColor {
	/// All icon colors in table order
	pub const ALL: [Self; 13] = [
		Self::Red,
		Self::Blue,
		Self::Green,
		Self::Brown,
		Self::Purple,
		Self::Gray,
		Self::Pink,
		Self::Teal,
		Self::Azure,
		Self::Orange,
		Self::Yellow,
		Self::White,
		Self::Black,
	];

	/// Looks up a color by its exact table name.
	///
	/// Unknown names, including other spellings such as `azure`, resolve to
	/// [`IconColor::Gray`].
	pub fn from_name(name: &str) -> Self {
		Self::ALL.into_iter().find(|c| c.name() == name).unwrap_or(Self::Gray)
	}

	/// Returns the table name of the color.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Red => "RED",
			Self::Blue => "BLUE",
			Self::Green => "GREEN",
			Self::Brown => "BROWN",
			Self::Purple => "PURPLE",
			Self::Gray => "GRAY",
			Self::Pink => "PINK",
			Self::Teal => "TEAL",
			Self::Azure => "AZURE",
			Self::Orange => "ORANGE",
			Self::Yellow => "YELLOW",
			Self::White => "WHITE",
			Self::Black => "BLACK",
		}
	}

	/// Main color in 5-bit channels.
	const fn main_gbc(self) -> (u32, u32, u32) {
		match self {
			Self::Red => (31, 7, 1),
			Self::Blue => (10, 9, 31),
			Self::Green => (7, 23, 3),
			Self::Brown => (15, 10, 3),
			Self::Purple => (18, 4, 18),
			Self::Gray => (13, 13, 13),
			Self::Pink => (31, 10, 11),
			Self::Teal => (3, 23, 21),
			Self::Azure => (10, 20, 31),
			Self::Orange => (31, 16, 1),
			Self::Yellow => (31, 28, 1),
			Self::White => (27, 27, 27),
			Self::Black => (5, 5, 5),
		}
	}

	/// Returns the 8-bit palette: light, skin, main color, outline.
	pub const fn palette(self) -> Palette {
		Palette::from_gbc([ICON_LIGHT, ICON_SKIN, self.main_gbc(), ICON_OUTLINE])
	}
}

impl fmt::Display for IconColor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Color pair assigned to a species icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconColors {
	/// Color that drives the icon palette
	pub primary: IconColor,
	/// Second color from the table, used by the game for its alternate icon state
	pub secondary: IconColor,
}

impl IconColors {
	/// Creates a new color pair.
	pub const fn new(primary: IconColor, secondary: IconColor) -> Self {
		Self {
			primary,
			secondary,
		}
	}

	/// Palette used to recolor the icon.
	pub const fn palette(self) -> Palette {
		self.primary.palette()
	}
}

impl fmt::Display for IconColors {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.primary, self.secondary)
	}
}

//! `.pal` palette file support.
//!
//! A palette file is line-oriented text. Only lines that start with the
//! `RGB` token are meaningful; each one carries three 5-bit channel values:
//!
//! ```text
//! ; front sprite palette
//! 	RGB 30, 26, 15
//! 	RGB 23, 12, 00
//! ```
//!
//! Colors are listed lightest first. The resulting [`Palette`] always holds
//! exactly four colors: short files are padded with black and extra entries
//! are dropped.

mod color;

use std::{fmt, io::Read, path::Path, sync::LazyLock};

use regex::Regex;

use crate::file::{FileType, SprFileError, error::read_optional};

pub use self::color::{Color, GBC_CHANNEL_MAX, scale_channel};

static RGB_LINE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"RGB\s+(\d+)\s*,\s*(\d+)\s*,\s*(\d+)").expect("valid RGB pattern"));

/// Four-color palette, index 0 is the lightest (background) shade and
/// index 3 the darkest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
	colors: [Color; Palette::SIZE],
}

impl Palette {
	/// Number of colors in a palette
	pub const SIZE: usize = 4;

	/// Palette returned when a palette file does not exist
	pub const GRAYSCALE: Self = Self::new([
		Color::gray(255),
		Color::gray(170),
		Color::gray(85),
		Color::gray(0),
	]);

	/// Creates a palette from exactly four colors.
	pub const fn new(colors: [Color; Self::SIZE]) -> Self {
		Self {
			colors,
		}
	}

	/// Creates a palette from 5-bit hardware channel triples.
	pub const fn from_gbc(channels: [(u32, u32, u32); Self::SIZE]) -> Self {
		let mut colors = [Color::BLACK; Self::SIZE];
		let mut i = 0;
		while i < Self::SIZE {
			let (r, g, b) = channels[i];
			colors[i] = Color::from_gbc(r, g, b);
			i += 1;
		}
		Self::new(colors)
	}

	/// Creates a palette from any number of colors.
	///
	/// Only the first four colors are kept; missing entries are filled with `pad`.
	pub fn padded(colors: impl IntoIterator<Item = Color>, pad: Color) -> Self {
		let mut out = [pad; Self::SIZE];
		for (slot, color) in out.iter_mut().zip(colors) {
			*slot = color;
		}
		Self::new(out)
	}

	/// Opens a `.pal` file.
	///
	/// A missing file is not an error: a warning is logged and
	/// [`Palette::GRAYSCALE`] is returned.
	///
	/// # Errors
	///
	/// Returns an error if the file exists but cannot be read.
	///
	/// # Examples
	///
	/// ```no_run
	/// use gbspr_types::file::Palette;
	///
	/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
	/// let palette = Palette::open("gfx/pokemon/abra/normal.pal")?;
	/// println!("{palette}");
	/// # Ok(())
	/// # }
	/// ```
	pub fn open(path: impl AsRef<Path>) -> Result<Self, SprFileError> {
		let path = path.as_ref();
		match read_optional(FileType::Palette, path)? {
			Some(text) => Ok(Self::parse(&text)),
			None => {
				log::warn!("Palette file {} not found, using grayscale", path.display());
				Ok(Self::GRAYSCALE)
			}
		}
	}

	/// Reads palette text from a reader.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, SprFileError> {
		let mut bytes = Vec::new();
		reader.read_to_end(&mut bytes)?;
		Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
	}

	/// Parses palette text.
	///
	/// Lines that do not start with `RGB` or do not carry three integers are skipped.
	///
	/// # Examples
	///
	/// ```
	/// use gbspr_types::file::{Color, Palette};
	///
	/// let palette = Palette::parse("RGB 31, 31, 31\nRGB 00, 00, 31\n");
	/// assert_eq!(palette[0], Color::new(255, 255, 255));
	/// assert_eq!(palette[1], Color::new(0, 0, 255));
	/// assert_eq!(palette[3], Color::BLACK);
	/// ```
	pub fn parse(text: &str) -> Self {
		let colors = text.lines().map(str::trim).filter(|line| line.starts_with("RGB")).filter_map(
			|line| {
				let caps = RGB_LINE.captures(line)?;
				let channel = |i: usize| caps.get(i)?.as_str().parse::<u32>().ok();
				Some(Color::from_gbc(channel(1)?, channel(2)?, channel(3)?))
			},
		);
		Self::padded(colors, Color::BLACK)
	}

	/// Gets a color by index, `None` when `index >= 4`.
	#[inline]
	pub fn get(&self, index: usize) -> Option<Color> {
		self.colors.get(index).copied()
	}

	/// Returns the color array.
	#[inline]
	pub fn colors(&self) -> &[Color; Self::SIZE] {
		&self.colors
	}

	/// Returns an iterator over palette colors.
	pub fn iter(&self) -> impl Iterator<Item = &Color> {
		self.colors.iter()
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self::GRAYSCALE
	}
}

impl fmt::Display for Palette {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Palette[")?;
		for (i, color) in self.colors.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{color}")?;
		}
		write!(f, "]")
	}
}

impl std::ops::Index<usize> for Palette {
	type Output = Color;

	fn index(&self, index: usize) -> &Self::Output {
		&self.colors[index]
	}
}

//! RGB color type and 5-bit channel scaling.

use std::fmt;

/// Largest value a 5-bit hardware color channel can hold.
pub const GBC_CHANNEL_MAX: u32 = 31;

/// Scales a 5-bit hardware channel value (0-31) to 8 bits.
///
/// Uses truncating integer division, `(value * 255) / 31`, so `0 -> 0`,
/// `15 -> 123`, `16 -> 131` and `31 -> 255`. Values above 31 are not rejected;
/// their scaled result is saturated at 255 to fit the 8-bit channel.
#[inline]
pub const fn scale_channel(value: u32) -> u8 {
	let scaled = value.saturating_mul(255) / GBC_CHANNEL_MAX;
	if scaled > 255 {
		255
	} else {
		scaled as u8
	}
}

/// RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
	/// Red component (0-255)
	pub r: u8,
	/// Green component (0-255)
	pub g: u8,
	/// Blue component (0-255)
	pub b: u8,
}

impl Color {
	/// Opaque white.
	pub const WHITE: Self = Self::gray(255);

	/// Black.
	pub const BLACK: Self = Self::gray(0);

	/// Creates a new RGB color.
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self {
			r,
			g,
			b,
		}
	}

	/// Creates a new grayscale color.
	pub const fn gray(value: u8) -> Self {
		Self::new(value, value, value)
	}

	/// Creates a color from 5-bit hardware channel values.
	///
	/// # Examples
	///
	/// ```
	/// use gbspr_types::file::Color;
	///
	/// assert_eq!(Color::from_gbc(31, 0, 16), Color::new(255, 0, 131));
	/// ```
	pub const fn from_gbc(r: u32, g: u32, b: u32) -> Self {
		Self::new(scale_channel(r), scale_channel(g), scale_channel(b))
	}

	/// Returns the color as an RGBA quadruple with the given alpha.
	#[inline]
	pub const fn to_rgba(self, alpha: u8) -> [u8; 4] {
		[self.r, self.g, self.b, alpha]
	}

	/// Returns the color as an RGB triple.
	#[inline]
	pub const fn to_rgb(self) -> [u8; 3] {
		[self.r, self.g, self.b]
	}
}

impl From<(u8, u8, u8)> for Color {
	fn from((r, g, b): (u8, u8, u8)) -> Self {
		Self::new(r, g, b)
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
	}
}

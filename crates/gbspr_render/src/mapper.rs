//! Luminance banding to a 4-color palette.
//!
//! Source sprites are grayscale. Every pixel's luminance selects a palette
//! entry (or full transparency) through a [`BandingPolicy`]:
//!
//! | Policy                | transparent | `palette[0]` | `palette[1]` | `palette[2]` | `palette[3]` |
//! |-----------------------|-------------|--------------|--------------|--------------|--------------|
//! | `TransparentBackground` | >= 240    | 170..=239    | 85..=169     | < 85         | unused       |
//! | `Opaque`              | never       | >= 192       | 128..=191    | 64..=127     | < 64         |
//! | `Icon`                | >= 250      | 192..=249    | 128..=191    | 64..=127     | < 64         |

use gbspr_types::file::Palette;
use image::{Rgba, RgbaImage, imageops};

/// Fully transparent output pixel
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Mask luminance at and above which a pixel is hidden
pub const MASK_THRESHOLD: u8 = 128;

/// Luminance of a pixel using the ITU-R 601-2 weights, alpha ignored.
///
/// Computed in 16.16 fixed point with rounding, so pure gray maps to itself.
///
/// # Examples
///
/// ```
/// use gbspr_render::mapper::luminance;
/// use image::Rgba;
///
/// assert_eq!(luminance(Rgba([255, 255, 255, 0])), 255);
/// assert_eq!(luminance(Rgba([85, 85, 85, 255])), 85);
/// assert_eq!(luminance(Rgba([255, 0, 0, 255])), 76);
/// ```
pub fn luminance(pixel: Rgba<u8>) -> u8 {
	let [r, g, b, _] = pixel.0;
	let l = u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471 + 0x8000;
	(l >> 16) as u8
}

/// Luminance to palette index rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BandingPolicy {
	/// Three bands plus a transparent background, for battle and trainer sprites
	#[default]
	TransparentBackground,
	/// Four opaque bands, for overworld sprites masked afterwards
	Opaque,
	/// Four bands plus a transparent background, for party icons
	Icon,
}

impl BandingPolicy {
	/// Palette index for a luminance, `None` meaning transparent.
	pub const fn index(self, luma: u8) -> Option<usize> {
		match self {
			Self::TransparentBackground => match luma {
				240.. => None,
				170.. => Some(0),
				85.. => Some(1),
				_ => Some(2),
			},
			Self::Opaque => Some(four_band(luma)),
			Self::Icon => {
				if luma >= 250 {
					None
				} else {
					Some(four_band(luma))
				}
			}
		}
	}

	/// Output pixel for a luminance.
	pub fn map(self, luma: u8, palette: &Palette) -> Rgba<u8> {
		self.index(luma)
			.and_then(|i| palette.get(i))
			.map_or(TRANSPARENT, |color| Rgba(color.to_rgba(u8::MAX)))
	}
}

const fn four_band(luma: u8) -> usize {
	match luma {
		192.. => 0,
		128.. => 1,
		64.. => 2,
		_ => 3,
	}
}

/// Recolors grayscale frames with a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteMapper {
	palette: Palette,
	policy: BandingPolicy,
}

impl PaletteMapper {
	/// Creates a mapper.
	pub const fn new(palette: Palette, policy: BandingPolicy) -> Self {
		Self {
			palette,
			policy,
		}
	}

	/// Returns the palette.
	pub const fn palette(&self) -> &Palette {
		&self.palette
	}

	/// Returns the banding policy.
	pub const fn policy(&self) -> BandingPolicy {
		self.policy
	}

	/// Recolors one frame into a new RGBA image of the same size.
	pub fn apply(&self, frame: &RgbaImage) -> RgbaImage {
		let mut out = RgbaImage::new(frame.width(), frame.height());
		for (dst, src) in out.pixels_mut().zip(frame.pixels()) {
			*dst = self.policy.map(luminance(*src), &self.palette);
		}
		out
	}

	/// Recolors every frame in order.
	pub fn apply_all<'a>(&self, frames: impl IntoIterator<Item = &'a RgbaImage>) -> Vec<RgbaImage> {
		frames.into_iter().map(|frame| self.apply(frame)).collect()
	}
}

/// Hides the pixels of `frame` where `mask` is light.
///
/// Mask pixels with luminance of at least [`MASK_THRESHOLD`] become fully
/// transparent, the rest keep the frame pixel. A mask of another size is
/// resized nearest-neighbor to the frame first.
pub fn apply_mask(frame: &RgbaImage, mask: &RgbaImage) -> RgbaImage {
	let resized;
	let mask = if mask.dimensions() == frame.dimensions() {
		mask
	} else {
		log::warn!(
			"Sprite and mask size mismatch: sprite {:?}, mask {:?}",
			frame.dimensions(),
			mask.dimensions()
		);
		resized = imageops::resize(mask, frame.width(), frame.height(), imageops::FilterType::Nearest);
		&resized
	};

	let mut out = frame.clone();
	for (dst, m) in out.pixels_mut().zip(mask.pixels()) {
		if luminance(*m) >= MASK_THRESHOLD {
			*dst = TRANSPARENT;
		}
	}
	out
}

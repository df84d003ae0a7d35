//! Sprite sheet slicing.
//!
//! Sheets store their frames stacked vertically, each frame as wide as the
//! sheet. Three layouts are supported:
//!
//! | Layout | Frame height                         | Used for                     |
//! |--------|--------------------------------------|------------------------------|
//! | Auto   | inferred from the sheet dimensions   | battle sprites, trainers, items |
//! | Mini   | 16 px when the sheet is 16 px wide   | overworld sprites and masks  |
//! | Icon   | 16 px, always two frames             | party icons                  |

use std::path::Path;

use image::{Rgba, RgbaImage, imageops};

use crate::RenderError;

/// Frame height used when the sheet is wider than it is tall
pub const FALLBACK_FRAME_HEIGHT: u32 = 56;

/// Width and frame height of overworld sprites
pub const MINI_FRAME_SIZE: u32 = 16;

/// Expected icon width and frame height
pub const ICON_FRAME_SIZE: u32 = 16;

/// Number of frames in an icon sheet
pub const ICON_FRAME_COUNT: u32 = 2;

/// Fill for icon rows past the end of a short sheet; white, so icon banding
/// keeps it transparent
pub const ICON_PADDING: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Sheet layout selecting how frames are cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SheetLayout {
	/// Square frames with the height inferred from the sheet
	#[default]
	Auto,
	/// Fixed 16 px frames for 16 px wide sheets, single frame otherwise
	Mini,
	/// Two fixed 16 px frames
	Icon,
}

impl SheetLayout {
	/// Slices a sheet using this layout.
	pub fn slice(self, sheet: &RgbaImage) -> Vec<RgbaImage> {
		match self {
			Self::Auto => slice_frames(sheet),
			Self::Mini => slice_mini(sheet),
			Self::Icon => slice_icon(sheet),
		}
	}
}

/// Infers the height of one frame in a `width` x `height` sheet.
///
/// Searches `h` from `width` to `height` for the first divisor of `height`
/// that is no taller than `width`, defaulting to `width`. Sheets shorter
/// than that use [`FALLBACK_FRAME_HEIGHT`] capped at `height`.
///
/// # Examples
///
/// ```
/// use gbspr_render::slicer::frame_height;
///
/// assert_eq!(frame_height(56, 224), 56);
/// assert_eq!(frame_height(64, 64), 64);
/// assert_eq!(frame_height(80, 24), 24);
/// ```
pub fn frame_height(width: u32, height: u32) -> u32 {
	let frame = (width.max(1)..=height).find(|&h| height % h == 0 && h <= width).unwrap_or(width);

	if frame > height { FALLBACK_FRAME_HEIGHT.min(height) } else { frame }
}

/// Cuts `count` frames of `frame_height` rows from the top of the sheet.
///
/// The last frame is clipped to the sheet. Returns the whole sheet as a
/// single frame when nothing could be cut.
pub fn slice_rows(sheet: &RgbaImage, frame_height: u32, count: u32) -> Vec<RgbaImage> {
	let (width, height) = sheet.dimensions();
	let frames: Vec<RgbaImage> = (0..count)
		.map(|i| i * frame_height)
		.filter(|&top| top < height)
		.map(|top| imageops::crop_imm(sheet, 0, top, width, frame_height).to_image())
		.filter(|frame| frame.width() > 0 && frame.height() > 0)
		.collect();

	if frames.is_empty() { vec![sheet.clone()] } else { frames }
}

/// Slices a sheet into square-ish frames, top to bottom.
///
/// # Arguments
///
/// * `sheet` - Decoded sprite sheet
///
/// # Returns
///
/// `height / frame_height(width, height)` frames, or the whole sheet when
/// that is zero.
pub fn slice_frames(sheet: &RgbaImage) -> Vec<RgbaImage> {
	let (width, height) = sheet.dimensions();
	let frame = frame_height(width, height);
	if frame == 0 {
		return vec![sheet.clone()];
	}
	slice_rows(sheet, frame, height / frame)
}

/// Slices an overworld sheet.
///
/// 16 px wide sheets taller than wide hold 16 px frames; any other sheet is
/// a single frame.
pub fn slice_mini(sheet: &RgbaImage) -> Vec<RgbaImage> {
	let (width, height) = sheet.dimensions();
	if width == MINI_FRAME_SIZE && height > width {
		slice_rows(sheet, MINI_FRAME_SIZE, height / MINI_FRAME_SIZE)
	} else {
		vec![sheet.clone()]
	}
}

/// Slices an icon sheet into its two frames.
///
/// Every frame is as wide as the sheet and [`ICON_FRAME_SIZE`] rows tall.
/// Sheets other than 16x32 are sliced the same way after a warning, with
/// rows past the bottom of the sheet filled with [`ICON_PADDING`].
pub fn slice_icon(sheet: &RgbaImage) -> Vec<RgbaImage> {
	let (width, height) = sheet.dimensions();
	if width != ICON_FRAME_SIZE || height != ICON_FRAME_SIZE * ICON_FRAME_COUNT {
		log::warn!("Unexpected icon dimensions: {width}x{height}");
	}

	(0..ICON_FRAME_COUNT)
		.map(|i| {
			let top = i * ICON_FRAME_SIZE;
			let mut frame = RgbaImage::from_pixel(width, ICON_FRAME_SIZE, ICON_PADDING);
			if top < height {
				let rows = imageops::crop_imm(sheet, 0, top, width, ICON_FRAME_SIZE).to_image();
				imageops::replace(&mut frame, &rows, 0, 0);
			}
			frame
		})
		.collect()
}

/// Opens and decodes a sheet as RGBA.
///
/// # Errors
///
/// Returns [`RenderError::Decode`] if the file is missing or not a
/// decodable image.
pub fn open_sheet(path: impl AsRef<Path>) -> Result<RgbaImage, RenderError> {
	let path = path.as_ref();
	image::open(path).map(|img| img.to_rgba8()).map_err(|source| RenderError::Decode {
		path: path.to_path_buf(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Sheet whose pixel at row `y` has red channel `y`.
	fn ramp(width: u32, height: u32) -> RgbaImage {
		RgbaImage::from_fn(width, height, |_, y| Rgba([y as u8, 0, 0, 255]))
	}

	#[test]
	fn test_frame_height() {
		assert_eq!(frame_height(16, 32), 16);
		assert_eq!(frame_height(64, 64), 64);
		// not a divisor, still the width
		assert_eq!(frame_height(64, 100), 64);
		// wider than tall
		assert_eq!(frame_height(80, 40), 40);
		assert_eq!(frame_height(80, 60), 56);
	}

	#[test]
	fn test_slice_two_frames() {
		let frames = slice_frames(&ramp(16, 32));
		assert_eq!(frames.len(), 2);
		assert_eq!(frames[0].dimensions(), (16, 16));
		assert_eq!(frames[0].get_pixel(0, 0)[0], 0);
		assert_eq!(frames[1].get_pixel(0, 0)[0], 16);
	}

	#[test]
	fn test_slice_square_sheet() {
		let sheet = ramp(64, 64);
		let frames = slice_frames(&sheet);
		assert_eq!(frames.len(), 1);
		assert_eq!(frames[0], sheet);
	}

	#[test]
	fn test_slice_wide_sheet_uses_fallback() {
		let frames = slice_frames(&ramp(80, 60));
		assert_eq!(frames.len(), 1);
		assert_eq!(frames[0].dimensions(), (80, 56));
	}

	#[test]
	fn test_reslice_is_identity() {
		let frames = slice_frames(&ramp(40, 120));
		assert_eq!(frames.len(), 3);
		for frame in &frames {
			assert_eq!(slice_frames(frame), vec![frame.clone()]);
		}
	}

	#[test]
	fn test_slice_empty_sheet() {
		let sheet = RgbaImage::new(0, 0);
		assert_eq!(slice_frames(&sheet).len(), 1);
		let sheet = RgbaImage::new(0, 8);
		assert_eq!(slice_frames(&sheet).len(), 1);
	}

	#[test]
	fn test_slice_mini() {
		assert_eq!(slice_mini(&ramp(16, 48)).len(), 3);
		assert_eq!(slice_mini(&ramp(16, 16)).len(), 1);
		assert_eq!(slice_mini(&ramp(32, 64)).len(), 1);
		// trailing rows shorter than a frame are dropped
		assert_eq!(slice_mini(&ramp(16, 40)).len(), 2);
	}

	#[test_log::test]
	fn test_slice_icon() {
		let frames = slice_icon(&ramp(16, 32));
		assert_eq!(frames.len(), 2);
		assert_eq!(frames[1].get_pixel(0, 0)[0], 16);

		assert!(frames.iter().all(|f| f.dimensions() == (16, 16)));
	}

	#[test_log::test]
	fn test_slice_icon_pads_short_sheet() {
		let frames = slice_icon(&ramp(16, 24));
		assert_eq!(frames.len(), 2);
		assert_eq!(frames[1].dimensions(), (16, 16));
		assert_eq!(frames[1].get_pixel(0, 7), &Rgba([23, 0, 0, 255]));
		assert_eq!(frames[1].get_pixel(0, 8), &ICON_PADDING);

		let frames = slice_icon(&ramp(16, 12));
		assert_eq!(frames.len(), 2);
		assert_eq!(frames[0].get_pixel(0, 11), &Rgba([11, 0, 0, 255]));
		assert_eq!(frames[0].get_pixel(0, 12), &ICON_PADDING);
		assert!(frames[1].pixels().all(|p| *p == ICON_PADDING));
	}

	#[test]
	fn test_icon_padding_stays_transparent() {
		use crate::mapper::{BandingPolicy, luminance};
		assert_eq!(BandingPolicy::Icon.index(luminance(ICON_PADDING)), None);
	}

	#[test]
	fn test_open_sheet_missing() {
		let dir = tempfile::tempdir().unwrap();
		let err = open_sheet(dir.path().join("front.png")).unwrap_err();
		assert!(matches!(err, RenderError::Decode { .. }));
	}
}

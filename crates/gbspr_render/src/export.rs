//! Static and animated sprite output.
//!
//! Static sprites are written as PNG. Animations are written as looping GIFs
//! where each frame clears to the background before the next one is drawn,
//! so transparent areas never show the previous frame.

use std::{
	fs::File,
	io::{BufWriter, Write},
	path::Path,
};

use gbspr_types::timing::FrameDelays;
use image::{ImageFormat, RgbaImage};

use crate::RenderError;

/// Encoder speed passed to the GIF quantizer (1 = best, 30 = fastest)
const GIF_QUANTIZE_SPEED: i32 = 10;

/// A recolored frame and its display time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedFrame {
	/// Frame pixels
	pub image: RgbaImage,
	/// Delay in centiseconds
	pub delay: u16,
}

impl TimedFrame {
	/// Creates a timed frame.
	pub fn new(image: RgbaImage, delay: u16) -> Self {
		Self {
			image,
			delay,
		}
	}

	/// Delay in milliseconds.
	pub fn delay_ms(&self) -> u32 {
		u32::from(self.delay) * 10
	}

	/// Pairs frames with their encoded delays.
	///
	/// # Errors
	///
	/// Returns [`RenderError::DelayCountMismatch`] if the counts differ.
	pub fn zip(frames: Vec<RgbaImage>, delays: &FrameDelays) -> Result<Vec<Self>, RenderError> {
		if frames.len() != delays.len() {
			return Err(RenderError::DelayCountMismatch {
				frames: frames.len(),
				delays: delays.len(),
			});
		}
		Ok(frames.into_iter().zip(delays.centiseconds()).map(|(image, &delay)| Self::new(image, delay)).collect())
	}
}

fn ensure_parent(path: &Path) -> Result<(), RenderError> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		std::fs::create_dir_all(parent)?;
	}
	Ok(())
}

/// Writes a frame as PNG, creating parent directories.
pub fn save_png(image: &RgbaImage, path: impl AsRef<Path>) -> Result<(), RenderError> {
	let path = path.as_ref();
	ensure_parent(path)?;
	image.save_with_format(path, ImageFormat::Png)?;
	Ok(())
}

/// Encodes frames as an infinitely looping GIF.
///
/// The logical screen is sized to the largest frame; every frame is placed
/// at the top-left corner and disposed to background.
///
/// # Arguments
///
/// * `writer` - Destination of the GIF stream
/// * `frames` - Frames in display order
///
/// # Errors
///
/// Returns [`RenderError::NoFrames`] for an empty slice and
/// [`RenderError::FrameTooLarge`] for frames over 65535 pixels on a side.
pub fn encode_gif<W: Write>(writer: W, frames: &[TimedFrame]) -> Result<(), RenderError> {
	let width = frames.iter().map(|f| f.image.width()).max().ok_or(RenderError::NoFrames)?;
	let height = frames.iter().map(|f| f.image.height()).max().ok_or(RenderError::NoFrames)?;
	let (screen_width, screen_height) = gif_dimensions(width, height)?;

	let mut encoder = gif::Encoder::new(writer, screen_width, screen_height, &[])?;
	encoder.set_repeat(gif::Repeat::Infinite)?;

	for timed in frames {
		let (w, h) = gif_dimensions(timed.image.width(), timed.image.height())?;
		let mut pixels = timed.image.as_raw().clone();
		let mut frame = gif::Frame::from_rgba_speed(w, h, &mut pixels, GIF_QUANTIZE_SPEED);
		frame.delay = timed.delay;
		frame.dispose = gif::DisposalMethod::Background;
		encoder.write_frame(&frame)?;
	}

	Ok(())
}

/// Writes frames to a GIF file, creating parent directories.
pub fn write_gif(frames: &[TimedFrame], path: impl AsRef<Path>) -> Result<(), RenderError> {
	let path = path.as_ref();
	ensure_parent(path)?;
	let mut writer = BufWriter::new(File::create(path)?);
	encode_gif(&mut writer, frames)?;
	writer.flush()?;
	Ok(())
}

fn gif_dimensions(width: u32, height: u32) -> Result<(u16, u16), RenderError> {
	match (u16::try_from(width), u16::try_from(height)) {
		(Ok(w), Ok(h)) => Ok((w, h)),
		_ => Err(RenderError::FrameTooLarge {
			width,
			height,
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use gbspr_types::timing::TimingEncoder;
	use image::Rgba;

	fn solid(value: u8, alpha: u8) -> RgbaImage {
		RgbaImage::from_pixel(4, 4, Rgba([value, value, value, alpha]))
	}

	#[test]
	fn test_zip_count_mismatch() {
		let delays = TimingEncoder::new().encode(&[100.0], 1);
		let err = TimedFrame::zip(vec![solid(0, 255), solid(9, 255)], &delays).unwrap_err();
		assert!(matches!(err, RenderError::DelayCountMismatch { frames: 2, delays: 1 }));
	}

	#[test]
	fn test_encode_gif_frames() {
		let delays = TimingEncoder::new().encode(&[100.0, 50.0], 2);
		let frames = TimedFrame::zip(vec![solid(0, 255), solid(200, 0)], &delays).unwrap();

		let mut bytes = Vec::new();
		encode_gif(&mut bytes, &frames).unwrap();

		let mut options = gif::DecodeOptions::new();
		options.set_color_output(gif::ColorOutput::RGBA);
		let mut decoder = options.read_info(bytes.as_slice()).unwrap();
		assert_eq!((decoder.width(), decoder.height()), (4, 4));

		let mut decoded = Vec::new();
		while let Some(frame) = decoder.read_next_frame().unwrap() {
			decoded.push((frame.delay, frame.dispose, frame.buffer[3]));
		}
		assert_eq!(
			decoded,
			vec![
				(10, gif::DisposalMethod::Background, 255),
				(35, gif::DisposalMethod::Background, 0),
			]
		);
	}

	#[test]
	fn test_encode_gif_empty() {
		let err = encode_gif(Vec::new(), &[]).unwrap_err();
		assert!(matches!(err, RenderError::NoFrames));
	}

	#[test]
	fn test_write_files() {
		let dir = tempfile::tempdir().unwrap();
		let png = dir.path().join("abra").join("normal_front.png");
		let gif_path = dir.path().join("abra").join("normal_front_animated.gif");

		save_png(&solid(85, 255), &png).unwrap();
		write_gif(&[TimedFrame::new(solid(85, 255), 30)], &gif_path).unwrap();

		assert_eq!(image::image_dimensions(&png).unwrap(), (4, 4));
		assert_eq!(image::image_dimensions(&gif_path).unwrap(), (4, 4));
	}
}
